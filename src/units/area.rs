use serde::{Deserialize, Serialize};

use super::dimension::Dimension;
use super::unit::Unit;

/// 면적 단위. 내부 기준은 제곱미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    SquareMeter,
    SquareFoot,
    Hectare,
    Acre,
}

impl AreaUnit {
    pub const ALL: [AreaUnit; 4] = [
        AreaUnit::SquareMeter,
        AreaUnit::SquareFoot,
        AreaUnit::Hectare,
        AreaUnit::Acre,
    ];

    pub fn to_square_meter_factor(self) -> f64 {
        match self {
            AreaUnit::SquareMeter => 1.0,
            AreaUnit::SquareFoot => 0.092_903_04,
            AreaUnit::Hectare => 1e4,
            AreaUnit::Acre => 4_046.856_422_4,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            AreaUnit::SquareMeter => "m²",
            AreaUnit::SquareFoot => "ft²",
            AreaUnit::Hectare => "ha",
            AreaUnit::Acre => "acre",
        }
    }

    pub fn names(self) -> &'static [&'static str] {
        match self {
            AreaUnit::SquareMeter => &["m2", "m²", "sqm"],
            AreaUnit::SquareFoot => &["ft2", "ft²", "sqft"],
            AreaUnit::Hectare => &["ha", "hectare"],
            AreaUnit::Acre => &["acre"],
        }
    }

    pub fn unit(self) -> Unit {
        Unit::new(self.symbol(), self.to_square_meter_factor(), Dimension::AREA)
    }
}

/// 면적을 변환한다.
pub fn convert_area(value: f64, from: AreaUnit, to: AreaUnit) -> f64 {
    value * from.to_square_meter_factor() / to.to_square_meter_factor()
}
