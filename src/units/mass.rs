use serde::{Deserialize, Serialize};

use super::dimension::Dimension;
use super::unit::Unit;

/// 질량 단위. 내부 기준은 kg이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    Kilogram,
    Gram,
    Tonne,
    Pound,
}

impl MassUnit {
    pub const ALL: [MassUnit; 4] = [
        MassUnit::Kilogram,
        MassUnit::Gram,
        MassUnit::Tonne,
        MassUnit::Pound,
    ];

    pub fn to_kg_factor(self) -> f64 {
        match self {
            MassUnit::Kilogram => 1.0,
            MassUnit::Gram => 1e-3,
            MassUnit::Tonne => 1e3,
            MassUnit::Pound => 0.453_592_37,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            MassUnit::Kilogram => "kg",
            MassUnit::Gram => "g",
            MassUnit::Tonne => "t",
            MassUnit::Pound => "lb",
        }
    }

    pub fn names(self) -> &'static [&'static str] {
        match self {
            MassUnit::Kilogram => &["kg", "kilogram"],
            MassUnit::Gram => &["g", "gram"],
            MassUnit::Tonne => &["t", "tonne", "metric_ton"],
            MassUnit::Pound => &["lb", "lbs", "lbm", "pound"],
        }
    }

    pub fn unit(self) -> Unit {
        Unit::new(self.symbol(), self.to_kg_factor(), Dimension::MASS)
    }
}

/// 질량을 변환한다.
pub fn convert_mass(value: f64, from: MassUnit, to: MassUnit) -> f64 {
    value * from.to_kg_factor() / to.to_kg_factor()
}
