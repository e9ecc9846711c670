use serde::{Deserialize, Serialize};

use super::dimension::Dimension;
use super::unit::Unit;

/// 속도 단위. 내부 기준은 m/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VelocityUnit {
    MeterPerSecond,
    KilometerPerHour,
    FootPerSecond,
    MilePerHour,
    Knot,
}

impl VelocityUnit {
    pub const ALL: [VelocityUnit; 5] = [
        VelocityUnit::MeterPerSecond,
        VelocityUnit::KilometerPerHour,
        VelocityUnit::FootPerSecond,
        VelocityUnit::MilePerHour,
        VelocityUnit::Knot,
    ];

    pub fn to_mps_factor(self) -> f64 {
        match self {
            VelocityUnit::MeterPerSecond => 1.0,
            VelocityUnit::KilometerPerHour => 1.0 / 3.6,
            VelocityUnit::FootPerSecond => 0.3048,
            VelocityUnit::MilePerHour => 0.447_04,
            // 1 knot = 1 해리(1852 m) / 시간
            VelocityUnit::Knot => 1852.0 / 3600.0,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            VelocityUnit::MeterPerSecond => "m/s",
            VelocityUnit::KilometerPerHour => "km/h",
            VelocityUnit::FootPerSecond => "ft/s",
            VelocityUnit::MilePerHour => "mph",
            VelocityUnit::Knot => "kn",
        }
    }

    /// 단위식 파서가 하나의 이름으로 인식하는 표기. `m/s` 같은 조합식은 파서가 직접 계산한다.
    pub fn names(self) -> &'static [&'static str] {
        match self {
            VelocityUnit::MeterPerSecond => &["mps"],
            VelocityUnit::KilometerPerHour => &["kph"],
            VelocityUnit::FootPerSecond => &["fps"],
            VelocityUnit::MilePerHour => &["mph"],
            VelocityUnit::Knot => &["kn", "kt", "knot"],
        }
    }

    pub fn unit(self) -> Unit {
        Unit::new(self.symbol(), self.to_mps_factor(), Dimension::VELOCITY)
    }
}

fn to_mps(value: f64, unit: VelocityUnit) -> f64 {
    value * unit.to_mps_factor()
}

fn from_mps(value: f64, unit: VelocityUnit) -> f64 {
    value / unit.to_mps_factor()
}

/// 속도를 변환한다.
pub fn convert_velocity(value: f64, from: VelocityUnit, to: VelocityUnit) -> f64 {
    let base = to_mps(value, from);
    from_mps(base, to)
}
