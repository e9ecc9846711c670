use serde::{Deserialize, Serialize};

use super::dimension::Dimension;
use super::unit::Unit;

/// 길이 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Millimeter,
    Centimeter,
    Kilometer,
    Inch,
    Foot,
    Yard,
    Mile,
    NauticalMile,
    Angstrom,
    AstronomicalUnit,
    LightYear,
    Parsec,
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 13] = [
        LengthUnit::Meter,
        LengthUnit::Millimeter,
        LengthUnit::Centimeter,
        LengthUnit::Kilometer,
        LengthUnit::Inch,
        LengthUnit::Foot,
        LengthUnit::Yard,
        LengthUnit::Mile,
        LengthUnit::NauticalMile,
        LengthUnit::Angstrom,
        LengthUnit::AstronomicalUnit,
        LengthUnit::LightYear,
        LengthUnit::Parsec,
    ];

    /// 1 단위가 몇 미터인지 반환한다.
    pub fn to_meter_factor(self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Millimeter => 1e-3,
            LengthUnit::Centimeter => 1e-2,
            LengthUnit::Kilometer => 1e3,
            LengthUnit::Inch => 0.0254,
            LengthUnit::Foot => 0.3048,
            LengthUnit::Yard => 0.9144,
            LengthUnit::Mile => 1609.344,
            LengthUnit::NauticalMile => 1852.0,
            LengthUnit::Angstrom => 1e-10,
            LengthUnit::AstronomicalUnit => 149_597_870_700.0,
            // 율리우스년(365.25일) 기준
            LengthUnit::LightYear => 9_460_730_472_580_800.0,
            LengthUnit::Parsec => 3.085_677_581_491_367e16,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Kilometer => "km",
            LengthUnit::Inch => "in",
            LengthUnit::Foot => "ft",
            LengthUnit::Yard => "yd",
            LengthUnit::Mile => "mi",
            LengthUnit::NauticalMile => "nmi",
            LengthUnit::Angstrom => "Å",
            LengthUnit::AstronomicalUnit => "au",
            LengthUnit::LightYear => "ly",
            LengthUnit::Parsec => "pc",
        }
    }

    /// 단위식 파서가 인식하는 이름(기호 포함).
    pub fn names(self) -> &'static [&'static str] {
        match self {
            LengthUnit::Meter => &["m", "meter", "metre"],
            LengthUnit::Millimeter => &["mm", "millimeter", "millimetre"],
            LengthUnit::Centimeter => &["cm", "centimeter", "centimetre"],
            LengthUnit::Kilometer => &["km", "kilometer", "kilometre"],
            LengthUnit::Inch => &["in", "inch", "inches"],
            LengthUnit::Foot => &["ft", "foot", "feet"],
            LengthUnit::Yard => &["yd", "yard"],
            LengthUnit::Mile => &["mi", "mile"],
            LengthUnit::NauticalMile => &["nmi", "nautical_mile"],
            LengthUnit::Angstrom => &["Å", "angstrom"],
            LengthUnit::AstronomicalUnit => &["au", "astronomical_unit"],
            LengthUnit::LightYear => &["ly", "lightyear", "light_year"],
            LengthUnit::Parsec => &["pc", "parsec"],
        }
    }

    pub fn unit(self) -> Unit {
        Unit::new(self.symbol(), self.to_meter_factor(), Dimension::LENGTH)
    }
}

fn to_meter(value: f64, unit: LengthUnit) -> f64 {
    value * unit.to_meter_factor()
}

fn from_meter(value_m: f64, unit: LengthUnit) -> f64 {
    value_m / unit.to_meter_factor()
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    let m = to_meter(value, from);
    from_meter(m, to)
}
