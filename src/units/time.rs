use serde::{Deserialize, Serialize};

use super::dimension::Dimension;
use super::unit::Unit;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// 시간 단위. 내부 기준은 초이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    Second,
    Millisecond,
    Minute,
    Hour,
    Day,
    Week,
    Year,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 7] = [
        TimeUnit::Second,
        TimeUnit::Millisecond,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::Week,
        TimeUnit::Year,
    ];

    pub fn to_second_factor(self) -> f64 {
        match self {
            TimeUnit::Second => 1.0,
            TimeUnit::Millisecond => 1e-3,
            TimeUnit::Minute => 60.0,
            TimeUnit::Hour => 3_600.0,
            TimeUnit::Day => SECONDS_PER_DAY,
            TimeUnit::Week => 7.0 * SECONDS_PER_DAY,
            // 율리우스년
            TimeUnit::Year => 365.25 * SECONDS_PER_DAY,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            TimeUnit::Second => "s",
            TimeUnit::Millisecond => "ms",
            TimeUnit::Minute => "min",
            TimeUnit::Hour => "h",
            TimeUnit::Day => "d",
            TimeUnit::Week => "wk",
            TimeUnit::Year => "yr",
        }
    }

    pub fn names(self) -> &'static [&'static str] {
        match self {
            TimeUnit::Second => &["s", "sec", "second"],
            TimeUnit::Millisecond => &["ms", "millisecond"],
            TimeUnit::Minute => &["min", "minute"],
            TimeUnit::Hour => &["h", "hr", "hour"],
            TimeUnit::Day => &["d", "day"],
            TimeUnit::Week => &["wk", "week"],
            TimeUnit::Year => &["yr", "a", "year", "julian_year"],
        }
    }

    pub fn unit(self) -> Unit {
        Unit::new(self.symbol(), self.to_second_factor(), Dimension::TIME)
    }
}

/// 시간을 변환한다.
pub fn convert_time(value: f64, from: TimeUnit, to: TimeUnit) -> f64 {
    value * from.to_second_factor() / to.to_second_factor()
}
