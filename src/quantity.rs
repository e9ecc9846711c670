use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::units::{Dimension, Unit, UnitError};

/// 크기(magnitude)와 단위를 함께 담는 값.
///
/// `15.4 * VelocityUnit::Knot.unit()` 처럼 `f64 * Unit`으로 만들 수 있다.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    magnitude: f64,
    unit: Unit,
}

impl Quantity {
    pub fn new(magnitude: f64, unit: Unit) -> Self {
        Self { magnitude, unit }
    }

    /// `"15.4 knot"`, `"10.2 mile/hour"` 같은 문자열을 해석한다.
    ///
    /// 숫자 뒤에 단위식이 반드시 와야 한다. 단위 없는 숫자는 `UnitError::Syntax`.
    pub fn parse(text: &str) -> Result<Quantity, UnitError> {
        let trimmed = text.trim();
        let (number, unit) = split_number(trimmed);
        let magnitude = number.parse::<f64>().map_err(|_| UnitError::Syntax {
            input: text.to_string(),
            reason: format!("숫자가 아님: '{number}'"),
        })?;
        if unit.trim().is_empty() {
            return Err(UnitError::Syntax {
                input: text.to_string(),
                reason: "단위가 없음".to_string(),
            });
        }
        Ok(Quantity::new(magnitude, Unit::parse(unit)?))
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn dimensionality(&self) -> Dimension {
        self.unit.dimension()
    }

    /// 차원 문자열(`[length]/[time]` 등)과 차원이 같은지 확인한다.
    pub fn check(&self, dimensionality: &str) -> Result<bool, UnitError> {
        Ok(self.dimensionality() == Dimension::parse(dimensionality)?)
    }

    /// `target` 단위로 환산한 새 값을 반환한다.
    pub fn to(&self, target: &Unit) -> Result<Quantity, UnitError> {
        let magnitude = self.unit.convert_to(self.magnitude, target)?;
        Ok(Quantity::new(magnitude, target.clone()))
    }

    /// SI 일관 단위 기준의 크기.
    pub fn base_magnitude(&self) -> f64 {
        self.magnitude * self.unit.factor()
    }
}

fn split_number(text: &str) -> (&str, &str) {
    let mut end = 0;
    let mut prev = None;
    for (i, c) in text.char_indices() {
        let numeric = c.is_ascii_digit()
            || c == '.'
            || ((c == '-' || c == '+') && matches!(prev, None | Some('e') | Some('E')))
            || ((c == 'e' || c == 'E')
                && prev.is_some_and(|p: char| p.is_ascii_digit() || p == '.')
                && text[i + 1..]
                    .chars()
                    .next()
                    .is_some_and(|n| n.is_ascii_digit() || n == '-' || n == '+'));
        if !numeric {
            break;
        }
        end = i + c.len_utf8();
        prev = Some(c);
    }
    (&text[..end], text[end..].trim_start())
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(precision) = f.precision() {
            write!(f, "{:.*} {}", precision, self.magnitude, self.unit)
        } else {
            write!(f, "{} {}", self.magnitude, self.unit)
        }
    }
}

impl std::str::FromStr for Quantity {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Quantity::parse(s)
    }
}

impl Mul<Unit> for f64 {
    type Output = Quantity;

    fn mul(self, rhs: Unit) -> Quantity {
        Quantity::new(self, rhs)
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: f64) -> Quantity {
        Quantity::new(self.magnitude * rhs, self.unit)
    }
}

impl Div<f64> for Quantity {
    type Output = Quantity;

    fn div(self, rhs: f64) -> Quantity {
        Quantity::new(self.magnitude / rhs, self.unit)
    }
}

impl Mul for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: Quantity) -> Quantity {
        Quantity::new(self.magnitude * rhs.magnitude, self.unit * rhs.unit)
    }
}

impl Div for Quantity {
    type Output = Quantity;

    fn div(self, rhs: Quantity) -> Quantity {
        Quantity::new(self.magnitude / rhs.magnitude, self.unit / rhs.unit)
    }
}

impl Neg for Quantity {
    type Output = Quantity;

    fn neg(self) -> Quantity {
        Quantity::new(-self.magnitude, self.unit)
    }
}

// 덧셈/뺄셈은 차원이 다를 수 있으므로 Result를 반환한다. 결과는 왼쪽 단위로 표현된다.
impl Add for Quantity {
    type Output = Result<Quantity, UnitError>;

    fn add(self, rhs: Quantity) -> Self::Output {
        let rhs = rhs.to(&self.unit)?;
        Ok(Quantity::new(self.magnitude + rhs.magnitude, self.unit))
    }
}

impl Sub for Quantity {
    type Output = Result<Quantity, UnitError>;

    fn sub(self, rhs: Quantity) -> Self::Output {
        let rhs = rhs.to(&self.unit)?;
        Ok(Quantity::new(self.magnitude - rhs.magnitude, self.unit))
    }
}
