use std::fmt;
use std::ops::{Div, Mul};

use super::dimension::Dimension;
use super::expr::{self, Atom, Term};
use super::{registry, UnitError};

/// 측정 단위. `factor`는 같은 차원의 SI 일관 단위(m, kg, s, m/s ...)로 환산하는 배율이다.
///
/// 곱셈형 단위만 다룬다. 섭씨처럼 원점이 이동하는 단위는 지원하지 않는다.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    symbol: String,
    factor: f64,
    dimension: Dimension,
}

impl Unit {
    pub fn new(symbol: impl Into<String>, factor: f64, dimension: Dimension) -> Self {
        Self {
            symbol: symbol.into(),
            factor,
            dimension,
        }
    }

    pub fn dimensionless() -> Self {
        Self::new("dimensionless", 1.0, Dimension::DIMENSIONLESS)
    }

    /// m/s
    pub fn meter_per_second() -> Self {
        Self::new("m/s", 1.0, Dimension::VELOCITY)
    }

    /// m
    pub fn meter() -> Self {
        Self::new("m", 1.0, Dimension::LENGTH)
    }

    /// 단위식을 해석한다. 예: `knot`, `mile / hour`, `m/s^2`, `kg*m/s**2`.
    ///
    /// 복수형 이름(`miles`, `hours`)도 허용한다.
    pub fn parse(text: &str) -> Result<Unit, UnitError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(UnitError::Syntax {
                input: text.to_string(),
                reason: "단위식이 비어 있음".to_string(),
            });
        }
        let unit = expr::parse(trimmed, |atom| match atom {
            Atom::Name(name) => registry::lookup(name),
            Atom::Bracketed(name) => Err(UnitError::Syntax {
                input: trimmed.to_string(),
                reason: format!("단위식에는 차원 이름을 쓸 수 없음: '[{name}]'"),
            }),
        })?;
        // 단일 이름이면 등록된 기호를, 조합식이면 입력 표기를 그대로 기호로 쓴다
        if registry::is_single_name(trimmed) {
            Ok(unit)
        } else {
            Ok(unit.with_symbol(trimmed))
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    /// 두 단위가 같은 차원인지 확인한다.
    pub fn is_compatible_with(&self, other: &Unit) -> bool {
        self.dimension == other.dimension
    }

    /// 이 단위의 값 `value`를 `target` 단위 값으로 환산한다.
    pub fn convert_to(&self, value: f64, target: &Unit) -> Result<f64, UnitError> {
        if !self.is_compatible_with(target) {
            return Err(UnitError::Incompatible {
                from: self.symbol.clone(),
                from_dimension: self.dimension,
                to: target.symbol.clone(),
                to_dimension: target.dimension,
            });
        }
        Ok(value * self.factor / target.factor)
    }

    pub fn powi(self, n: i8) -> Unit {
        let dimension = self.dimension.powi(n);
        self.raised(n, dimension)
    }

    /// 차원 지수가 범위를 넘으면 `None`.
    pub fn checked_powi(self, n: i8) -> Option<Unit> {
        let dimension = self.dimension.checked_powi(n)?;
        Some(self.raised(n, dimension))
    }

    /// 차원 지수가 범위를 넘으면 `None`.
    pub fn checked_mul(self, rhs: Unit) -> Option<Unit> {
        let dimension = self.dimension.checked_mul(rhs.dimension)?;
        let factor = self.factor * rhs.factor;
        Some(self.combined('*', &rhs.symbol, factor, dimension))
    }

    /// 차원 지수가 범위를 넘으면 `None`.
    pub fn checked_div(self, rhs: Unit) -> Option<Unit> {
        let dimension = self.dimension.checked_div(rhs.dimension)?;
        let factor = self.factor / rhs.factor;
        Some(self.combined('/', &rhs.symbol, factor, dimension))
    }

    fn raised(self, n: i8, dimension: Dimension) -> Unit {
        let symbol = if n == 1 {
            self.symbol
        } else {
            format!("{}^{n}", wrap(&self.symbol))
        };
        Unit {
            symbol,
            factor: self.factor.powi(i32::from(n)),
            dimension,
        }
    }

    fn combined(self, op: char, rhs_symbol: &str, factor: f64, dimension: Dimension) -> Unit {
        Unit {
            symbol: format!("{}{op}{}", wrap(&self.symbol), wrap(rhs_symbol)),
            factor,
            dimension,
        }
    }
}

fn wrap(symbol: &str) -> String {
    if symbol.contains(|c: char| matches!(c, '*' | '/' | ' ' | '^')) {
        format!("({symbol})")
    } else {
        symbol.to_string()
    }
}

impl Mul for Unit {
    type Output = Unit;

    fn mul(self, rhs: Unit) -> Unit {
        let dimension = self.dimension * rhs.dimension;
        let factor = self.factor * rhs.factor;
        self.combined('*', &rhs.symbol, factor, dimension)
    }
}

impl Div for Unit {
    type Output = Unit;

    fn div(self, rhs: Unit) -> Unit {
        let dimension = self.dimension / rhs.dimension;
        let factor = self.factor / rhs.factor;
        self.combined('/', &rhs.symbol, factor, dimension)
    }
}

impl Term for Unit {
    fn one() -> Self {
        Unit::dimensionless()
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        Unit::checked_mul(self, rhs)
    }

    fn checked_div(self, rhs: Self) -> Option<Self> {
        Unit::checked_div(self, rhs)
    }

    fn checked_powi(self, n: i8) -> Option<Self> {
        Unit::checked_powi(self, n)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

impl std::str::FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::parse(s)
    }
}
