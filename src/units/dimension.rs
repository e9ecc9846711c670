use std::fmt;
use std::ops::{Div, Mul};

use super::expr::{self, Atom, Term};
use super::UnitError;

/// 기본 차원 이름. 순서는 `Dimension`의 지수 배열 순서와 같다.
pub const BASE_DIMENSIONS: [&str; 7] = [
    "length",
    "mass",
    "time",
    "current",
    "temperature",
    "substance",
    "luminosity",
];

/// 기본 차원별 지수로 표현한 물리 차원.
///
/// 각도(라디안, 도)는 무차원으로 취급한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimension([i8; 7]);

impl Dimension {
    pub const DIMENSIONLESS: Dimension = Dimension([0; 7]);
    pub const LENGTH: Dimension = Dimension([1, 0, 0, 0, 0, 0, 0]);
    pub const MASS: Dimension = Dimension([0, 1, 0, 0, 0, 0, 0]);
    pub const TIME: Dimension = Dimension([0, 0, 1, 0, 0, 0, 0]);
    pub const CURRENT: Dimension = Dimension([0, 0, 0, 1, 0, 0, 0]);
    pub const TEMPERATURE: Dimension = Dimension([0, 0, 0, 0, 1, 0, 0]);
    pub const SUBSTANCE: Dimension = Dimension([0, 0, 0, 0, 0, 1, 0]);
    pub const LUMINOSITY: Dimension = Dimension([0, 0, 0, 0, 0, 0, 1]);
    pub const VELOCITY: Dimension = Dimension([1, 0, -1, 0, 0, 0, 0]);
    pub const AREA: Dimension = Dimension([2, 0, 0, 0, 0, 0, 0]);

    /// 기본 차원 이름(`length`, `time` 등)으로 차원을 찾는다.
    pub fn base(name: &str) -> Option<Dimension> {
        let idx = BASE_DIMENSIONS.iter().position(|b| *b == name)?;
        let mut exps = [0; 7];
        exps[idx] = 1;
        Some(Dimension(exps))
    }

    pub fn exponents(&self) -> [i8; 7] {
        self.0
    }

    pub fn is_dimensionless(&self) -> bool {
        self.0.iter().all(|e| *e == 0)
    }

    /// 차원을 정수 거듭제곱한다.
    pub fn powi(self, n: i8) -> Dimension {
        let mut exps = self.0;
        for e in exps.iter_mut() {
            *e *= n;
        }
        Dimension(exps)
    }

    /// 지수가 `i8` 범위를 넘으면 `None`.
    pub fn checked_powi(self, n: i8) -> Option<Dimension> {
        let mut exps = self.0;
        for e in exps.iter_mut() {
            *e = e.checked_mul(n)?;
        }
        Some(Dimension(exps))
    }

    /// 지수가 `i8` 범위를 넘으면 `None`.
    pub fn checked_mul(self, rhs: Dimension) -> Option<Dimension> {
        let mut exps = self.0;
        for (e, r) in exps.iter_mut().zip(rhs.0) {
            *e = e.checked_add(r)?;
        }
        Some(Dimension(exps))
    }

    /// 지수가 `i8` 범위를 넘으면 `None`.
    pub fn checked_div(self, rhs: Dimension) -> Option<Dimension> {
        let mut exps = self.0;
        for (e, r) in exps.iter_mut().zip(rhs.0) {
            *e = e.checked_sub(r)?;
        }
        Some(Dimension(exps))
    }

    /// `[length]/[time]` 형식의 차원 문자열을 해석한다.
    ///
    /// 대괄호로 감싼 기본 차원 이름을 `*`, `/`, `^n`(또는 `**n`), 괄호로 조합할 수 있다.
    /// 숫자 `1`은 무차원을 의미한다.
    pub fn parse(text: &str) -> Result<Dimension, UnitError> {
        expr::parse(text, |atom| match atom {
            Atom::Bracketed(name) => {
                Dimension::base(name).ok_or_else(|| UnitError::UnknownDimension(name.to_string()))
            }
            Atom::Name(name) => Err(UnitError::Syntax {
                input: text.to_string(),
                reason: format!("차원 이름은 대괄호로 감싸야 함: '{name}'"),
            }),
        })
    }
}

impl Mul for Dimension {
    type Output = Dimension;

    fn mul(self, rhs: Dimension) -> Dimension {
        let mut exps = self.0;
        for (e, r) in exps.iter_mut().zip(rhs.0) {
            *e += r;
        }
        Dimension(exps)
    }
}

impl Div for Dimension {
    type Output = Dimension;

    fn div(self, rhs: Dimension) -> Dimension {
        let mut exps = self.0;
        for (e, r) in exps.iter_mut().zip(rhs.0) {
            *e -= r;
        }
        Dimension(exps)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "dimensionless");
        }
        let render = |e: i8, name: &str| {
            if e.abs() == 1 {
                format!("[{name}]")
            } else {
                format!("[{name}]^{}", e.abs())
            }
        };
        let num: Vec<String> = BASE_DIMENSIONS
            .iter()
            .zip(self.0)
            .filter(|(_, e)| *e > 0)
            .map(|(name, e)| render(e, name))
            .collect();
        let den: Vec<String> = BASE_DIMENSIONS
            .iter()
            .zip(self.0)
            .filter(|(_, e)| *e < 0)
            .map(|(name, e)| render(e, name))
            .collect();
        let num = if num.is_empty() {
            "1".to_string()
        } else {
            num.join(" * ")
        };
        if den.is_empty() {
            write!(f, "{num}")
        } else {
            write!(f, "{num} / {}", den.join(" / "))
        }
    }
}

impl Term for Dimension {
    fn one() -> Self {
        Dimension::DIMENSIONLESS
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        Dimension::checked_mul(self, rhs)
    }

    fn checked_div(self, rhs: Self) -> Option<Self> {
        Dimension::checked_div(self, rhs)
    }

    fn checked_powi(self, n: i8) -> Option<Self> {
        Dimension::checked_powi(self, n)
    }
}
