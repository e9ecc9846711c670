//! 단위 검사 필드.
//!
//! 저장소에는 기준 단위로 환산된 `f64`만 들어가고, 애플리케이션 코드는 단위가 붙은
//! `Quantity`로만 값을 읽고 쓴다. 필드 하나에 대해 세 가지 연산을 제공한다.
//!
//! - [`UnitChecked::get`]: 저장 값에 기준 단위를 붙여 반환한다.
//! - [`UnitChecked::set`]: 차원을 검사하고 기준 단위로 환산해 저장한다.
//! - [`UnitChecked::to_predicate_value`]: 필터식에 쓸 기준 단위 스칼라를 그대로 반환한다.
//!
//! 필터식 경계값은 환산되지 않는다. `distance < 3000`의 3000은 항상 미터로 비교된다.

use std::fmt;
use std::marker::PhantomData;

use thiserror::Error;
use tracing::{debug, warn};

use crate::quantity::Quantity;
use crate::units::{Dimension, LengthUnit, Unit, UnitError, VelocityUnit};

/// 필드별 요구 차원과 기준 단위.
pub trait FieldKind {
    /// 컬럼 이름
    const NAME: &'static str;
    /// 요구 차원 문자열
    const DIMENSIONALITY: &'static str;

    fn canonical_unit() -> Unit;
}

/// 속도: `[length]/[time]`, 기준 단위 m/s
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Speed;

impl FieldKind for Speed {
    const NAME: &'static str = "speed";
    const DIMENSIONALITY: &'static str = "[length]/[time]";

    fn canonical_unit() -> Unit {
        VelocityUnit::MeterPerSecond.unit()
    }
}

/// 거리: `[length]`, 기준 단위 m
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Distance;

impl FieldKind for Distance {
    const NAME: &'static str = "distance";
    const DIMENSIONALITY: &'static str = "[length]";

    fn canonical_unit() -> Unit {
        LengthUnit::Meter.unit()
    }
}

/// 필드에 대입하려는 값.
#[derive(Debug, Clone, PartialEq)]
pub enum Assigned {
    /// 값 없음. 필드를 비운다.
    Absent,
    /// 단위 없는 숫자. 항상 거부된다.
    Plain(f64),
    /// 단위가 붙은 값
    Tagged(Quantity),
}

impl From<Quantity> for Assigned {
    fn from(value: Quantity) -> Self {
        Assigned::Tagged(value)
    }
}

impl From<Option<Quantity>> for Assigned {
    fn from(value: Option<Quantity>) -> Self {
        value.map_or(Assigned::Absent, Assigned::Tagged)
    }
}

impl From<f64> for Assigned {
    fn from(value: f64) -> Self {
        Assigned::Plain(value)
    }
}

impl From<Option<f64>> for Assigned {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Assigned::Absent, Assigned::Plain)
    }
}

/// 필드 대입 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    /// 단위 정보가 전혀 없는 값
    #[error("{field}에는 단위가 붙은 값이 필요함 (입력: {value})")]
    MissingUnit { field: &'static str, value: f64 },
    /// 단위는 있지만 차원이 다른 값
    #[error("{field}의 차원은 {expected}이어야 함 (입력 단위 '{unit}'의 차원: {actual})")]
    Dimensionality {
        field: &'static str,
        expected: Dimension,
        actual: Dimension,
        unit: String,
    },
    /// NaN 이나 무한대. SQLite 는 NaN 을 NULL 로 저장하므로 받지 않는다.
    #[error("{field}에는 유한한 값만 저장할 수 있음 (입력: {value})")]
    NonFinite { field: &'static str, value: f64 },
    #[error(transparent)]
    Unit(#[from] UnitError),
}

/// 기준 단위 스칼라 하나를 감싸는 단위 검사 필드.
///
/// 비어 있지 않은 `raw`는 항상 `K::canonical_unit()` 기준으로 환산된 값이다.
pub struct UnitChecked<K: FieldKind> {
    raw: Option<f64>,
    kind: PhantomData<K>,
}

impl<K: FieldKind> UnitChecked<K> {
    pub fn new() -> Self {
        Self::from_raw(None)
    }

    /// 저장소에서 읽은 기준 단위 스칼라로 필드를 복원한다.
    pub fn from_raw(raw: Option<f64>) -> Self {
        Self {
            raw,
            kind: PhantomData,
        }
    }

    /// 저장소에 기록할 기준 단위 스칼라.
    pub fn raw(&self) -> Option<f64> {
        self.raw
    }

    pub fn is_set(&self) -> bool {
        self.raw.is_some()
    }

    /// 저장 값에 기준 단위를 붙여 반환한다. 비어 있으면 `None`.
    pub fn get(&self) -> Option<Quantity> {
        self.raw.map(|raw| Quantity::new(raw, K::canonical_unit()))
    }

    /// 저장 값을 `unit` 단위로 환산해 반환한다.
    pub fn get_in(&self, unit: &Unit) -> Result<Option<Quantity>, UnitError> {
        self.get().map(|q| q.to(unit)).transpose()
    }

    /// 값을 검사·환산해 저장한다.
    ///
    /// 실패하면 기존 값은 그대로 남는다.
    pub fn set(&mut self, value: impl Into<Assigned>) -> Result<(), FieldError> {
        match value.into() {
            Assigned::Absent => {
                self.raw = None;
                Ok(())
            }
            Assigned::Plain(value) => {
                warn!(field = K::NAME, value, "단위 없는 값 대입 거부");
                Err(FieldError::MissingUnit {
                    field: K::NAME,
                    value,
                })
            }
            Assigned::Tagged(quantity) => {
                if !quantity.check(K::DIMENSIONALITY)? {
                    warn!(
                        field = K::NAME,
                        unit = quantity.unit().symbol(),
                        "차원이 다른 값 대입 거부"
                    );
                    return Err(FieldError::Dimensionality {
                        field: K::NAME,
                        expected: Dimension::parse(K::DIMENSIONALITY)?,
                        actual: quantity.dimensionality(),
                        unit: quantity.unit().symbol().to_string(),
                    });
                }
                let canonical = quantity.to(&K::canonical_unit())?;
                // 환산 중 넘칠 수도 있으므로 환산 결과로 검사한다
                if !canonical.magnitude().is_finite() {
                    warn!(field = K::NAME, input = %quantity, "유한하지 않은 값 대입 거부");
                    return Err(FieldError::NonFinite {
                        field: K::NAME,
                        value: quantity.magnitude(),
                    });
                }
                debug!(
                    field = K::NAME,
                    input = %quantity,
                    stored = canonical.magnitude(),
                    "기준 단위로 환산"
                );
                self.raw = Some(canonical.magnitude());
                Ok(())
            }
        }
    }

    /// 필드를 비운다.
    pub fn clear(&mut self) {
        self.raw = None;
    }

    /// 필터식에서 쓰는 값. 기준 단위 스칼라를 환산 없이 반환한다.
    ///
    /// 비교 대상 경계값도 기준 단위(m/s, m)로 미리 환산되어 있어야 한다.
    pub fn to_predicate_value(&self) -> Option<f64> {
        self.raw
    }
}

impl<K: FieldKind> Default for UnitChecked<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: FieldKind> Clone for UnitChecked<K> {
    fn clone(&self) -> Self {
        Self::from_raw(self.raw)
    }
}

impl<K: FieldKind> PartialEq for UnitChecked<K> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<K: FieldKind> fmt::Debug for UnitChecked<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitChecked")
            .field("field", &K::NAME)
            .field("raw", &self.raw)
            .finish()
    }
}
