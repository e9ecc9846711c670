use thiserror::Error;

use crate::field::Assigned;
use crate::quantity::Quantity;
use crate::units::{Unit, UnitError};

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// 단위식 해석/환산 실패
    #[error(transparent)]
    Unit(#[from] UnitError),
    /// 숫자로 해석할 수 없는 입력
    #[error("숫자가 아님: {0}")]
    InvalidNumber(String),
}

/// 문자열로 전달된 단위식 사이에서 값을 환산한다.
///
/// 단위 문자열 예시는 `knot`, `m/s`, `mile / hour`, `yd`, `angstrom/year` 등을 사용할 수 있다.
pub fn convert(
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    let from = Unit::parse(from_unit_str)?;
    let to = Unit::parse(to_unit_str)?;
    Ok(from.convert_to(value, &to)?)
}

/// `"15.4 knot"` 형식의 값을 `to_unit_str` 단위의 `Quantity`로 환산한다.
pub fn convert_quantity(text: &str, to_unit_str: &str) -> Result<Quantity, ConversionError> {
    let quantity = Quantity::parse(text)?;
    let target = Unit::parse(to_unit_str)?;
    Ok(quantity.to(&target)?)
}

/// 사용자 입력을 필드 대입값으로 해석한다.
///
/// - 빈 문자열, `none`, `null` → `Assigned::Absent`
/// - 숫자만 있는 경우 → `Assigned::Plain` (단위 누락은 필드 대입 시점에 거부된다)
/// - 숫자 + 단위식 → `Assigned::Tagged`
pub fn parse_measurement(text: &str) -> Result<Assigned, ConversionError> {
    let trimmed = text.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("none")
        || trimmed.eq_ignore_ascii_case("null")
    {
        return Ok(Assigned::Absent);
    }
    if let Ok(value) = trimmed.parse::<f64>() {
        return Ok(Assigned::Plain(value));
    }
    match Quantity::parse(trimmed) {
        Ok(q) => Ok(Assigned::Tagged(q)),
        Err(UnitError::Syntax { .. })
            if !trimmed.starts_with(|c: char| c.is_ascii_digit() || matches!(c, '.' | '-' | '+')) =>
        {
            Err(ConversionError::InvalidNumber(trimmed.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}
