//! 차원 해석과 단위 정의 모음.

pub mod area;
pub mod dimension;
pub mod expr;
pub mod length;
pub mod mass;
pub mod registry;
pub mod time;
pub mod unit;
pub mod velocity;

pub use area::{convert_area, AreaUnit};
pub use dimension::Dimension;
pub use length::{convert_length, LengthUnit};
pub use mass::{convert_mass, MassUnit};
pub use time::{convert_time, TimeUnit};
pub use unit::Unit;
pub use velocity::{convert_velocity, VelocityUnit};

use thiserror::Error;

/// 단위식 해석 및 환산 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    /// 등록되지 않은 단위 이름
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
    /// 등록되지 않은 기본 차원 이름
    #[error("알 수 없는 차원: [{0}]")]
    UnknownDimension(String),
    /// 식 문법 오류
    #[error("단위식 '{input}' 해석 실패: {reason}")]
    Syntax { input: String, reason: String },
    /// 차원이 달라 환산할 수 없음
    #[error("'{from}' ({from_dimension})을(를) '{to}' ({to_dimension})(으)로 환산할 수 없음")]
    Incompatible {
        from: String,
        from_dimension: Dimension,
        to: String,
        to_dimension: Dimension,
    },
}
