//! 단위가 붙은 값을 기준 단위 스칼라로 정규화해 저장하는 선박 상태 저장소.
//!
//! 핵심은 [`field::UnitChecked`]이다. 저장소 구현과 CLI는 이를 둘러싼 부분이다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod field;
pub mod logging;
pub mod model;
pub mod quantity;
pub mod store;
pub mod ui_cli;
pub mod units;
