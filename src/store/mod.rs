//! 선박 상태 저장소. 저장소는 기준 단위 스칼라만 주고받는다.

pub mod filter;
pub mod memory;
pub mod sqlite;

pub use filter::{CmpOp, Column, Filter};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use thiserror::Error;

use crate::model::ShipState;

/// 저장소 오류.
#[derive(Debug, Error)]
pub enum StoreError {
    /// SQLite 오류
    #[error("SQLite 오류: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
}

/// `ShipState` 레코드 저장소.
pub trait ShipStateStore {
    /// 테이블을 만든다. 이미 있으면 아무것도 하지 않는다.
    fn create_schema(&mut self) -> Result<(), StoreError>;

    /// 레코드를 저장하고 부여된 id를 `state.id`에 기록한다.
    fn insert(&mut self, state: &mut ShipState) -> Result<i64, StoreError>;

    /// 여러 레코드를 한 번에 저장한다.
    fn insert_all(&mut self, states: &mut [ShipState]) -> Result<(), StoreError> {
        for state in states.iter_mut() {
            self.insert(state)?;
        }
        Ok(())
    }

    fn get(&self, id: i64) -> Result<Option<ShipState>, StoreError>;

    /// id 순으로 모든 레코드를 반환한다.
    fn all(&self) -> Result<Vec<ShipState>, StoreError>;

    /// 필터를 만족하는 레코드를 id 순으로 반환한다.
    fn filter(&self, filter: &Filter) -> Result<Vec<ShipState>, StoreError>;
}
