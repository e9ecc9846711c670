use crate::model::{ShipState, ShipStateRow};

use super::{Filter, ShipStateStore, StoreError};

/// 메모리 저장소. 필터는 [`Filter::matches`]로 평가한다.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Vec<ShipStateRow>,
    next_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl ShipStateStore for MemoryStore {
    fn create_schema(&mut self) -> Result<(), StoreError> {
        Ok(())
    }

    fn insert(&mut self, state: &mut ShipState) -> Result<i64, StoreError> {
        self.next_id += 1;
        let id = self.next_id;
        state.id = Some(id);
        self.rows.push(ShipStateRow::from(&*state));
        Ok(id)
    }

    fn get(&self, id: i64) -> Result<Option<ShipState>, StoreError> {
        Ok(self
            .rows
            .iter()
            .find(|row| row.id == Some(id))
            .cloned()
            .map(ShipState::from_row))
    }

    fn all(&self) -> Result<Vec<ShipState>, StoreError> {
        Ok(self.rows.iter().cloned().map(ShipState::from_row).collect())
    }

    fn filter(&self, filter: &Filter) -> Result<Vec<ShipState>, StoreError> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|state| filter.matches(state))
            .collect())
    }
}
