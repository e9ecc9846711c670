use std::fs;
use std::path::Path;

use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use tracing::{debug, info};

use crate::model::{ShipState, ShipStateRow};

use super::{Filter, ShipStateStore, StoreError};

const SELECT_COLUMNS: &str = "SELECT id, timestamp, speed, distance FROM ShipStates";

/// SQLite 저장소.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// 파일 DB를 열고 테이블을 준비한다.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path.as_ref())?;
        let mut store = Self { conn };
        store.create_schema()?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let mut store = Self { conn };
        store.create_schema()?;
        Ok(store)
    }

    /// 기존 DB 파일을 지우고 새로 만든다.
    pub fn recreate(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if path.exists() {
            info!(path = %path.display(), "기존 DB 파일 삭제");
            fs::remove_file(path)?;
        }
        Self::open(path)
    }

    /// 저장된 원시 행을 그대로 읽는다. 단위 검사 없이 기준 단위 스칼라를 확인할 때 쓴다.
    pub fn raw_rows(&self) -> Result<Vec<ShipStateRow>, StoreError> {
        let mut stmt = self.conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY id ASC"))?;
        let rows = stmt.query_map([], read_row)?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<ShipStateRow> {
    Ok(ShipStateRow {
        id: row.get(0)?,
        timestamp: row.get(1)?,
        speed: row.get(2)?,
        distance: row.get(3)?,
    })
}

impl ShipStateStore for SqliteStore {
    fn create_schema(&mut self) -> Result<(), StoreError> {
        self.conn.execute_batch(ShipStateRow::CREATE_TABLE_SQL)?;
        Ok(())
    }

    fn insert(&mut self, state: &mut ShipState) -> Result<i64, StoreError> {
        let row = ShipStateRow::from(&*state);
        self.conn.execute(
            "INSERT INTO ShipStates (timestamp, speed, distance) VALUES (?1, ?2, ?3)",
            params![row.timestamp, row.speed, row.distance],
        )?;
        let id = self.conn.last_insert_rowid();
        state.id = Some(id);
        info!(id, speed = ?row.speed, distance = ?row.distance, "ShipState 저장");
        Ok(id)
    }

    fn insert_all(&mut self, states: &mut [ShipState]) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO ShipStates (timestamp, speed, distance) VALUES (?1, ?2, ?3)",
            )?;
            for state in states.iter_mut() {
                let row = ShipStateRow::from(&*state);
                stmt.execute(params![row.timestamp, row.speed, row.distance])?;
                state.id = Some(tx.last_insert_rowid());
            }
        }
        tx.commit()?;
        info!(count = states.len(), "ShipState 일괄 저장");
        Ok(())
    }

    fn get(&self, id: i64) -> Result<Option<ShipState>, StoreError> {
        let row = self
            .conn
            .query_row(
                &format!("{SELECT_COLUMNS} WHERE id = ?1"),
                params![id],
                read_row,
            )
            .optional()?;
        Ok(row.map(ShipState::from_row))
    }

    fn all(&self) -> Result<Vec<ShipState>, StoreError> {
        Ok(self
            .raw_rows()?
            .into_iter()
            .map(ShipState::from_row)
            .collect())
    }

    fn filter(&self, filter: &Filter) -> Result<Vec<ShipState>, StoreError> {
        let (clause, bounds) = filter.to_sql();
        let sql = format!("{SELECT_COLUMNS} WHERE {clause} ORDER BY id ASC");
        debug!(%sql, ?bounds, "필터 조회");
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(bounds.iter()), read_row)?;
        let mut out = Vec::new();
        for row in rows {
            out.push(ShipState::from_row(row?));
        }
        Ok(out)
    }
}
