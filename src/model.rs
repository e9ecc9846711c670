use chrono::NaiveDateTime;

use crate::field::{Assigned, Distance, FieldError, Speed, UnitChecked};
use crate::quantity::Quantity;

/// 선박 상태 레코드. 속도와 거리는 기준 단위(m/s, m)로만 보관된다.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShipState {
    /// 저장소가 부여하는 일련번호. 저장 전에는 `None`.
    pub id: Option<i64>,
    pub timestamp: Option<NaiveDateTime>,
    speed: UnitChecked<Speed>,
    distance: UnitChecked<Distance>,
}

impl ShipState {
    pub fn new(timestamp: NaiveDateTime) -> Self {
        Self {
            timestamp: Some(timestamp),
            ..Self::default()
        }
    }

    pub fn with_speed(mut self, speed: impl Into<Assigned>) -> Result<Self, FieldError> {
        self.set_speed(speed)?;
        Ok(self)
    }

    pub fn with_distance(mut self, distance: impl Into<Assigned>) -> Result<Self, FieldError> {
        self.set_distance(distance)?;
        Ok(self)
    }

    /// 속도를 m/s 단위 `Quantity`로 반환한다.
    pub fn speed(&self) -> Option<Quantity> {
        self.speed.get()
    }

    pub fn set_speed(&mut self, speed: impl Into<Assigned>) -> Result<(), FieldError> {
        self.speed.set(speed)
    }

    /// 거리를 m 단위 `Quantity`로 반환한다.
    pub fn distance(&self) -> Option<Quantity> {
        self.distance.get()
    }

    pub fn set_distance(&mut self, distance: impl Into<Assigned>) -> Result<(), FieldError> {
        self.distance.set(distance)
    }

    pub fn speed_field(&self) -> &UnitChecked<Speed> {
        &self.speed
    }

    pub fn distance_field(&self) -> &UnitChecked<Distance> {
        &self.distance
    }

    /// 저장된 행으로부터 레코드를 복원한다.
    pub fn from_row(row: ShipStateRow) -> Self {
        Self {
            id: row.id,
            timestamp: row.timestamp,
            speed: UnitChecked::from_raw(row.speed),
            distance: UnitChecked::from_raw(row.distance),
        }
    }
}

/// `ShipStates` 테이블의 한 행. 속도·거리 컬럼은 기준 단위 스칼라이다.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShipStateRow {
    pub id: Option<i64>,
    pub timestamp: Option<NaiveDateTime>,
    /// m/s
    pub speed: Option<f64>,
    /// m
    pub distance: Option<f64>,
}

impl ShipStateRow {
    pub const TABLE: &'static str = "ShipStates";
    pub const COLUMNS: [&'static str; 4] = ["id", "timestamp", "speed", "distance"];

    pub const CREATE_TABLE_SQL: &'static str = "CREATE TABLE IF NOT EXISTS ShipStates (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        timestamp DATETIME,
        speed REAL,
        distance REAL
    )";
}

impl From<&ShipState> for ShipStateRow {
    fn from(state: &ShipState) -> Self {
        Self {
            id: state.id,
            timestamp: state.timestamp,
            speed: state.speed.raw(),
            distance: state.distance.raw(),
        }
    }
}
