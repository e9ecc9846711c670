use std::io::Write;

use chrono::NaiveDateTime;
use thiserror::Error;
use tracing::info;

use crate::config::{Config, ConfigError};
use crate::conversion::{self, ConversionError};
use crate::field::{Assigned, FieldError};
use crate::model::ShipState;
use crate::quantity::Quantity;
use crate::store::{Column, Filter, ShipStateStore, SqliteStore, StoreError};
use crate::ui_cli::{self, Cli, Command};
use crate::units::{LengthUnit, MassUnit, TimeUnit, Unit, UnitError, VelocityUnit};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 저장소 오류
    #[error("저장소 오류: {0}")]
    Store(#[from] StoreError),
    /// 필드 대입 거부
    #[error("값 검증 오류: {0}")]
    Field(#[from] FieldError),
    /// 입력값 해석 오류
    #[error("입력 해석 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 단위 오류
    #[error("단위 오류: {0}")]
    Unit(#[from] UnitError),
    /// 해석할 수 없는 시각
    #[error("시각 형식 오류: {0}")]
    InvalidTimestamp(String),
    /// 조회 조건 없음
    #[error("조회 조건을 하나 이상 지정해야 합니다 (--distance-below, --speed-below)")]
    MissingFilter,
}

/// 명령 하나를 실행한다.
pub fn run(cli: Cli, config: &Config, out: &mut impl Write) -> Result<(), AppError> {
    let db_path = cli
        .database
        .clone()
        .unwrap_or_else(|| config.database_path.clone());
    match cli.command {
        Command::Add {
            timestamp,
            speed,
            distance,
        } => {
            let mut store = SqliteStore::open(&db_path)?;
            let state = add_state(
                &mut store,
                &timestamp,
                speed.as_deref(),
                distance.as_deref(),
            )?;
            writeln!(
                out,
                "{}",
                format_state(
                    &state,
                    &config.display.speed.unit(),
                    &config.display.distance.unit()
                )?
            )?;
        }
        Command::List {
            speed_unit,
            distance_unit,
        } => {
            let store = SqliteStore::open(&db_path)?;
            let speed_unit = match speed_unit {
                Some(u) => Unit::parse(&u)?,
                None => config.display.speed.unit(),
            };
            let distance_unit = match distance_unit {
                Some(u) => Unit::parse(&u)?,
                None => config.display.distance.unit(),
            };
            for state in store.all()? {
                writeln!(out, "{}", format_state(&state, &speed_unit, &distance_unit)?)?;
            }
        }
        Command::Query {
            distance_below,
            speed_below,
        } => {
            let store = SqliteStore::open(&db_path)?;
            let filter = build_filter(distance_below, speed_below)?;
            writeln!(out, "filter: {filter} (m, m/s 기준)")?;
            for state in store.filter(&filter)? {
                writeln!(
                    out,
                    "{}",
                    format_state(
                        &state,
                        &config.display.speed.unit(),
                        &config.display.distance.unit()
                    )?
                )?;
            }
        }
        Command::Convert { quantity, to } => {
            let converted = conversion::convert_quantity(&quantity, &to)?;
            writeln!(out, "{quantity} = {converted}")?;
        }
        Command::Demo => {
            let mut store = SqliteStore::recreate(&db_path)?;
            run_demo(&mut store, out)?;
        }
    }
    Ok(())
}

/// 입력 문자열을 검증해 상태 하나를 저장한다.
pub fn add_state<S: ShipStateStore>(
    store: &mut S,
    timestamp: &str,
    speed: Option<&str>,
    distance: Option<&str>,
) -> Result<ShipState, AppError> {
    let mut state = ShipState::new(timestamp_from(timestamp)?);
    if let Some(speed) = speed {
        state.set_speed(conversion::parse_measurement(speed)?)?;
    }
    if let Some(distance) = distance {
        state.set_distance(conversion::parse_measurement(distance)?)?;
    }
    store.insert(&mut state)?;
    Ok(state)
}

/// 조회 조건을 필터로 만든다. 경계값은 기준 단위(m, m/s) 그대로 쓴다.
pub fn build_filter(
    distance_below: Option<f64>,
    speed_below: Option<f64>,
) -> Result<Filter, AppError> {
    let distance = distance_below.map(|bound| Column::Distance.lt(bound));
    let speed = speed_below.map(|bound| Column::Speed.lt(bound));
    match (distance, speed) {
        (Some(d), Some(s)) => Ok(d.and(s)),
        (Some(f), None) | (None, Some(f)) => Ok(f),
        (None, None) => Err(AppError::MissingFilter),
    }
}

/// 상태 한 줄 출력. 비어 있는 필드는 `-`로 표시한다.
pub fn format_state(
    state: &ShipState,
    speed_unit: &Unit,
    distance_unit: &Unit,
) -> Result<String, UnitError> {
    let id = state
        .id
        .map_or_else(|| "-".to_string(), |id| format!("#{id}"));
    let timestamp = state
        .timestamp
        .map_or_else(|| "-".to_string(), |t| t.to_string());
    let speed = render(state.speed_field().get_in(speed_unit)?);
    let distance = render(state.distance_field().get_in(distance_unit)?);
    Ok(format!("{id} {timestamp} speed={speed} distance={distance}"))
}

fn render(quantity: Option<Quantity>) -> String {
    quantity.map_or_else(|| "-".to_string(), |q| format!("{q:.4}"))
}

fn timestamp_from(text: &str) -> Result<NaiveDateTime, AppError> {
    ui_cli::parse_timestamp(text).ok_or_else(|| AppError::InvalidTimestamp(text.to_string()))
}

/// 예제 상태 여섯 개를 만들어 저장하고, 잘못된 대입이 거부되는 것과
/// 기준 단위 필터 조회를 보여준다. 조회 결과를 반환한다.
pub fn run_demo<S: ShipStateStore>(
    store: &mut S,
    out: &mut impl Write,
) -> Result<Vec<ShipState>, AppError> {
    let t1 = timestamp_from("2020-01-01 10:13:34")?;
    let t2 = timestamp_from("2020-01-01 10:15:12")?;

    let mile_per_hour = LengthUnit::Mile.unit() / TimeUnit::Hour.unit();
    let angstrom_per_year = LengthUnit::Angstrom.unit() / TimeUnit::Year.unit();

    let mut states = vec![
        ShipState::new(t1).with_speed(15.4 * VelocityUnit::Knot.unit())?,
        ShipState::new(t2).with_speed(10.2 * mile_per_hour)?,
        ShipState::new(t2).with_speed(10.2 * angstrom_per_year)?,
        ShipState::new(t1).with_distance(3048.0 * LengthUnit::Yard.unit())?,
        ShipState::new(t2).with_distance(19.2 * LengthUnit::Kilometer.unit())?,
        ShipState::new(t2).with_distance(0.02 * LengthUnit::LightYear.unit())?,
    ];

    let knot = VelocityUnit::Knot.unit();
    let yard = LengthUnit::Yard.unit();
    writeln!(out, "State 1 speed = {}", render(states[0].speed()))?;
    writeln!(
        out,
        "State 1 speed (in knots) = {}",
        render(states[0].speed_field().get_in(&knot)?)
    )?;
    writeln!(out, "State 2 speed = {}", render(states[1].speed()))?;
    if let Some(tiny) = states[2].speed() {
        writeln!(out, "State 3 speed = {:e} {}", tiny.magnitude(), tiny.unit())?;
    }
    writeln!(out, "State 4 distance = {}", render(states[3].distance()))?;
    writeln!(
        out,
        "State 4 distance (in yards) = {}",
        render(states[3].distance_field().get_in(&yard)?)
    )?;
    writeln!(out, "State 5 distance = {}", render(states[4].distance()))?;
    writeln!(out, "State 6 distance = {}", render(states[5].distance()))?;

    let degree = Unit::parse("degree")?;
    let newton = Unit::parse("newton")?;
    let rejected: Vec<(&str, bool, Assigned)> = vec![
        ("speed = 15.4", true, Assigned::Plain(15.4)),
        ("speed = 15.4 h", true, (15.4 * TimeUnit::Hour.unit()).into()),
        (
            "speed = 15.4 m/deg",
            true,
            (15.4 * (LengthUnit::Meter.unit() / degree)).into(),
        ),
        ("distance = 10 N", false, (10.0 * newton).into()),
        ("distance = 10 t", false, (10.0 * MassUnit::Tonne.unit()).into()),
    ];
    let mut probe = ShipState::new(t1);
    for (label, is_speed, value) in rejected {
        let result = if is_speed {
            probe.set_speed(value)
        } else {
            probe.set_distance(value)
        };
        match result {
            Err(err) => writeln!(out, "rejected: {label} -> {err}")?,
            Ok(()) => writeln!(out, "accepted: {label}")?,
        }
    }

    store.insert_all(&mut states)?;
    info!(count = states.len(), "예제 상태 저장 완료");

    // 경계값 3000은 미터로 비교된다
    let filter = Column::Distance.lt(3000.0);
    let results = store.filter(&filter)?;
    for state in &results {
        writeln!(
            out,
            "Query result ({filter}): state.distance = {}",
            render(state.distance())
        )?;
    }
    Ok(results)
}
