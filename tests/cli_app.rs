//! 설정 파일과 CLI 명령 흐름 테스트.
use approx::assert_relative_eq;
use clap::Parser;
use ship_state_units::app::{self, AppError};
use ship_state_units::config::{self, Config, DisplayUnits};
use ship_state_units::field::FieldError;
use ship_state_units::store::{MemoryStore, ShipStateStore, SqliteStore};
use ship_state_units::ui_cli::{parse_timestamp, Cli};
use ship_state_units::units::{LengthUnit, VelocityUnit};

fn run_cli(args: &[&str], config: &Config) -> Result<String, AppError> {
    let cli = Cli::try_parse_from(args).expect("valid arguments");
    let mut out = Vec::new();
    app::run(cli, config, &mut out)?;
    Ok(String::from_utf8(out).expect("utf8 output"))
}

#[test]
fn config_default_is_written_when_missing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");

    let cfg = config::load_or_default(&path).expect("default config");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());

    let reloaded = config::load_or_default(&path).expect("reload");
    assert_eq!(reloaded, cfg);
}

#[test]
fn config_reads_display_units() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
database_path = "ships.sqlite"

[display]
speed = "MeterPerSecond"
distance = "Yard"
"#,
    )
    .expect("write config");

    let cfg = config::load_or_default(&path).expect("load");
    assert_eq!(cfg.database_path, std::path::PathBuf::from("ships.sqlite"));
    assert_eq!(
        cfg.display,
        DisplayUnits {
            speed: VelocityUnit::MeterPerSecond,
            distance: LengthUnit::Yard,
        }
    );
    assert_eq!(cfg.log_filter, None);
}

#[test]
fn malformed_config_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "display = 3").expect("write config");
    assert!(matches!(
        config::load_or_default(&path),
        Err(config::ConfigError::Serde(_))
    ));
}

#[test]
fn timestamps() {
    let t = parse_timestamp("2020-01-01 10:13:34").expect("datetime");
    assert_eq!(t.to_string(), "2020-01-01 10:13:34");
    assert!(parse_timestamp("2020-01-01T10:13:34").is_some());
    assert_eq!(
        parse_timestamp("2020-01-01").expect("date").to_string(),
        "2020-01-01 00:00:00"
    );
    assert!(parse_timestamp("yesterday").is_none());
}

#[test]
fn add_state_rejects_plain_numbers() {
    let mut store = MemoryStore::new();
    let err = app::add_state(&mut store, "2020-01-01 10:13:34", Some("15.4"), None)
        .expect_err("plain speed");
    assert!(matches!(
        err,
        AppError::Field(FieldError::MissingUnit { field: "speed", .. })
    ));

    let err = app::add_state(&mut store, "2020-01-01 10:13:34", None, Some("10 tonne"))
        .expect_err("mass distance");
    assert!(matches!(
        err,
        AppError::Field(FieldError::Dimensionality { field: "distance", .. })
    ));
    assert!(store.is_empty());
}

#[test]
fn add_state_stores_normalized_values() {
    let mut store = MemoryStore::new();
    let state = app::add_state(
        &mut store,
        "2020-01-01 10:13:34",
        Some("10.2 mile/hour"),
        Some("19.2 km"),
    )
    .expect("valid input");
    assert_eq!(state.id, Some(1));
    assert_relative_eq!(state.speed_field().raw().expect("speed"), 4.559808, max_relative = 1e-12);
    assert_relative_eq!(state.distance_field().raw().expect("distance"), 19_200.0);
}

#[test]
fn build_filter_requires_a_bound() {
    assert!(matches!(
        app::build_filter(None, None),
        Err(AppError::MissingFilter)
    ));
    let filter = app::build_filter(Some(3000.0), Some(5.0)).expect("filter");
    assert_eq!(filter.to_string(), "(distance < 3000 AND speed < 5)");
}

#[test]
fn demo_inserts_six_states_and_queries_meters() {
    let mut store = MemoryStore::new();
    let mut out = Vec::new();
    let results = app::run_demo(&mut store, &mut out).expect("demo");
    let text = String::from_utf8(out).expect("utf8");

    assert_eq!(store.all().expect("all").len(), 6);
    assert_eq!(results.len(), 1);
    assert_relative_eq!(
        results[0].distance().expect("distance").magnitude(),
        2787.0912,
        max_relative = 1e-12
    );
    assert_eq!(text.matches("rejected:").count(), 5);
    assert!(!text.contains("accepted:"));
    assert!(text.contains("State 1 speed (in knots) = 15.4000 kn"));
    assert!(text.contains("State 4 distance (in yards) = 3048.0000 yd"));
}

#[test]
fn cli_commands_against_sqlite_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db = dir.path().join("ships.sqlite");
    let db = db.to_str().expect("utf8 path");
    let cfg = Config::default();

    let demo = run_cli(&["ship_state_units", "--database", db, "demo"], &cfg).expect("demo");
    assert!(demo.contains("Query result"));

    run_cli(
        &[
            "ship_state_units",
            "--database",
            db,
            "add",
            "--timestamp",
            "2020-01-02 08:00:00",
            "--speed",
            "12 knot",
            "--distance",
            "1 nmi",
        ],
        &cfg,
    )
    .expect("add");

    let listed = run_cli(
        &[
            "ship_state_units",
            "--database",
            db,
            "list",
            "--distance-unit",
            "m",
        ],
        &cfg,
    )
    .expect("list");
    assert_eq!(listed.lines().count(), 7);
    assert!(listed.contains("#7 2020-01-02 08:00:00 speed=12.0000 kn distance=1852.0000 m"));

    let queried = run_cli(
        &[
            "ship_state_units",
            "--database",
            db,
            "query",
            "--distance-below",
            "3000",
        ],
        &cfg,
    )
    .expect("query");
    // 데모의 3048 yd 와 새로 넣은 1 nmi
    assert_eq!(queried.lines().count(), 3);

    let err = run_cli(
        &[
            "ship_state_units",
            "--database",
            db,
            "add",
            "--timestamp",
            "2020-01-02 08:00:00",
            "--speed",
            "12",
        ],
        &cfg,
    )
    .expect_err("plain number");
    assert!(matches!(err, AppError::Field(FieldError::MissingUnit { .. })));
}

#[test]
fn convert_command() {
    let cfg = Config::default();
    let out = run_cli(
        &["ship_state_units", "convert", "15.4 knot", "--to", "m/s"],
        &cfg,
    )
    .expect("convert");
    assert!(out.starts_with("15.4 knot = 7.92"), "{out}");
}

#[test]
fn sqlite_demo_matches_memory_demo() {
    let mut sqlite = SqliteStore::open_in_memory().expect("open");
    let mut memory = MemoryStore::new();
    let a = app::run_demo(&mut sqlite, &mut std::io::sink()).expect("sqlite demo");
    let b = app::run_demo(&mut memory, &mut std::io::sink()).expect("memory demo");
    assert_eq!(a, b);
}
