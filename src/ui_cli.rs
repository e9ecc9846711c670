use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_PATH;

const TIMESTAMP_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// 단위 검사 선박 상태 저장소 CLI.
#[derive(Debug, Parser)]
#[command(name = "ship_state_units", version)]
pub struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// 설정의 DB 경로 대신 사용할 SQLite 파일
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,

    /// 디버그 로그 출력
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 선박 상태 하나를 저장한다. 값은 `15.4 knot`, `3048 yd` 처럼 단위와 함께 입력한다.
    Add {
        /// 시각 (예: `2020-01-01 10:13:34`)
        #[arg(long)]
        timestamp: String,
        /// 속도 (차원: [length]/[time])
        #[arg(long)]
        speed: Option<String>,
        /// 거리 (차원: [length])
        #[arg(long)]
        distance: Option<String>,
    },
    /// 저장된 상태를 표시 단위로 출력한다.
    List {
        /// 속도 표시 단위 (설정값 대신)
        #[arg(long)]
        speed_unit: Option<String>,
        /// 거리 표시 단위 (설정값 대신)
        #[arg(long)]
        distance_unit: Option<String>,
    },
    /// 저장 단위 기준으로 조회한다. 경계값은 m, m/s 로 해석되며 환산되지 않는다.
    Query {
        /// 거리 상한 [m]
        #[arg(long)]
        distance_below: Option<f64>,
        /// 속도 상한 [m/s]
        #[arg(long)]
        speed_below: Option<f64>,
    },
    /// 값을 다른 단위로 환산한다.
    Convert {
        /// 환산할 값 (예: `15.4 knot`)
        quantity: String,
        /// 목표 단위 (예: `m/s`)
        #[arg(long)]
        to: String,
    },
    /// DB를 새로 만들고 예제 데이터를 저장·조회한다.
    Demo,
}

/// 시각 문자열을 해석한다. 날짜만 주어지면 자정으로 본다.
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
