use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

/// CLI용 로거를 초기화한다. `RUST_LOG`가 있으면 그 값을, 없으면 `fallback` 또는 기본 필터를 쓴다.
///
/// 전역 구독자가 이미 설치돼 있으면 `TryInitError`를 돌려준다.
pub fn init_cli_logger(verbose: bool, fallback: Option<&str>) -> Result<(), TryInitError> {
    let default_filter = match (verbose, fallback) {
        (true, _) => "ship_state_units=debug,info",
        (false, Some(filter)) => filter,
        (false, None) => "ship_state_units=warn",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
}
