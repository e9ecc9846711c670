use clap::Parser;

use ship_state_units::ui_cli::Cli;
use ship_state_units::{app, config, logging};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_or_default(&cli.config)?;
    logging::init_cli_logger(cli.verbose, cfg.log_filter.as_deref())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    app::run(cli, &cfg, &mut out)?;
    Ok(())
}
