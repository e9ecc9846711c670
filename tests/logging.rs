//! 로거 초기화 테스트. 전역 구독자를 설치하므로 별도 테스트 바이너리로 둔다.
use ship_state_units::logging::init_cli_logger;

#[test]
fn second_logger_init_reports_error() {
    assert!(init_cli_logger(false, Some("ship_state_units=info")).is_ok());
    assert!(init_cli_logger(true, None).is_err());
}
