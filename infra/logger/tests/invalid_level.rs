use shopdesk_domain::config::LoggingConfig;
use shopdesk_logger::{Logger, LoggerError};

#[test]
fn unknown_level_is_rejected_before_install() {
    let config = LoggingConfig { level: "chatty".to_owned(), ..LoggingConfig::default() };

    let err = Logger::from_config("integration-invalid-level", &config).unwrap_err();
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}
