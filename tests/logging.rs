use notification_service::{
    config::LoggingConfig, error::ServiceError, utils::logging::setup_logging,
};

// Kept as the only test in this binary: it installs the global subscriber.
#[test]
fn second_subscriber_install_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let logging = LoggingConfig {
        dir: dir.path().to_str().unwrap().to_string(),
        service: "notification-service".to_string(),
        level: "info".to_string(),
    };

    let _guard = setup_logging(&logging).unwrap();
    assert!(dir.path().join("notification-service").is_dir());

    match setup_logging(&logging) {
        Err(ServiceError::Subscriber(_)) => {}
        Err(other) => panic!("expected subscriber error, got {other}"),
        Ok(_) => panic!("second install succeeded"),
    }
}
