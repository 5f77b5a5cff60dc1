use notification_service::config::AppConfig;

// Kept as the only test in this binary: it mutates the process environment.
#[test]
fn environment_overrides_port_and_address() {
    std::env::set_var("NOTIFICATION_HTTP__PORT", "6202");
    std::env::set_var("NOTIFICATION_HTTP__ADDRESS", "127.0.0.1");

    let config = AppConfig::load(None).unwrap();

    assert_eq!(config.http.port, 6202);
    assert_eq!(config.http.bind_address(), "127.0.0.1:6202");
}
