use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;

const ENV_PREFIX: &str = "NOTIFICATION";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HttpConfig {
    pub address: String,
    pub port: u16,
}

impl HttpConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    pub dir: String,
    pub service: String,
    pub level: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub http: HttpConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Loads configuration using the first CLI argument, if any, as the
    /// config file path.
    pub fn new() -> Result<Self, ConfigError> {
        let config_path = env::args().nth(1);
        Self::load(config_path.as_deref())
    }

    /// Defaults, then the optional file, then `NOTIFICATION_*` variables
    /// (`NOTIFICATION_HTTP__PORT=6000`).
    pub fn load(config_path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("http.address", "0.0.0.0")?
            .set_default("http.port", 5001)?
            .set_default("logging.dir", "app/logs")?
            .set_default("logging.service", "notification-service")?
            .set_default("logging.level", "info")?;

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path));
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_listen_on_5001() {
        let config = AppConfig::load(None).unwrap();

        assert_eq!(config.http.address, "0.0.0.0");
        assert_eq!(config.http.port, 5001);
        assert_eq!(config.http.bind_address(), "0.0.0.0:5001");
        assert_eq!(config.logging.service, "notification-service");
    }

    #[test]
    fn file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[http]\naddress = \"127.0.0.1\"\nport = 6101\n\n[logging]\nlevel = \"debug\""
        )
        .unwrap();

        let config = AppConfig::load(file.path().to_str()).unwrap();

        assert_eq!(config.http.bind_address(), "127.0.0.1:6101");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.dir, "app/logs");
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(AppConfig::load(Some("/nonexistent/notification-service.toml")).is_err());
    }

    #[test]
    fn invalid_port_is_an_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[http]\nport = \"not-a-port\"").unwrap();

        assert!(AppConfig::load(file.path().to_str()).is_err());
    }
}
