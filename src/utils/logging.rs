use crate::{config::LoggingConfig, error::ServiceError};
use std::fs;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, fmt::time::UtcTime, prelude::*, EnvFilter};

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

pub fn setup_logging(logging: &LoggingConfig) -> Result<WorkerGuard, ServiceError> {
    // -----------------------
    // Service Logs
    // -----------------------
    let log_dir = format!("{}/{}", logging.dir, logging.service);
    fs::create_dir_all(&log_dir).map_err(ServiceError::Logging)?;
    let file_name = format!("{}.log", logging.service);
    let (file_writer, file_guard) =
        tracing_appender::non_blocking(rolling::daily(log_dir, file_name));

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .json()
        .with_timer(UtcTime::rfc_3339())
        .with_target(true)
        .with_thread_ids(false)
        .with_filter(env_filter(&logging.level));

    // -----------------------
    // Console Layer
    // -----------------------
    let console_layer = fmt::layer()
        .compact()
        .with_timer(UtcTime::rfc_3339())
        .with_target(true)
        .with_thread_ids(false)
        .with_filter(env_filter(&logging.level));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .try_init()?;

    Ok(file_guard)
}
