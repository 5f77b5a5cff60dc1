use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use config::ConfigError;
use thiserror::Error;

pub const INVALID_ORDER_MESSAGE: &str = "Invalid order data";

/// Errors that stop the service from starting or keep it from serving.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to prepare log directory: {0}")]
    Logging(#[source] std::io::Error),

    #[error("failed to install log subscriber: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Request body could not be decoded into an order.
///
/// Every decode failure maps to the same 400 response; the cause is only
/// kept for logging.
#[derive(Debug, Error)]
#[error("invalid order payload: {0}")]
pub struct InvalidOrder(#[from] pub serde_json::Error);

impl IntoResponse for InvalidOrder {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, INVALID_ORDER_MESSAGE).into_response()
    }
}
