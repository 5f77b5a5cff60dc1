pub mod orders;

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::trace::TraceLayer;

/// Builds the service router. Paths other than those merged here fall
/// through to axum's default 404, wrong methods to its 405.
pub fn create_routes() -> Router {
    Router::new()
        .merge(orders::routes())
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
}
