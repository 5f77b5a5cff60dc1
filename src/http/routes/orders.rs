use crate::services::orders::handle_order;
use axum::{routing::post, Router};

pub fn routes() -> Router {
    Router::new().route("/orders", post(handle_order))
}
