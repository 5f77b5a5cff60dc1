use crate::{
    error::InvalidOrder,
    models::order::{Object, Order},
};
use axum::{body::Bytes, http::StatusCode};
use serde::Deserialize;
use tracing::{info, warn};

/// Decodes the first JSON value in `body` as an order.
///
/// Bytes after a complete value are ignored. An empty body is an error.
pub fn decode_order(body: &[u8]) -> Result<Order, InvalidOrder> {
    let mut deserializer = serde_json::Deserializer::from_slice(body);
    let Object(order) = Object::<Order>::deserialize(&mut deserializer)?;
    Ok(order)
}

/// `POST /orders`: decode, log, acknowledge with an empty 200.
///
/// The raw body is taken as bytes so the content type is never checked.
pub async fn handle_order(body: Bytes) -> Result<StatusCode, InvalidOrder> {
    let order = decode_order(&body).map_err(|e| {
        warn!(target: "orders", "❌ rejected order payload ({} bytes): {}", body.len(), e.0);
        e
    })?;

    info!(
        target: "orders",
        order_id = %order.order_id,
        customer_id = %order.customer_id,
        items = order.items.len(),
        total_price = order.total_price,
        status = %order.status,
        created_at = %order.created_at,
        "📦 Received order: {:?}",
        order
    );

    Ok(StatusCode::OK)
}
