use crate::{config::AppConfig, error::ServiceError, http::routes::create_routes};
use tokio::{net::TcpListener, sync::watch, task::JoinHandle};
use tracing::info;

/// Binds the listener and spawns the serve loop.
///
/// Bind failures are returned directly so the caller can treat them as
/// fatal before anything is spawned.
pub async fn start_http_server(
    config: &AppConfig,
    shutdown_rx: watch::Receiver<()>,
) -> Result<JoinHandle<Result<(), ServiceError>>, ServiceError> {
    let http_addr = config.http.bind_address();
    let listener = TcpListener::bind(&http_addr)
        .await
        .map_err(|source| ServiceError::Bind {
            addr: http_addr.clone(),
            source,
        })?;

    let local_addr = listener.local_addr().map_err(ServiceError::Serve)?;
    info!("🚀 Order subscriber listening on {}", local_addr);

    Ok(tokio::spawn(run_http_server(listener, shutdown_rx)))
}

pub async fn run_http_server(
    listener: TcpListener,
    mut shutdown_rx: watch::Receiver<()>,
) -> Result<(), ServiceError> {
    let app = create_routes();

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async move {
            shutdown_rx.changed().await.ok();
            info!("🚦 Gracefully shutting down all connections");
        })
        .await
        .map_err(ServiceError::Serve)?;

    Ok(())
}
