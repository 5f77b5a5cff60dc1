use tokio::{signal, sync::watch};
use tracing::{error, info};

use notification_service::{
    config::AppConfig, error::ServiceError, http::http_server::start_http_server,
    utils::logging::setup_logging,
};

#[tokio::main]
async fn main() -> Result<(), ServiceError> {
    let config = AppConfig::new().inspect_err(|e| eprintln!("❌ {}", e))?;
    let _guard = setup_logging(&config.logging).inspect_err(|e| eprintln!("❌ {}", e))?;

    let (shutdown_tx, shutdown_rx) = watch::channel(());

    tokio::spawn({
        let shutdown_tx = shutdown_tx.clone();
        async move {
            if signal::ctrl_c().await.is_ok() {
                info!("🛑 Received Ctrl+C. Triggering shutdown...");
                let _ = shutdown_tx.send(());
            }
        }
    });

    let server = start_http_server(&config, shutdown_rx)
        .await
        .inspect_err(|e| error!("💥 Error starting server: {}", e))?;

    match server.await {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => {
            error!("💥 Server crashed: {}", e);
            Err(e)
        }
        Err(join_err) => {
            error!("💥 Server task panicked: {:?}", join_err);
            Err(ServiceError::Serve(std::io::Error::other(join_err)))
        }
    }
}
