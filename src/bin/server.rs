use std::sync::Arc;

use anyhow::{Context, Result};
use leavebot::api::{AppContext, router};
use leavebot::core::config::AppConfig;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env().context("loading configuration")?;
    leavebot::setup_logging(&config.log_level, config.log_format);

    let port = config.port;
    let events_path = config.events_path.clone();
    let request_log_enabled = config.request_log_enabled;
    let app = router(Arc::new(AppContext::new(config)));

    let listener = TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("binding port {port}"))?;

    info!(
        port,
        events_path = %events_path,
        request_log_enabled,
        "⚡️ Leave request bot is running!"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Leave request bot stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
