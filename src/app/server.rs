use crate::app::routes;
use crate::app::state::AppState;
use crate::config::AppConfig;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Binds the configured address and builds the router, without serving yet.
pub async fn bind(config: &AppConfig) -> Result<(TcpListener, Router)> {
    let state = Arc::new(AppState::from_config(config)?);
    let app = routes::router(state, config.api_prefix());

    let address = config.bind_address();
    let listener = TcpListener::bind(&address).await?;
    tracing::info!(
        "🚀 Tarot API listening on http://{}{}",
        listener.local_addr()?,
        config.api_prefix()
    );
    Ok((listener, app))
}

pub async fn run<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    tracing::info!("👋 Tarot API shut down");
    Ok(())
}

/// Serves until Ctrl-C.
pub async fn serve(config: &AppConfig) -> Result<()> {
    let (listener, app) = bind(config).await?;
    run(listener, app, shutdown_signal()).await
}

pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received, draining connections"),
        Err(e) => tracing::error!("❌ Failed to listen for shutdown signal: {}", e),
    }
}
