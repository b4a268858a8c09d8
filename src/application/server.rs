use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::application::routes::app_router;
use crate::application::state::{AppState, AppStateConfig};
use crate::infrastructure::ai::AiSettings;

pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub ai: AiSettings,
    pub ai_rate_limit_per_minute: u32,
}

pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    url::Url::parse(&config.ai.url)
        .with_context(|| format!("invalid TUBEBOOST_AI_URL: {}", config.ai.url))?;

    let state = AppState::new(AppStateConfig::new(
        config.ai,
        config.ai_rate_limit_per_minute,
    ));

    if !state.ai_configured {
        warn!("OPENAI_API_KEY not set, serving deterministic fallback suggestions only");
    }

    let listener = TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_address))?;

    info!(
        address = %config.bind_address,
        model = %state.ai_model,
        ai_configured = state.ai_configured,
        rate_limit_per_minute = state.ai_rate_limit_per_minute,
        "starting HTTP server"
    );

    let app = app_router(state);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server terminated unexpectedly")?;

    info!("server shutdown complete");

    Ok(())
}

#[allow(clippy::expect_used)] // Startup: panicking is appropriate if signal handlers fail
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
