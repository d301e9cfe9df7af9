use std::sync::Arc;

use analysis_service::config::Config;
use analysis_service::services::providers::openai::OpenAiProvider;
use analysis_service::{build_router, AppState};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("analysis_service=info,tower_http=info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let provider = match OpenAiProvider::new(config.openai.clone()) {
        Ok(provider) => provider,
        Err(e) => {
            error!("Failed to initialise completion client: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        model = %config.openai.model,
        base_url = %config.openai.base_url,
        "Completion client initialised"
    );

    let app = build_router(AppState {
        provider: Arc::new(provider),
        port: config.port,
    });

    let addr = format!("0.0.0.0:{}", config.port);
    info!("Analysis service starting on {}", addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
