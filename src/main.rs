//! Weather Dash server
//!
//! Serves the dashboard page, the WASM bundle and the weather proxy.

use weather_dash::{adapters, api, config};

use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_dash=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Starting Weather Dash v{} ({})",
        env!("WXD_VERSION"),
        env!("WXD_GIT_SHA")
    );

    // Load configuration
    let config = config::load_config()?;
    tracing::info!(
        "Configuration loaded, port: {}, city: {}",
        config.port,
        config.weather.city
    );

    let weather = adapters::openweather::OpenWeatherAdapter::new(&config.weather)?;
    if weather.has_api_key() {
        tracing::info!("OpenWeatherMap adapter configured ({})", config.weather.base_url);
    } else {
        tracing::warn!(
            "No OpenWeatherMap API key configured (set OPENWEATHER_API_KEY); /weather will answer 503"
        );
    }

    if !config.assets_dir.exists() {
        tracing::warn!(
            "Assets directory {} not found; the page will render without its WASM client",
            config.assets_dir.display()
        );
    }

    let state = api::AppState::new(weather, config.weather.city.as_str());
    let app = api::router(state, &config.assets_dir);

    // Start server with graceful shutdown
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
