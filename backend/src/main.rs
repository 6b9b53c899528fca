//! EcoClime agricultural dashboard - API server
//!
//! Serves weather, vegetation health, crop and assistant endpoints for the
//! EcoClime dashboard.

use ecoclime_backend::{create_app, AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ecoclime_server=debug,ecoclime_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting EcoClime Server");
    tracing::info!("Environment: {}", config.environment);

    if config.weather.api_key.is_empty() {
        tracing::warn!("No OpenWeatherMap API key configured; weather requests need the x-openweather-key header");
    }
    if config.assistant.api_key.is_empty() {
        tracing::info!("No assistant API key configured; chat uses the companion backend");
    }

    let addr = config.bind_address();

    // Create application state
    let state = AppState::from_config(config)?;

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
