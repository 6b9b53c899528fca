//! EcoClime agricultural dashboard - API server library
//!
//! Weather lookup, vegetation health scoring, crop suggestions, a farming
//! assistant proxy and address lookup, served as JSON under `/api/v1`.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;
use error::{AppError, AppResult};
use external::{AssistantClient, CompanionClient, NominatimClient, WeatherClient};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather: WeatherClient,
    pub assistant: AssistantClient,
    pub companion: CompanionClient,
    pub geocoder: NominatimClient,
}

impl AppState {
    /// Build upstream clients from configuration.
    ///
    /// All clients share one connection pool.
    pub fn from_config(config: Config) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.http.timeout())
            .build()
            .map_err(|e| AppError::Configuration(format!("HTTP client: {}", e)))?;

        let weather = WeatherClient::with_base_urls(
            http_client.clone(),
            config.weather.api_key.clone(),
            config.weather.geo_base_url.clone(),
            config.weather.data_base_url.clone(),
        );
        let assistant = AssistantClient::new(
            http_client.clone(),
            config.assistant.endpoint.clone(),
            config.assistant.model.clone(),
            config.assistant.api_key.clone(),
        );
        let companion = CompanionClient::new(
            http_client.clone(),
            config.companion.base_url.clone(),
            config.companion.chat_timeout(),
        );
        let geocoder = NominatimClient::new(
            http_client,
            config.geocoder.base_url.clone(),
            config.geocoder.user_agent.clone(),
        );

        Ok(Self {
            config: Arc::new(config),
            weather,
            assistant,
            companion,
            geocoder,
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "EcoClime Agricultural Dashboard API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
