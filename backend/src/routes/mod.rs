//! Route definitions for the EcoClime API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Dashboard aggregate
        .route("/dashboard", get(handlers::get_dashboard))
        .nest("/weather", weather_routes())
        .route("/alerts/recent", get(handlers::get_recent_alerts))
        .route("/vegetation/assess", post(handlers::assess_vegetation_health))
        .nest("/crops", crop_routes())
        .nest("/chat", chat_routes())
        .route("/geocode/reverse", get(handlers::reverse_geocode))
        .route("/disease/diagnose", post(handlers::diagnose_disease))
}

/// Weather lookup routes
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_weather_by_place))
        .route("/point", get(handlers::get_weather_at_point))
}

/// Crop suggestion routes
fn crop_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::suggest_crops))
        .route("/recommendations", get(handlers::get_crop_recommendations))
}

/// Farming assistant routes
fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::send_chat_message))
        .route("/greeting", get(handlers::get_chat_greeting))
}
