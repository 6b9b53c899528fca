//! HTTP handlers for the EcoClime API

mod alerts;
mod chat;
mod crops;
mod dashboard;
mod disease;
mod geocoding;
mod health;
mod vegetation;
mod weather;

pub use alerts::*;
pub use chat::*;
pub use crops::*;
pub use dashboard::*;
pub use disease::*;
pub use geocoding::*;
pub use health::*;
pub use vegetation::*;
pub use weather::*;

use axum::http::HeaderMap;
use serde::Deserialize;
use shared::GpsCoordinates;

use crate::external::WeatherClient;
use crate::AppState;

/// Request header carrying a caller-supplied OpenWeatherMap key
pub const OPENWEATHER_KEY_HEADER: &str = "x-openweather-key";

/// Weather client for this request, honouring a key override header
pub(crate) fn weather_client(state: &AppState, headers: &HeaderMap) -> WeatherClient {
    match headers
        .get(OPENWEATHER_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|key| !key.is_empty())
    {
        Some(key) => state.weather.with_api_key(key.to_string()),
        None => state.weather.clone(),
    }
}

/// Query parameters for a map point
#[derive(Debug, Deserialize)]
pub struct PointQuery {
    pub lat: f64,
    pub lon: f64,
}

impl From<PointQuery> for GpsCoordinates {
    fn from(q: PointQuery) -> Self {
        GpsCoordinates::new(q.lat, q.lon)
    }
}
