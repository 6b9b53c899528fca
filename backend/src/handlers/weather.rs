//! HTTP handlers for weather lookup endpoints

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    Json,
};
use serde::Deserialize;
use shared::WeatherReading;

use super::{weather_client, PointQuery};
use crate::error::AppResult;
use crate::services::{
    CropService, DashboardService, MapPointView, VegetationService, WeatherService,
};
use crate::AppState;

/// Query parameters for a place lookup
#[derive(Debug, Deserialize)]
pub struct PlaceQuery {
    #[serde(default)]
    pub place: String,
}

/// Current weather for a place name
/// GET /weather?place=
pub async fn get_weather_by_place(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PlaceQuery>,
) -> AppResult<Json<WeatherReading>> {
    let service = WeatherService::new(weather_client(&state, &headers));
    let reading = service.by_place(&query.place).await?;
    Ok(Json(reading))
}

/// Weather and vegetation health for a map point
/// GET /weather/point?lat=&lon=
pub async fn get_weather_at_point(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PointQuery>,
) -> AppResult<Json<MapPointView>> {
    let service = DashboardService::new(
        WeatherService::new(weather_client(&state, &headers)),
        VegetationService::new(state.companion.clone()),
        CropService::new(state.companion.clone()),
    );
    let view = service.map_point(query.into()).await?;
    Ok(Json(view))
}
