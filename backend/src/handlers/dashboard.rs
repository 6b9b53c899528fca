//! HTTP handler for the dashboard view

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    Json,
};

use super::{weather_client, PlaceQuery};
use crate::error::AppResult;
use crate::services::{
    CropService, DashboardService, DashboardView, VegetationService, WeatherService,
};
use crate::AppState;

/// Weather, vegetation health, alerts and crops for a place
/// GET /dashboard?place=
pub async fn get_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PlaceQuery>,
) -> AppResult<Json<DashboardView>> {
    let service = DashboardService::new(
        WeatherService::new(weather_client(&state, &headers)),
        VegetationService::new(state.companion.clone()),
        CropService::new(state.companion.clone()),
    );
    let view = service.build(&query.place).await?;
    Ok(Json(view))
}
