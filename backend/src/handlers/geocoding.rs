//! HTTP handler for reverse address lookup

use axum::{
    extract::{Query, State},
    Json,
};
use shared::{validate_coordinates, GpsCoordinates};

use super::PointQuery;
use crate::error::{AppError, AppResult};
use crate::services::{GeocodingService, ReverseAddress};
use crate::AppState;

/// Address for a point
/// GET /geocode/reverse?lat=&lon=
pub async fn reverse_geocode(
    State(state): State<AppState>,
    Query(query): Query<PointQuery>,
) -> AppResult<Json<ReverseAddress>> {
    let coords: GpsCoordinates = query.into();
    validate_coordinates(&coords).map_err(|msg| AppError::validation("coordinates", msg))?;

    let service = GeocodingService::new(state.geocoder.clone());
    Ok(Json(service.address(coords).await))
}
