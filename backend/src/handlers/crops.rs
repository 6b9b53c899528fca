//! HTTP handlers for crop suggestions

use axum::{extract::State, Json};
use serde::Deserialize;
use shared::CropSuggestions;
use validator::Validate;

use crate::error::AppResult;
use crate::services::CropService;
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct CropSuggestionRequest {
    #[validate(length(min = 1, max = 200, message = "Location must be 1-200 characters"))]
    pub location: String,
}

/// Crops suited to a location
/// POST /crops
pub async fn suggest_crops(
    State(state): State<AppState>,
    Json(input): Json<CropSuggestionRequest>,
) -> AppResult<Json<CropSuggestions>> {
    input.validate()?;
    let service = CropService::new(state.companion.clone());
    let suggestions = service.suggest(&input.location).await?;
    Ok(Json(suggestions))
}

/// Seasonal crop recommendations
/// GET /crops/recommendations
pub async fn get_crop_recommendations(
    State(state): State<AppState>,
) -> Json<CropSuggestions> {
    let service = CropService::new(state.companion.clone());
    Json(service.recommendations().await)
}
