//! HTTP handler for crop disease diagnosis

use axum::Json;
use serde::Deserialize;
use shared::DiseaseDiagnosis;
use validator::Validate;

use crate::error::AppResult;
use crate::services::DiseaseService;

#[derive(Debug, Deserialize, Validate)]
pub struct DiagnoseRequest {
    #[validate(length(min = 1, message = "Image is required"))]
    pub image_base64: String,
}

/// Diagnose a crop image
/// POST /disease/diagnose
pub async fn diagnose_disease(
    Json(input): Json<DiagnoseRequest>,
) -> AppResult<Json<DiseaseDiagnosis>> {
    input.validate()?;
    let diagnosis = DiseaseService::new().diagnose(&input.image_base64)?;
    Ok(Json(diagnosis))
}
