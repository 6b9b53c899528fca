//! HTTP handler for the vegetation estimator

use axum::Json;
use serde::Deserialize;
use shared::{assess_vegetation, VegetationAssessment};

/// Raw weather inputs; values are taken as given
#[derive(Debug, Deserialize)]
pub struct AssessVegetationRequest {
    pub temperature: f64,
    pub humidity: f64,
    pub rainfall: f64,
}

/// Score vegetation health from weather values
/// POST /vegetation/assess
pub async fn assess_vegetation_health(
    Json(input): Json<AssessVegetationRequest>,
) -> Json<VegetationAssessment> {
    Json(assess_vegetation(
        input.temperature,
        input.humidity,
        input.rainfall,
    ))
}
