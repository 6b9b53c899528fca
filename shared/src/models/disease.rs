//! Crop disease diagnosis models

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

/// Result of analysing a crop image
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiseaseDiagnosis {
    pub disease: String,
    pub confidence_percent: u8,
    pub severity: Severity,
    pub treatment: String,
    pub prevention: String,
}

/// The fixed diagnosis returned by the placeholder classifier
pub fn mock_diagnosis() -> DiseaseDiagnosis {
    DiseaseDiagnosis {
        disease: "Late Blight".to_string(),
        confidence_percent: 89,
        severity: Severity::Moderate,
        treatment: "Apply copper-based fungicide immediately. Remove affected leaves and improve air circulation.".to_string(),
        prevention: "Ensure proper spacing between plants, avoid overhead watering, and monitor humidity levels.".to_string(),
    }
}
