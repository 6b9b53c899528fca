//! Crop disease diagnosis
//!
//! Image analysis is a placeholder: any decodable image yields the same
//! diagnosis.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use shared::{mock_diagnosis, DiseaseDiagnosis};

use crate::error::{AppError, AppResult};

pub struct DiseaseService;

impl DiseaseService {
    pub fn new() -> Self {
        Self
    }

    /// Diagnose a base64 image, optionally given as a `data:` URL
    pub fn diagnose(&self, image_base64: &str) -> AppResult<DiseaseDiagnosis> {
        let payload = strip_data_url(image_base64.trim());
        if payload.is_empty() {
            return Err(AppError::validation("image_base64", "Image is required"));
        }

        let bytes = BASE64
            .decode(payload)
            .map_err(|_| AppError::validation("image_base64", "Image is not valid base64"))?;
        if bytes.is_empty() {
            return Err(AppError::validation("image_base64", "Image is required"));
        }

        tracing::debug!("Diagnosing crop image of {} bytes", bytes.len());
        Ok(mock_diagnosis())
    }
}

impl Default for DiseaseService {
    fn default() -> Self {
        Self::new()
    }
}

fn strip_data_url(input: &str) -> &str {
    match input.split_once(";base64,") {
        Some((prefix, data)) if prefix.starts_with("data:") => data,
        _ => input,
    }
}
