//! Vegetation health assessment service

use shared::{AssessmentSource, VegetationAssessment, WeatherReading};

use crate::external::CompanionClient;

#[derive(Clone)]
pub struct VegetationService {
    companion: CompanionClient,
}

impl VegetationService {
    pub fn new(companion: CompanionClient) -> Self {
        Self { companion }
    }

    /// Assess vegetation health for a reading.
    ///
    /// The heuristic score is computed first; when the companion backend
    /// answers for the same place its score replaces it.
    pub async fn assess(&self, reading: &WeatherReading) -> VegetationAssessment {
        let heuristic = VegetationAssessment::from_reading(reading);
        let place = reading.location_label.as_str();

        match self.companion.vegetation(place).await {
            Ok(payload) => {
                let assessment = VegetationAssessment::from_score(
                    payload.score.round() as i64,
                    payload.recommendation_lines(),
                    AssessmentSource::Companion,
                );
                tracing::debug!(
                    "Companion vegetation for {}: {} ({}), heuristic was {}",
                    place,
                    assessment.score,
                    assessment.status,
                    heuristic.score
                );
                assessment
            }
            Err(e) => {
                tracing::warn!("Companion vegetation lookup failed for {}: {}", place, e);
                heuristic
            }
        }
    }
}
