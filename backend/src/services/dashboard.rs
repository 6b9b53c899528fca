//! Dashboard and map views
//!
//! Aggregates one weather lookup with the vegetation assessment, alert rules
//! and crop suggestions derived from it.

use serde::Serialize;
use shared::{
    evaluate_alerts, AlertReport, CropSuggestions, GpsCoordinates, VegetationAssessment,
    WeatherReading,
};

use crate::error::AppResult;
use crate::services::{CropService, VegetationService, WeatherService};

/// Everything the dashboard page shows for one place
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub weather: WeatherReading,
    pub vegetation: VegetationAssessment,
    pub alerts: AlertReport,
    pub crops: CropSuggestions,
}

/// Popup content for a point picked on the map
#[derive(Debug, Clone, Serialize)]
pub struct MapPointView {
    pub weather: WeatherReading,
    pub vegetation: VegetationAssessment,
}

pub struct DashboardService {
    weather: WeatherService,
    vegetation: VegetationService,
    crops: CropService,
}

impl DashboardService {
    pub fn new(weather: WeatherService, vegetation: VegetationService, crops: CropService) -> Self {
        Self {
            weather,
            vegetation,
            crops,
        }
    }

    /// Build the dashboard for a place name
    pub async fn build(&self, place: &str) -> AppResult<DashboardView> {
        let weather = self.weather.by_place(place).await?;
        let vegetation = self.vegetation.assess(&weather).await;
        let crop_location = match weather.location_label.trim() {
            "" => place.trim(),
            label => label,
        };
        let crops = self.crops.suggest(crop_location).await?;

        // Alerts follow the weather heuristic even when the companion
        // supplied the displayed assessment
        let heuristic = VegetationAssessment::from_reading(&weather);
        let alerts = evaluate_alerts(&weather, &heuristic);

        if alerts.hazardous {
            tracing::info!(
                "Hazard alert for {}: {}",
                weather.location_label,
                alerts.reasons.join("; ")
            );
        }

        Ok(DashboardView {
            weather,
            vegetation,
            alerts,
            crops,
        })
    }

    /// Weather and heuristic vegetation health for a map point
    pub async fn map_point(&self, coords: GpsCoordinates) -> AppResult<MapPointView> {
        let weather = self.weather.by_coordinates(coords).await?;
        let vegetation = VegetationAssessment::from_reading(&weather);

        Ok(MapPointView {
            weather,
            vegetation,
        })
    }
}
