//! Weather lookup service

use shared::{validate_coordinates, validate_place_query, GpsCoordinates, WeatherReading};

use crate::error::{AppError, AppResult};
use crate::external::WeatherClient;

/// Current-conditions lookup by place name or map point
#[derive(Clone)]
pub struct WeatherService {
    client: WeatherClient,
}

impl WeatherService {
    pub fn new(client: WeatherClient) -> Self {
        Self { client }
    }

    /// Current weather for a free-text place name
    pub async fn by_place(&self, place: &str) -> AppResult<WeatherReading> {
        validate_place_query(place).map_err(|msg| AppError::validation("place", msg))?;
        self.ensure_api_key()?;

        let reading = self.client.lookup_place(place.trim()).await?;
        tracing::info!(
            "Weather for {}: {}°C, {}% humidity, {} mm rain",
            reading.location_label,
            reading.temperature_celsius,
            reading.humidity_percent,
            reading.rainfall_mm_1h
        );
        Ok(reading)
    }

    /// Current weather for a map point, labelled by reverse geocoding.
    ///
    /// Fails with `PlaceNotFound` when no named place lies near the point.
    pub async fn by_coordinates(&self, coords: GpsCoordinates) -> AppResult<WeatherReading> {
        validate_coordinates(&coords).map_err(|msg| AppError::validation("coordinates", msg))?;
        self.ensure_api_key()?;

        let place = self.client.reverse_geocode(coords).await?;
        self.client.current_conditions(&place).await
    }

    fn ensure_api_key(&self) -> AppResult<()> {
        if self.client.has_api_key() {
            Ok(())
        } else {
            Err(AppError::Configuration(
                "OpenWeatherMap API key is not set".to_string(),
            ))
        }
    }
}
