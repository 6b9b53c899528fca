//! Weather data models

use serde::{Deserialize, Serialize};

use crate::types::GpsCoordinates;

/// Current conditions for a resolved place, as shown on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherReading {
    pub temperature_celsius: f64,
    pub humidity_percent: i32,
    pub wind_speed_kph: f64,
    /// Rainfall over the last hour; zero when the provider reports none
    pub rainfall_mm_1h: f64,
    pub condition_text: String,
    pub location_label: String,
    pub coordinates: GpsCoordinates,
}

/// Convert a wind speed in m/s to whole km/h
pub fn wind_mps_to_kph(speed_mps: f64) -> f64 {
    (speed_mps * 3.6).round()
}

/// Build the "{name}, {country}" label used for a resolved place
pub fn location_label(name: &str, country: &str) -> String {
    if country.is_empty() {
        name.to_string()
    } else {
        format!("{}, {}", name, country)
    }
}
