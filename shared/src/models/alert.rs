//! Agronomic alert rules

use serde::{Deserialize, Deserializer, Serialize};

use super::vegetation::{VegetationAssessment, VegetationStatus};
use super::weather::WeatherReading;

pub const HAZARD_HEADLINE: &str =
    "⚠️ Hazardous weather or vegetation conditions detected for agriculture!";
pub const ALL_CLEAR_HEADLINE: &str = "No major alert for your place";

/// Alert summary for a weather reading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlertReport {
    pub hazardous: bool,
    pub headline: String,
    /// Triggered reasons in rule order
    pub reasons: Vec<String>,
}

impl AlertReport {
    pub fn all_clear() -> Self {
        Self {
            hazardous: false,
            headline: ALL_CLEAR_HEADLINE.to_string(),
            reasons: Vec::new(),
        }
    }
}

/// Evaluate hazard rules for a reading and its vegetation assessment
pub fn evaluate_alerts(reading: &WeatherReading, vegetation: &VegetationAssessment) -> AlertReport {
    let mut reasons = Vec::new();

    if reading.temperature_celsius > 35.0 {
        reasons.push("Temperature is too high (>35°C)".to_string());
    }
    if reading.temperature_celsius < 5.0 {
        reasons.push("Temperature is too low (<5°C)".to_string());
    }
    if reading.humidity_percent < 30 {
        reasons.push("Humidity is too low (<30%)".to_string());
    }
    if reading.humidity_percent > 90 {
        reasons.push("Humidity is too high (>90%)".to_string());
    }
    if reading.rainfall_mm_1h > 50.0 {
        reasons.push("Heavy rainfall (>50mm/hr)".to_string());
    }
    if vegetation.status == VegetationStatus::Poor {
        reasons.push("Vegetation health is poor".to_string());
    }

    if reasons.is_empty() {
        return AlertReport::all_clear();
    }

    AlertReport {
        hazardous: true,
        headline: HAZARD_HEADLINE.to_string(),
        reasons,
    }
}

/// Severity of a logged alert
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    High,
    Medium,
    Low,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Lifecycle state of a logged alert
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Active,
    Resolved,
    Monitoring,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Alert ids are numeric or string depending on the companion version
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum AlertId {
    Number(i64),
    Text(String),
}

/// One entry of the recent alerts feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecentAlert {
    pub id: AlertId,
    /// Alert category, e.g. "weather", "irrigation", "pest"
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub severity: AlertSeverity,
    #[serde(default)]
    pub status: AlertStatus,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Display time as sent upstream
    #[serde(default)]
    pub time: String,
}

/// Recent alerts grouped by day
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecentAlerts {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub today: Vec<RecentAlert>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub yesterday: Vec<RecentAlert>,
}

impl RecentAlerts {
    pub fn is_empty(&self) -> bool {
        self.today.is_empty() && self.yesterday.is_empty()
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
