//! Vegetation health models
//!
//! The vegetation health score is a coarse 0-100 proxy for crop condition
//! derived from three ambient weather signals. Scoring starts from a "Good"
//! baseline and subtracts fixed penalties for thermal stress, humidity
//! stress, waterlogging and drought.

use serde::{Deserialize, Serialize};

use super::weather::WeatherReading;

/// Baseline score before any penalty
pub const BASELINE_SCORE: i32 = 75;

const THERMAL_STRESS_PENALTY: i32 = 20;
const HUMIDITY_STRESS_PENALTY: i32 = 15;
const WATERLOGGING_PENALTY: i32 = 10;
const DROUGHT_PENALTY: i32 = 25;

/// Coarse vegetation status bucket
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum VegetationStatus {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl VegetationStatus {
    /// Map a score to its status. Thresholds are evaluated high to low and
    /// the first match wins, so the partition is total and non-overlapping.
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            VegetationStatus::Excellent
        } else if score >= 60 {
            VegetationStatus::Good
        } else if score >= 40 {
            VegetationStatus::Fair
        } else {
            VegetationStatus::Poor
        }
    }

    pub fn default_recommendation(&self) -> &'static str {
        match self {
            VegetationStatus::Excellent => "Optimal growing conditions detected",
            VegetationStatus::Good => "Monitor weather conditions",
            VegetationStatus::Fair => "Consider irrigation or protective measures",
            VegetationStatus::Poor => "Immediate intervention required",
        }
    }

    /// Illustration shown next to the status on the dashboard
    pub fn image_url(&self) -> &'static str {
        match self {
            VegetationStatus::Excellent => "https://images.unsplash.com/photo-1506744038136-46273834b3fb?auto=format&fit=crop&w=400&q=80",
            VegetationStatus::Good => "https://images.unsplash.com/photo-1464983953574-0892a716854b?auto=format&fit=crop&w=400&q=80",
            VegetationStatus::Fair => "https://upload.wikimedia.org/wikipedia/commons/6/6e/Wheat_field_with_some_dry_patches.jpg",
            VegetationStatus::Poor => "https://images.unsplash.com/photo-1509228468518-180dd4864904?auto=format&fit=crop&w=400&q=80",
        }
    }
}

impl std::fmt::Display for VegetationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            VegetationStatus::Excellent => "Excellent",
            VegetationStatus::Good => "Good",
            VegetationStatus::Fair => "Fair",
            VegetationStatus::Poor => "Poor",
        };
        write!(f, "{}", name)
    }
}

/// A single recommendation line or an ordered list of them
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Recommendation {
    Single(String),
    Many(Vec<String>),
}

impl Recommendation {
    /// Recommendation lines in display order
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Recommendation::Single(text) => vec![text.as_str()],
            Recommendation::Many(items) => items.iter().map(String::as_str).collect(),
        }
    }
}

/// Where an assessment came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentSource {
    #[default]
    Heuristic,
    Companion,
}

/// Derived vegetation assessment for one weather reading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VegetationAssessment {
    pub score: u8,
    pub status: VegetationStatus,
    pub recommendation: Recommendation,
    #[serde(default)]
    pub source: AssessmentSource,
}

impl VegetationAssessment {
    /// Assess the vegetation health implied by a weather reading
    pub fn from_reading(reading: &WeatherReading) -> Self {
        assess_vegetation(
            reading.temperature_celsius,
            reading.humidity_percent as f64,
            reading.rainfall_mm_1h,
        )
    }

    /// Build an assessment for an externally supplied score. The score is
    /// clamped and the status re-derived so the threshold partition holds.
    pub fn from_score(score: i64, recommendations: Vec<String>, source: AssessmentSource) -> Self {
        let score = score.clamp(0, 100) as u8;
        let status = VegetationStatus::from_score(score);
        let recommendation = match recommendations.len() {
            0 => Recommendation::Single(status.default_recommendation().to_string()),
            1 => Recommendation::Single(recommendations.into_iter().next().unwrap_or_default()),
            _ => Recommendation::Many(recommendations),
        };

        Self {
            score,
            status,
            recommendation,
            source,
        }
    }
}

/// Score vegetation health from temperature (°C), relative humidity (%) and
/// last-hour rainfall (mm).
///
/// Inputs are not validated. NaN compares false everywhere, so a NaN input
/// triggers none of the penalties that depend on it.
pub fn assess_vegetation(temperature: f64, humidity: f64, rainfall: f64) -> VegetationAssessment {
    let mut score = BASELINE_SCORE;

    if temperature > 30.0 || temperature < 5.0 {
        score -= THERMAL_STRESS_PENALTY;
    }
    if humidity < 30.0 || humidity > 90.0 {
        score -= HUMIDITY_STRESS_PENALTY;
    }
    if rainfall > 50.0 {
        score -= WATERLOGGING_PENALTY;
    }
    // Stacks with the humidity penalty when humidity < 30
    if rainfall == 0.0 && humidity < 40.0 {
        score -= DROUGHT_PENALTY;
    }

    let score = score.clamp(0, 100) as u8;
    let status = VegetationStatus::from_score(score);

    VegetationAssessment {
        score,
        status,
        recommendation: Recommendation::Single(status.default_recommendation().to_string()),
        source: AssessmentSource::Heuristic,
    }
}
