//! Crop recommendation models

use serde::{Deserialize, Serialize};

pub const DEFAULT_RECOMMENDATION_TEXT: &str = "Based on the current season, soil conditions, climate data, and historical yields, here are the AI-powered recommendations for the best crops to plant:";

const WHEAT_IMAGE: &str = "https://images.unsplash.com/photo-1464983953574-0892a716854b?auto=format&fit=crop&w=400&q=80";

/// Crop illustrations keyed by lowercase crop name
const CROP_IMAGES: &[(&str, &str)] = &[
    ("wheat", WHEAT_IMAGE),
    ("rice", "https://images.unsplash.com/photo-1509228468518-180dd4864904?auto=format&fit=crop&w=400&q=80"),
    ("maize", "https://images.unsplash.com/photo-1506744038136-46273834b3fb?auto=format&fit=crop&w=400&q=80"),
    ("corn", "https://images.unsplash.com/photo-1506744038136-46273834b3fb?auto=format&fit=crop&w=400&q=80"),
    ("barley", "https://images.unsplash.com/photo-1519864600265-abb23847ef2c?auto=format&fit=crop&w=400&q=80"),
    ("soybean", "https://images.unsplash.com/photo-1502741338009-cac2772e18bc?auto=format&fit=crop&w=400&q=80"),
    ("soybeans", "https://images.unsplash.com/photo-1502741338009-cac2772e18bc?auto=format&fit=crop&w=400&q=80"),
    ("potato", "https://images.unsplash.com/photo-1506084868230-bb9d95c24759?auto=format&fit=crop&w=400&q=80"),
    ("sugarcane", "https://images.unsplash.com/photo-1506784983877-45594efa4cbe?auto=format&fit=crop&w=400&q=80"),
    ("cotton", "https://images.unsplash.com/photo-1503342217505-b0a15ec3261c?auto=format&fit=crop&w=400&q=80"),
];

/// A crop card shown in the crop selection panel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropCard {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_profit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_assessment: Option<String>,
}

impl CropCard {
    /// Card for a bare crop name with no further details
    pub fn from_name(name: &str) -> Self {
        Self::with_description(name, "")
    }

    pub fn with_description(name: &str, description: &str) -> Self {
        let name = name.trim();
        Self {
            id: crop_id(name),
            name: name.to_string(),
            description: description.trim().to_string(),
            image: crop_image_for(name).to_string(),
            estimated_profit: None,
            risk_assessment: None,
        }
    }

    /// Fill a missing id or image from the crop name
    pub fn normalized(mut self) -> Self {
        if self.id.is_empty() {
            self.id = crop_id(&self.name);
        }
        if self.image.is_empty() {
            self.image = crop_image_for(&self.name).to_string();
        }
        self
    }
}

/// Where a crop list came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CropSource {
    Companion,
    Default,
}

/// Crop suggestions for a location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropSuggestions {
    pub crops: Vec<CropCard>,
    pub recommendation_text: String,
    pub source: CropSource,
}

impl CropSuggestions {
    pub fn defaults() -> Self {
        Self {
            crops: default_crops(),
            recommendation_text: DEFAULT_RECOMMENDATION_TEXT.to_string(),
            source: CropSource::Default,
        }
    }
}

/// The fixed crop list shown when no recommendation backend answers
pub fn default_crops() -> Vec<CropCard> {
    [
        ("Rice", "₹50,000", "3/5", "Rice is suitable for wet and humid climates."),
        ("Wheat", "₹45,000", "2/5", "Wheat grows best in cool, dry climates."),
        ("Corn", "₹60,000", "3/5", "Corn thrives in warm weather with moderate rainfall."),
        ("Soybeans", "₹55,000", "2/5", "Soybeans prefer well-drained soil and warm temperatures."),
    ]
    .into_iter()
    .map(|(name, profit, risk, description)| CropCard {
        estimated_profit: Some(profit.to_string()),
        risk_assessment: Some(risk.to_string()),
        ..CropCard::with_description(name, description)
    })
    .collect()
}

/// Image for a crop: exact lowercase name, then its first word, then wheat
pub fn crop_image_for(name: &str) -> &'static str {
    let lower = name.trim().to_lowercase();
    let first_word = lower.split_whitespace().next().unwrap_or_default();

    lookup_image(&lower)
        .or_else(|| lookup_image(first_word))
        .unwrap_or(WHEAT_IMAGE)
}

fn lookup_image(key: &str) -> Option<&'static str> {
    CROP_IMAGES
        .iter()
        .find(|(crop, _)| *crop == key)
        .map(|(_, url)| *url)
}

fn crop_id(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Parse a free-text crop list such as a language-model answer.
///
/// Lines shaped like "1. Wheat: staple rabi crop" become cards with a
/// description. When no line parses, the first three comma-separated names
/// are used instead.
pub fn parse_crop_details(text: &str) -> Vec<CropCard> {
    let crops: Vec<CropCard> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| {
            line.chars()
                .next()
                .map(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '*' | '.'))
                .unwrap_or(false)
        })
        .filter_map(parse_crop_line)
        .collect();

    if !crops.is_empty() {
        return crops;
    }

    text.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .take(3)
        .map(CropCard::from_name)
        .collect()
}

/// Parse "[digits][.] Name[:] description"
fn parse_crop_line(line: &str) -> Option<CropCard> {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    let rest = rest.strip_prefix('.').unwrap_or(rest).trim_start();

    let name_len = rest
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_alphabetic() || c.is_whitespace() || *c == '-'))
        .map(|(i, _)| i)
        .unwrap_or(rest.len());

    // Bullet dashes are part of the name run and are kept
    let name = rest[..name_len].trim();
    if name.is_empty() {
        return None;
    }

    let description = rest[name_len..].strip_prefix(':').unwrap_or(&rest[name_len..]);
    Some(CropCard::with_description(name, description))
}
