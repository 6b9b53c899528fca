//! Crop suggestion service
//!
//! Crop lists come from the companion backend when it answers and from the
//! built-in catalog otherwise. The companion has shipped several payload
//! shapes for `crops`: a list of names, a list of cards, or free text.

use serde_json::Value;
use shared::{
    parse_crop_details, validate_place_query, CropCard, CropSource, CropSuggestions,
    DEFAULT_RECOMMENDATION_TEXT,
};

use crate::error::{AppError, AppResult};
use crate::external::companion::CropsPayload;
use crate::external::CompanionClient;

#[derive(Clone)]
pub struct CropService {
    companion: CompanionClient,
}

impl CropService {
    pub fn new(companion: CompanionClient) -> Self {
        Self { companion }
    }

    /// Crops suited to a location. Upstream failures yield the default list.
    pub async fn suggest(&self, location: &str) -> AppResult<CropSuggestions> {
        validate_place_query(location).map_err(|msg| AppError::validation("location", msg))?;

        match self.companion.crops(location.trim()).await {
            Ok(payload) => Ok(suggestions_from_payload(payload)),
            Err(e) => {
                tracing::warn!("Crop suggestions unavailable for {}: {}", location, e);
                Ok(CropSuggestions::defaults())
            }
        }
    }

    /// Seasonal crop recommendations. An empty or failed answer yields the
    /// default list.
    pub async fn recommendations(&self) -> CropSuggestions {
        match self.companion.crop_recommendations().await {
            Ok(payload) => {
                let text = payload.recommendation_text.clone();
                let suggestions = suggestions_from_payload(payload);
                if suggestions.crops.is_empty() {
                    let mut defaults = CropSuggestions::defaults();
                    if let Some(text) = text.filter(|t| !t.trim().is_empty()) {
                        defaults.recommendation_text = text;
                    }
                    defaults
                } else {
                    suggestions
                }
            }
            Err(e) => {
                tracing::warn!("Crop recommendations unavailable: {}", e);
                CropSuggestions::defaults()
            }
        }
    }
}

/// Convert a companion crop payload into suggestions
pub fn suggestions_from_payload(payload: CropsPayload) -> CropSuggestions {
    let crops = match payload.crops {
        Value::Array(items) => items.into_iter().filter_map(card_from_value).collect(),
        Value::String(text) => parse_crop_details(&text),
        _ => Vec::new(),
    };

    CropSuggestions {
        crops,
        recommendation_text: payload
            .recommendation_text
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_RECOMMENDATION_TEXT.to_string()),
        source: CropSource::Companion,
    }
}

fn card_from_value(value: Value) -> Option<CropCard> {
    match value {
        Value::String(name) if !name.trim().is_empty() => Some(CropCard::from_name(&name)),
        Value::Object(ref map) => {
            let name = map.get("name").and_then(Value::as_str)?.to_string();
            match serde_json::from_value::<CropCard>(value.clone()) {
                Ok(card) => Some(card.normalized()),
                Err(_) => {
                    let description = map
                        .get("description")
                        .and_then(Value::as_str)
                        .unwrap_or_default();
                    Some(CropCard::with_description(&name, description))
                }
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(crops: Value) -> CropsPayload {
        CropsPayload {
            crops,
            recommendation_text: None,
        }
    }

    #[test]
    fn test_names_become_cards() {
        let result = suggestions_from_payload(payload(json!(["Rice", "Pearl Millet"])));
        assert_eq!(result.source, CropSource::Companion);
        assert_eq!(result.crops.len(), 2);
        assert_eq!(result.crops[0].name, "Rice");
        assert_eq!(result.crops[1].id, "pearl-millet");
        assert_eq!(result.recommendation_text, DEFAULT_RECOMMENDATION_TEXT);
    }

    #[test]
    fn test_non_array_is_empty() {
        assert!(suggestions_from_payload(payload(json!({"rice": 1}))).crops.is_empty());
        assert!(suggestions_from_payload(payload(Value::Null)).crops.is_empty());
    }

    #[test]
    fn test_object_cards_are_normalized() {
        let result = suggestions_from_payload(payload(json!([
            {"id": "", "name": "Cotton", "description": "Kharif cash crop", "image": ""},
            {"name": "Barley"},
            {"description": "nameless"}
        ])));
        assert_eq!(result.crops.len(), 2);
        assert_eq!(result.crops[0].id, "cotton");
        assert!(!result.crops[0].image.is_empty());
        assert_eq!(result.crops[1].name, "Barley");
    }

    #[test]
    fn test_free_text_is_parsed() {
        let result = suggestions_from_payload(payload(json!(
            "1. Wheat: rabi staple\n2. Mustard: oilseed"
        )));
        let names: Vec<_> = result.crops.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Wheat", "Mustard"]);
    }
}
