//! WebAssembly module for the EcoClime dashboard
//!
//! Provides client-side computation for:
//! - Vegetation health scoring
//! - Agronomic alert rules
//! - Crop image lookup and crop list parsing
//! - Input validation before requests are sent

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&JsValue::from_str("ecoclime-wasm ready"));
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Score vegetation health; returns the assessment as JSON
#[wasm_bindgen]
pub fn assess_vegetation_health(
    temperature: f64,
    humidity: f64,
    rainfall: f64,
) -> Result<String, JsValue> {
    to_json(&assess_vegetation(temperature, humidity, rainfall))
}

/// Vegetation score only
#[wasm_bindgen]
pub fn vegetation_score(temperature: f64, humidity: f64, rainfall: f64) -> u8 {
    assess_vegetation(temperature, humidity, rainfall).score
}

/// Status name for a score, e.g. "Good"
#[wasm_bindgen]
pub fn vegetation_status(score: u8) -> String {
    VegetationStatus::from_score(score).to_string()
}

/// Illustration for the status of a score
#[wasm_bindgen]
pub fn vegetation_status_image(score: u8) -> String {
    VegetationStatus::from_score(score).image_url().to_string()
}

/// Evaluate alerts for a WeatherReading given as JSON; returns an AlertReport as JSON
#[wasm_bindgen]
pub fn evaluate_weather_alerts(reading_json: &str) -> Result<String, JsValue> {
    let reading: WeatherReading = serde_json::from_str(reading_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid reading JSON: {}", e)))?;

    let vegetation = VegetationAssessment::from_reading(&reading);
    to_json(&evaluate_alerts(&reading, &vegetation))
}

fn alert_reason_list(temperature: f64, humidity: i32, rainfall: f64) -> Vec<String> {
    let reading = WeatherReading {
        temperature_celsius: temperature,
        humidity_percent: humidity,
        wind_speed_kph: 0.0,
        rainfall_mm_1h: rainfall,
        condition_text: String::new(),
        location_label: String::new(),
        coordinates: GpsCoordinates::new(0.0, 0.0),
    };
    let vegetation = VegetationAssessment::from_reading(&reading);
    evaluate_alerts(&reading, &vegetation).reasons
}

/// Triggered alert reasons, in rule order
#[wasm_bindgen]
pub fn alert_reasons(temperature: f64, humidity: i32, rainfall: f64) -> js_sys::Array {
    alert_reason_list(temperature, humidity, rainfall)
        .into_iter()
        .map(|reason| JsValue::from_str(&reason))
        .collect()
}

/// Image URL for a crop name
#[wasm_bindgen]
pub fn crop_image(name: &str) -> String {
    crop_image_for(name).to_string()
}

/// Parse a free-text crop list into crop cards (JSON array)
#[wasm_bindgen]
pub fn parse_crop_list(text: &str) -> Result<String, JsValue> {
    to_json(&parse_crop_details(text))
}

/// Check a place name before searching
#[wasm_bindgen]
pub fn is_valid_place(place: &str) -> bool {
    validate_place_query(place).is_ok()
}

/// Check a map point before requesting its weather
#[wasm_bindgen]
pub fn is_valid_point(latitude: f64, longitude: f64) -> bool {
    validate_coordinates(&GpsCoordinates::new(latitude, longitude)).is_ok()
}

/// Coordinates as shown when no address is known
#[wasm_bindgen]
pub fn format_point(latitude: f64, longitude: f64) -> String {
    GpsCoordinates::new(latitude, longitude).format_fixed(5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vegetation_exports() {
        assert_eq!(vegetation_score(25.0, 60.0, 10.0), 75);
        assert_eq!(vegetation_status(75), "Good");
        assert_eq!(vegetation_status(80), "Excellent");
        assert_eq!(vegetation_status(39), "Poor");

        let json = assess_vegetation_health(40.0, 95.0, 80.0).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["score"], 30);
        assert_eq!(value["status"], "Poor");
    }

    #[test]
    fn test_alert_reason_order() {
        assert_eq!(
            alert_reason_list(2.0, 95, 60.0),
            vec![
                "Temperature is too low (<5°C)",
                "Humidity is too high (>90%)",
                "Heavy rainfall (>50mm/hr)",
                "Vegetation health is poor",
            ]
        );
        assert!(alert_reason_list(22.0, 60, 0.0).is_empty());
    }

    #[test]
    fn test_evaluate_weather_alerts_json() {
        let reading = r#"{
            "temperature_celsius": 38.0,
            "humidity_percent": 45,
            "wind_speed_kph": 12.0,
            "rainfall_mm_1h": 0.0,
            "condition_text": "clear sky",
            "location_label": "Nagpur, IN",
            "coordinates": {"latitude": 21.14, "longitude": 79.08}
        }"#;
        let report: AlertReport =
            serde_json::from_str(&evaluate_weather_alerts(reading).unwrap()).unwrap();
        assert!(report.hazardous);
        assert_eq!(report.reasons, vec!["Temperature is too high (>35°C)"]);
    }

    #[test]
    fn test_validation_exports() {
        assert!(is_valid_place("Indore"));
        assert!(!is_valid_place(""));
        assert!(is_valid_point(-45.0, 170.0));
        assert!(!is_valid_point(0.0, 181.0));
        assert_eq!(format_point(19.076, 72.8777), "19.07600, 72.87770");
    }

    #[test]
    fn test_crop_exports() {
        let cards: Vec<CropCard> =
            serde_json::from_str(&parse_crop_list("1. Rice: kharif\n2. Gram: rabi").unwrap())
                .unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(crop_image("Rice"), cards[0].image);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn alert_reasons_array() {
        let reasons = alert_reasons(36.0, 50, 0.0);
        assert_eq!(reasons.length(), 1);
        assert_eq!(
            reasons.get(0).as_string().as_deref(),
            Some("Temperature is too high (>35°C)")
        );
    }
}
