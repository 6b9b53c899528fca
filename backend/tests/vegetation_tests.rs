//! Vegetation assessment tests
//!
//! The heuristic estimator is exercised through the dashboard reading path;
//! the companion override is checked against a mock backend.

mod common;

use common::test_state;
use ecoclime_backend::services::VegetationService;
use proptest::prelude::*;
use serde_json::json;
use shared::{
    AssessmentSource, GpsCoordinates, Recommendation, VegetationAssessment, VegetationStatus,
    WeatherReading,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn reading(temperature: f64, humidity: i32, rainfall: f64) -> WeatherReading {
    WeatherReading {
        temperature_celsius: temperature,
        humidity_percent: humidity,
        wind_speed_kph: 10.0,
        rainfall_mm_1h: rainfall,
        condition_text: "clear sky".to_string(),
        location_label: "Nashik, IN".to_string(),
        coordinates: GpsCoordinates::new(19.99, 73.79),
    }
}

#[tokio::test]
async fn companion_score_replaces_heuristic() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/vegetation"))
        .and(body_json(json!({ "location": "Nashik, IN" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "score": 83,
            "status": "Excellent",
            "recommendations": ["Maintain current irrigation", "Scout for aphids"]
        })))
        .mount(&server)
        .await;

    let state = test_state(&server.uri());
    let assessment = VegetationService::new(state.companion.clone())
        .assess(&reading(22.0, 60, 2.0))
        .await;

    assert_eq!(assessment.source, AssessmentSource::Companion);
    assert_eq!(assessment.score, 83);
    assert_eq!(assessment.status, VegetationStatus::Excellent);
    assert_eq!(
        assessment.recommendation,
        Recommendation::Many(vec![
            "Maintain current irrigation".to_string(),
            "Scout for aphids".to_string()
        ])
    );
}

#[tokio::test]
async fn companion_score_is_clamped_and_restatused() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/vegetation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "score": 140,
            "status": "Poor",
            "recommendations": []
        })))
        .mount(&server)
        .await;

    let state = test_state(&server.uri());
    let assessment = VegetationService::new(state.companion.clone())
        .assess(&reading(22.0, 60, 2.0))
        .await;

    assert_eq!(assessment.score, 100);
    assert_eq!(assessment.status, VegetationStatus::Excellent);
    assert_eq!(
        assessment.recommendation,
        Recommendation::Single("Optimal growing conditions detected".to_string())
    );
}

#[tokio::test]
async fn companion_failure_keeps_heuristic() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/vegetation"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let state = test_state(&server.uri());
    let hot_dry = reading(35.0, 25, 0.0);
    let assessment = VegetationService::new(state.companion.clone())
        .assess(&hot_dry)
        .await;

    assert_eq!(assessment, VegetationAssessment::from_reading(&hot_dry));
    assert_eq!(assessment.source, AssessmentSource::Heuristic);
    assert_eq!(assessment.score, 15);
    assert_eq!(assessment.status, VegetationStatus::Poor);
}

proptest! {
    /// Readings map onto the estimator with humidity taken as a whole percent
    #[test]
    fn prop_reading_matches_estimator(
        temp in -20.0f64..50.0,
        humidity in 0i32..=100,
        rain in 0.0f64..120.0,
    ) {
        let from_reading = VegetationAssessment::from_reading(&reading(temp, humidity, rain));
        let direct = shared::assess_vegetation(temp, humidity as f64, rain);
        prop_assert_eq!(from_reading, direct);
    }

    /// Externally supplied scores always land in range with a matching status
    #[test]
    fn prop_companion_scores_respect_partition(score in -500i64..500) {
        let assessment = VegetationAssessment::from_score(score, Vec::new(), AssessmentSource::Companion);
        prop_assert!(assessment.score <= 100);
        prop_assert_eq!(assessment.status, VegetationStatus::from_score(assessment.score));
    }
}
