//! Crop suggestion tests: companion payload shapes and default fallback

mod common;

use common::test_state;
use ecoclime_backend::services::CropService;
use serde_json::json;
use shared::{default_crops, CropSource, DEFAULT_RECOMMENDATION_TEXT};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn companion_names_become_cards() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/crops"))
        .and(body_json(json!({ "location": "Nashik" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "crops": ["Grapes", "Onion", "Rice"] })))
        .expect(1)
        .mount(&server)
        .await;

    let state = test_state(&server.uri());
    let suggestions = CropService::new(state.companion.clone())
        .suggest("Nashik")
        .await
        .unwrap();

    assert_eq!(suggestions.source, CropSource::Companion);
    let names: Vec<_> = suggestions.crops.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Grapes", "Onion", "Rice"]);
    assert!(suggestions.crops.iter().all(|c| !c.image.is_empty()));
}

#[tokio::test]
async fn non_array_crops_give_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/crops"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "error": "no data" })))
        .mount(&server)
        .await;

    let state = test_state(&server.uri());
    let suggestions = CropService::new(state.companion.clone())
        .suggest("Leh")
        .await
        .unwrap();

    assert_eq!(suggestions.source, CropSource::Companion);
    assert!(suggestions.crops.is_empty());
}

#[tokio::test]
async fn companion_failure_gives_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/crops"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let state = test_state(&server.uri());
    let suggestions = CropService::new(state.companion.clone())
        .suggest("Nashik")
        .await
        .unwrap();

    assert_eq!(suggestions.source, CropSource::Default);
    assert_eq!(suggestions.crops, default_crops());
    assert_eq!(suggestions.recommendation_text, DEFAULT_RECOMMENDATION_TEXT);
}

#[tokio::test]
async fn recommendations_use_companion_cards_and_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/crop-recommendations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "crops": [{
                "id": "rice",
                "name": "Rice",
                "description": "Kharif staple",
                "image": "",
                "estimated_profit": "₹52,000",
                "risk_assessment": "2/5"
            }],
            "recommendationText": "Monsoon is early this year."
        })))
        .mount(&server)
        .await;

    let state = test_state(&server.uri());
    let suggestions = CropService::new(state.companion.clone())
        .recommendations()
        .await;

    assert_eq!(suggestions.source, CropSource::Companion);
    assert_eq!(suggestions.recommendation_text, "Monsoon is early this year.");
    assert_eq!(suggestions.crops.len(), 1);
    assert_eq!(suggestions.crops[0].estimated_profit.as_deref(), Some("₹52,000"));
    assert!(!suggestions.crops[0].image.is_empty());
}

#[tokio::test]
async fn empty_recommendations_give_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/crop-recommendations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "crops": [] })))
        .mount(&server)
        .await;

    let state = test_state(&server.uri());
    let suggestions = CropService::new(state.companion.clone())
        .recommendations()
        .await;

    assert_eq!(suggestions.source, CropSource::Default);
    assert_eq!(suggestions.crops.len(), 4);
}

#[tokio::test]
async fn unreachable_recommendations_give_defaults() {
    // No mocks mounted, so every request gets a 404
    let server = MockServer::start().await;
    let state = test_state(&server.uri());
    let suggestions = CropService::new(state.companion.clone())
        .recommendations()
        .await;

    assert_eq!(suggestions.source, CropSource::Default);
}
