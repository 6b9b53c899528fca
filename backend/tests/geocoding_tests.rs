//! Reverse address lookup tests against a mock Nominatim

mod common;

use common::test_state;
use ecoclime_backend::services::GeocodingService;
use serde_json::json;
use shared::GpsCoordinates;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn address_is_assembled_from_parts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/nominatim/reverse"))
        .and(query_param("format", "json"))
        .and(query_param("zoom", "18"))
        .and(query_param("addressdetails", "1"))
        .and(header("user-agent", "ecoclime-tests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "display_name": "Gangapur Road, Nashik, Maharashtra, 422013, India",
            "address": {
                "road": "Gangapur Road",
                "suburb": "Anandvalli",
                "city": "Nashik",
                "state": "Maharashtra",
                "postcode": "422013",
                "country": "India"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let state = test_state(&server.uri());
    let coords = GpsCoordinates::new(20.0112, 73.7453);
    let result = GeocodingService::new(state.geocoder.clone())
        .address(coords)
        .await;

    assert_eq!(
        result.address,
        "Gangapur Road, Anandvalli, Nashik, Maharashtra, India, 422013"
    );
    assert_eq!(result.coordinates, coords);
}

#[tokio::test]
async fn upstream_error_falls_back_to_coordinates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/nominatim/reverse"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let state = test_state(&server.uri());
    let result = GeocodingService::new(state.geocoder.clone())
        .address(GpsCoordinates::new(12.9716, 77.5946))
        .await;

    assert_eq!(result.address, "12.97160, 77.59460");
}

#[tokio::test]
async fn unparseable_body_falls_back_to_coordinates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/nominatim/reverse"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>busy</html>"))
        .mount(&server)
        .await;

    let state = test_state(&server.uri());
    let result = GeocodingService::new(state.geocoder.clone())
        .address(GpsCoordinates::new(-1.5, 36.25))
        .await;

    assert_eq!(result.address, "-1.50000, 36.25000");
}
