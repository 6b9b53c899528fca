//! Shared fixtures for integration tests: configuration and app state
//! pointed at a mock upstream server.

#![allow(dead_code)]

use ecoclime_backend::config::{
    AssistantConfig, CompanionConfig, Config, GeocoderConfig, HttpConfig, ServerConfig,
    WeatherConfig,
};
use ecoclime_backend::AppState;
use serde_json::{json, Value};

pub const WEATHER_KEY: &str = "test-owm-key";
pub const ASSISTANT_KEY: &str = "test-assistant-key";

/// Configuration with every upstream routed to `base`
pub fn test_config(base: &str) -> Config {
    Config {
        environment: "test".to_string(),
        server: ServerConfig::default(),
        weather: WeatherConfig {
            api_key: WEATHER_KEY.to_string(),
            geo_base_url: format!("{}/geo/1.0", base),
            data_base_url: format!("{}/data/2.5", base),
        },
        assistant: AssistantConfig {
            api_key: ASSISTANT_KEY.to_string(),
            endpoint: format!("{}/v1beta", base),
            model: "gemini-pro".to_string(),
        },
        companion: CompanionConfig {
            base_url: base.to_string(),
            chat_timeout_secs: 1,
        },
        geocoder: GeocoderConfig {
            base_url: format!("{}/nominatim", base),
            user_agent: "ecoclime-tests".to_string(),
        },
        http: HttpConfig { timeout_secs: 5 },
    }
}

pub fn test_state(base: &str) -> AppState {
    AppState::from_config(test_config(base)).unwrap()
}

/// OpenWeatherMap direct geocoding hit
pub fn geo_hit(name: &str, country: &str, lat: f64, lon: f64) -> Value {
    json!([{ "name": name, "lat": lat, "lon": lon, "country": country }])
}

/// OpenWeatherMap current weather body
pub fn current_weather(temp: f64, humidity: i32, wind_mps: f64, rain_1h: Option<f64>) -> Value {
    let mut body = json!({
        "cod": 200,
        "name": "Nashik",
        "weather": [{ "main": "Clouds", "description": "scattered clouds" }],
        "main": { "temp": temp, "humidity": humidity },
        "wind": { "speed": wind_mps }
    });
    if let Some(rain) = rain_1h {
        body["rain"] = json!({ "1h": rain });
    }
    body
}
