//! Configuration management for the EcoClime server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with ECO__ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// OpenWeatherMap configuration
    pub weather: WeatherConfig,

    /// Generative-language assistant configuration
    pub assistant: AssistantConfig,

    /// Companion ecoclime-api backend configuration
    pub companion: CompanionConfig,

    /// Nominatim reverse geocoder configuration
    pub geocoder: GeocoderConfig,

    /// Shared outbound HTTP settings
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key; may be overridden per request
    pub api_key: String,

    /// Base URL for the geocoding API (`/geo/1.0`)
    pub geo_base_url: String,

    /// Base URL for the weather data API (`/data/2.5`)
    pub data_base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssistantConfig {
    /// Generative-language API key. Empty disables the primary chat path.
    pub api_key: String,

    /// API base, e.g. `https://generativelanguage.googleapis.com/v1beta`
    pub endpoint: String,

    /// Model name used in `models/{model}:generateContent`
    pub model: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CompanionConfig {
    /// Base URL of the companion backend
    pub base_url: String,

    /// Timeout for the fallback chat call, in seconds
    pub chat_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeocoderConfig {
    /// Nominatim base URL
    pub base_url: String,

    /// User-Agent sent to Nominatim (required by its usage policy)
    pub user_agent: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    /// Default timeout for outbound requests, in seconds
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("ECO_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("weather.api_key", "")?
            .set_default("weather.geo_base_url", "https://api.openweathermap.org/geo/1.0")?
            .set_default("weather.data_base_url", "https://api.openweathermap.org/data/2.5")?
            .set_default("assistant.api_key", "")?
            .set_default(
                "assistant.endpoint",
                "https://generativelanguage.googleapis.com/v1beta",
            )?
            .set_default("assistant.model", "gemini-pro")?
            .set_default("companion.base_url", "https://ecoclime-api1.onrender.com")?
            .set_default("companion.chat_timeout_secs", 30)?
            .set_default("geocoder.base_url", "https://nominatim.openstreetmap.org")?
            .set_default(
                "geocoder.user_agent",
                concat!("ecoclime-server/", env!("CARGO_PKG_VERSION")),
            )?
            .set_default("http.timeout_secs", 15)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (ECO_ prefix)
            .add_source(
                Environment::with_prefix("ECO")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl CompanionConfig {
    pub fn chat_timeout(&self) -> Duration {
        Duration::from_secs(self.chat_timeout_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}
