//! Weather API client for fetching weather data
//!
//! Integrates with OpenWeatherMap for place geocoding, reverse geocoding
//! and current conditions.

use reqwest::Client;
use serde::Deserialize;
use shared::{location_label, wind_mps_to_kph, GpsCoordinates, WeatherReading};

use crate::error::{AppError, AppResult};

const SERVICE: &str = "Weather service";

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    geo_base_url: String,
    data_base_url: String,
}

/// A place resolved by the geocoding API
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlace {
    pub label: String,
    pub coordinates: GpsCoordinates,
}

/// OpenWeatherMap geocoding hit (direct and reverse share the shape)
#[derive(Debug, Deserialize)]
struct OWMGeoHit {
    name: String,
    lat: f64,
    lon: f64,
    #[serde(default)]
    country: String,
}

/// OpenWeatherMap API response for current weather
#[derive(Debug, Deserialize)]
struct OWMCurrentResponse {
    #[serde(default)]
    weather: Vec<OWMWeather>,
    main: OWMMain,
    wind: Option<OWMWind>,
    rain: Option<OWMRain>,
}

#[derive(Debug, Deserialize)]
struct OWMWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OWMMain {
    temp: f64,
    humidity: i32,
}

#[derive(Debug, Deserialize)]
struct OWMWind {
    speed: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OWMRain {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
}

impl WeatherClient {
    /// Create a new WeatherClient for the given geocoding and data API bases
    pub fn with_base_urls(
        client: Client,
        api_key: String,
        geo_base_url: String,
        data_base_url: String,
    ) -> Self {
        Self {
            client,
            api_key,
            geo_base_url,
            data_base_url,
        }
    }

    /// Same client with a different API key
    pub fn with_api_key(&self, api_key: String) -> Self {
        Self {
            api_key,
            ..self.clone()
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Resolve a place name to its first geocoding match
    pub async fn geocode(&self, place: &str) -> AppResult<ResolvedPlace> {
        let url = format!("{}/direct", self.geo_base_url);
        let hits: Vec<OWMGeoHit> = self
            .get_json(&url, &[("q", place), ("limit", "1")])
            .await?;

        hits.into_iter()
            .next()
            .map(Self::convert_geo_hit)
            .ok_or_else(|| AppError::PlaceNotFound(place.to_string()))
    }

    /// Resolve coordinates to a "{name}, {country}" label
    pub async fn reverse_geocode(&self, coords: GpsCoordinates) -> AppResult<ResolvedPlace> {
        let url = format!("{}/reverse", self.geo_base_url);
        let lat = coords.latitude.to_string();
        let lon = coords.longitude.to_string();
        let hits: Vec<OWMGeoHit> = self
            .get_json(&url, &[("lat", lat.as_str()), ("lon", lon.as_str()), ("limit", "1")])
            .await?;

        hits.into_iter()
            .next()
            .map(|hit| ResolvedPlace {
                label: location_label(&hit.name, &hit.country),
                coordinates: coords,
            })
            .ok_or_else(|| AppError::PlaceNotFound(coords.to_string()))
    }

    /// Fetch current conditions by GPS coordinates
    pub async fn current_conditions(&self, place: &ResolvedPlace) -> AppResult<WeatherReading> {
        let url = format!("{}/weather", self.data_base_url);
        let lat = place.coordinates.latitude.to_string();
        let lon = place.coordinates.longitude.to_string();
        let body: serde_json::Value = self
            .get_json(
                &url,
                &[("lat", lat.as_str()), ("lon", lon.as_str()), ("units", "metric")],
            )
            .await?;

        // The API reports its own status in `cod`, as a number or a string
        let cod = match body.get("cod") {
            Some(serde_json::Value::Number(n)) => n.as_u64(),
            Some(serde_json::Value::String(s)) => s.parse::<u64>().ok(),
            _ => None,
        };
        if cod != Some(200) {
            return Err(AppError::UpstreamStatus {
                service: SERVICE,
                status: cod.and_then(|c| u16::try_from(c).ok()).unwrap_or(0),
            });
        }

        let data: OWMCurrentResponse =
            serde_json::from_value(body).map_err(|e| AppError::MalformedResponse {
                service: SERVICE,
                detail: e.to_string(),
            })?;

        Ok(Self::convert_current_response(data, place))
    }

    /// Geocode a place name and fetch its current conditions
    pub async fn lookup_place(&self, place: &str) -> AppResult<WeatherReading> {
        let resolved = self.geocode(place).await?;
        tracing::debug!(
            "Resolved '{}' to {} ({})",
            place,
            resolved.label,
            resolved.coordinates
        );
        self.current_conditions(&resolved).await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> AppResult<T> {
        let response = self
            .client
            .get(url)
            .query(params)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| AppError::from_reqwest(SERVICE, e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Weather API error: {} - {}", status, body);
            return Err(AppError::UpstreamStatus {
                service: SERVICE,
                status: status.as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| AppError::MalformedResponse {
                service: SERVICE,
                detail: e.to_string(),
            })
    }

    fn convert_geo_hit(hit: OWMGeoHit) -> ResolvedPlace {
        ResolvedPlace {
            label: location_label(&hit.name, &hit.country),
            coordinates: GpsCoordinates::new(hit.lat, hit.lon),
        }
    }

    /// Convert OpenWeatherMap current response to our format
    fn convert_current_response(data: OWMCurrentResponse, place: &ResolvedPlace) -> WeatherReading {
        let wind_speed = data.wind.and_then(|w| w.speed).unwrap_or(0.0);

        WeatherReading {
            temperature_celsius: data.main.temp,
            humidity_percent: data.main.humidity,
            wind_speed_kph: wind_mps_to_kph(wind_speed),
            rainfall_mm_1h: data.rain.and_then(|r| r.one_hour).unwrap_or(0.0),
            condition_text: data
                .weather
                .into_iter()
                .next()
                .map(|w| w.description)
                .unwrap_or_default(),
            location_label: place.label.clone(),
            coordinates: place.coordinates,
        }
    }
}
