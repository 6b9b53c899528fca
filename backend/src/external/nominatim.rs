//! Nominatim reverse geocoding client

use reqwest::Client;
use serde::Deserialize;
use shared::GpsCoordinates;

use crate::error::{AppError, AppResult};

const SERVICE: &str = "Geocoder";

/// Decimal places used when an address falls back to raw coordinates
pub const COORDINATE_PRECISION: usize = 5;

#[derive(Clone)]
pub struct NominatimClient {
    http_client: Client,
    base_url: String,
    user_agent: String,
}

/// Reverse geocoding result
#[derive(Debug, Default, Deserialize)]
pub struct ReversePlace {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub address: AddressDetails,
}

#[derive(Debug, Default, Deserialize)]
pub struct AddressDetails {
    pub house_number: Option<String>,
    pub road: Option<String>,
    pub neighbourhood: Option<String>,
    pub suburb: Option<String>,
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postcode: Option<String>,
}

impl AddressDetails {
    /// Present parts, most specific first
    fn parts(&self) -> Vec<&str> {
        [
            &self.house_number,
            &self.road,
            &self.neighbourhood,
            &self.suburb,
            &self.city,
            &self.town,
            &self.village,
            &self.state,
            &self.country,
            &self.postcode,
        ]
        .into_iter()
        .filter_map(|part| non_empty(part))
        .collect()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl ReversePlace {
    /// Human-readable address for this place.
    ///
    /// Joined address parts, else the display name, else city, state or
    /// country, else the coordinates themselves.
    pub fn format_address(&self, coords: GpsCoordinates) -> String {
        let parts = self.address.parts();
        if !parts.is_empty() {
            return parts.join(", ");
        }

        non_empty(&self.display_name)
            .or_else(|| non_empty(&self.address.city))
            .or_else(|| non_empty(&self.address.state))
            .or_else(|| non_empty(&self.address.country))
            .map(str::to_string)
            .unwrap_or_else(|| coords.format_fixed(COORDINATE_PRECISION))
    }
}

impl NominatimClient {
    pub fn new(http_client: Client, base_url: String, user_agent: String) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent,
        }
    }

    /// Reverse geocode a point at street-level zoom
    pub async fn reverse(&self, coords: GpsCoordinates) -> AppResult<ReversePlace> {
        let url = format!("{}/reverse", self.base_url);
        let lat = coords.latitude.to_string();
        let lon = coords.longitude.to_string();

        let response = self
            .http_client
            .get(&url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .query(&[
                ("format", "json"),
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("zoom", "18"),
                ("addressdetails", "1"),
            ])
            .send()
            .await
            .map_err(|e| AppError::from_reqwest(SERVICE, e))?;

        if !response.status().is_success() {
            return Err(AppError::UpstreamStatus {
                service: SERVICE,
                status: response.status().as_u16(),
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
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords() -> GpsCoordinates {
        GpsCoordinates::new(19.076, 72.8777)
    }

    #[test]
    fn test_address_parts_in_order() {
        let place: ReversePlace = serde_json::from_str(
            r#"{
                "display_name": "ignored",
                "address": {
                    "postcode": "400001",
                    "road": "Marine Drive",
                    "city": "Mumbai",
                    "state": "Maharashtra",
                    "country": "India"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(
            place.format_address(coords()),
            "Marine Drive, Mumbai, Maharashtra, India, 400001"
        );
    }

    #[test]
    fn test_display_name_fallback() {
        let place: ReversePlace =
            serde_json::from_str(r#"{"display_name": "Somewhere, Earth", "address": {}}"#).unwrap();
        assert_eq!(place.format_address(coords()), "Somewhere, Earth");
    }

    #[test]
    fn test_coordinate_fallback() {
        let place: ReversePlace = serde_json::from_str(r#"{"error": "Unable to geocode"}"#).unwrap();
        assert_eq!(place.format_address(coords()), "19.07600, 72.87770");
    }

    #[test]
    fn test_blank_parts_skipped() {
        let place = ReversePlace {
            display_name: None,
            address: AddressDetails {
                road: Some("  ".to_string()),
                village: Some("Ozar".to_string()),
                ..Default::default()
            },
        };
        assert_eq!(place.format_address(coords()), "Ozar");
    }
}
