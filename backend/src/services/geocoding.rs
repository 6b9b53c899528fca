//! Address lookup for the registration location picker

use serde::Serialize;
use shared::GpsCoordinates;

use crate::external::nominatim::COORDINATE_PRECISION;
use crate::external::NominatimClient;

#[derive(Clone)]
pub struct GeocodingService {
    client: NominatimClient,
}

/// Address resolved for a point
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReverseAddress {
    pub address: String,
    pub coordinates: GpsCoordinates,
}

impl GeocodingService {
    pub fn new(client: NominatimClient) -> Self {
        Self { client }
    }

    /// Best-effort address for a point; never fails
    pub async fn address(&self, coords: GpsCoordinates) -> ReverseAddress {
        let address = match self.client.reverse(coords).await {
            Ok(place) => place.format_address(coords),
            Err(e) => {
                tracing::warn!("Reverse geocoding failed for {}: {}", coords, e);
                coords.format_fixed(COORDINATE_PRECISION)
            }
        };

        ReverseAddress {
            address,
            coordinates: coords,
        }
    }
}
