//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// GPS coordinates in decimal degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsCoordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Render as "lat, lon" with a fixed number of decimals
    pub fn format_fixed(&self, precision: usize) -> String {
        format!(
            "{:.prec$}, {:.prec$}",
            self.latitude,
            self.longitude,
            prec = precision
        )
    }
}

impl std::fmt::Display for GpsCoordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format_fixed(4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_fixed() {
        let coords = GpsCoordinates::new(19.076, 72.8777);
        assert_eq!(coords.format_fixed(5), "19.07600, 72.87770");
        assert_eq!(coords.to_string(), "19.0760, 72.8777");
    }

    #[test]
    fn test_format_negative() {
        let coords = GpsCoordinates::new(-33.8688, 151.2093);
        assert_eq!(coords.format_fixed(2), "-33.87, 151.21");
    }
}
