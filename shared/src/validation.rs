//! Validation utilities for EcoClime requests
//!
//! Weather values themselves are never validated; these checks only guard
//! user-supplied queries before they are sent upstream.

use crate::types::GpsCoordinates;

pub const MAX_PLACE_QUERY_LEN: usize = 200;
pub const MAX_CHAT_MESSAGE_LEN: usize = 4000;

// ============================================================================
// Location Validations
// ============================================================================

/// Validate a free-text place name
pub fn validate_place_query(place: &str) -> Result<(), &'static str> {
    let place = place.trim();
    if place.is_empty() {
        return Err("Place name must not be empty");
    }
    if place.chars().count() > MAX_PLACE_QUERY_LEN {
        return Err("Place name is too long");
    }
    Ok(())
}

/// Validate latitude and longitude ranges
pub fn validate_coordinates(coords: &GpsCoordinates) -> Result<(), &'static str> {
    if !coords.latitude.is_finite() || !coords.longitude.is_finite() {
        return Err("Coordinates must be finite numbers");
    }
    if !(-90.0..=90.0).contains(&coords.latitude) {
        return Err("Latitude must be between -90 and 90");
    }
    if !(-180.0..=180.0).contains(&coords.longitude) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

// ============================================================================
// Chat Validations
// ============================================================================

/// Validate a chat message before it is sent to the assistant
pub fn validate_chat_message(message: &str) -> Result<(), &'static str> {
    let message = message.trim();
    if message.is_empty() {
        return Err("Message must not be empty");
    }
    if message.chars().count() > MAX_CHAT_MESSAGE_LEN {
        return Err("Message is too long");
    }
    Ok(())
}
