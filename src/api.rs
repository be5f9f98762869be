//! Public API surface for the planetary-hours engine.
//!
//! This file consolidates the types callers need to drive a computation.
//! All types derive Serialize for JSON output.

use serde::{Deserialize, Serialize};

pub use crate::models::{
    EphemerisError, EphemerisWindow, HourKind, HourSpan, PlanetaryHours, Ruler, CHALDEAN_ORDER,
};
pub use crate::services::calculator::compute_planetary_hours;

/// Geographic location (latitude, longitude).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeographicLocation {
    /// Latitude in decimal degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in decimal degrees (-180 to 180)
    pub longitude: f64,
}

impl GeographicLocation {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err("Latitude must be between -90 and 90 degrees".to_string());
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err("Longitude must be between -180 and 180 degrees".to_string());
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}
