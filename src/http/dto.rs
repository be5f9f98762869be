//! Data Transfer Objects for the HTTP API.
//!
//! The computed [`PlanetaryHours`](crate::models::PlanetaryHours) table
//! already serializes and is returned as-is; only the request side needs
//! dedicated types here.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{EphemerisError, EphemerisWindow};

/// Raw boundary instants as supplied by a client. Ordering is validated when
/// converting into an [`EphemerisWindow`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WindowDto {
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
    pub next_sunrise: DateTime<Utc>,
}

impl TryFrom<WindowDto> for EphemerisWindow {
    type Error = EphemerisError;

    fn try_from(dto: WindowDto) -> Result<Self, Self::Error> {
        EphemerisWindow::new(dto.sunrise, dto.sunset, dto.next_sunrise)
    }
}

/// Request body for computing planetary hours from explicit boundaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeHoursRequest {
    /// Civil date, already localized to the location's calendar
    pub date: NaiveDate,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Boundary instants for the date
    pub window: WindowDto,
}

/// Query parameters for the source-backed lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoursQuery {
    /// Civil date, already localized to the location's calendar
    pub date: NaiveDate,
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lng: f64,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
}
