//! Upstream ephemeris boundary.
//!
//! The engine consumes sunrise/sunset/next-sunrise instants; producing them
//! (astronomical computation or a remote service) is an external concern.
//! [`EphemerisSource`] is that seam. [`StaticEphemeris`] is an in-memory
//! source for tests and local development.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::api::GeographicLocation;
use crate::models::{EphemerisError, EphemerisWindow};

/// Error from an ephemeris source.
#[derive(Debug, thiserror::Error)]
pub enum EphemerisSourceError {
    /// No window is known for the requested date.
    #[error("no ephemeris data for {0}")]
    NotFound(NaiveDate),
    /// The upstream supplied instants that fail ordering validation.
    #[error(transparent)]
    Invalid(#[from] EphemerisError),
    /// Transport or provider failure. Retry policy belongs to the caller.
    #[error("ephemeris provider error: {0}")]
    Provider(String),
}

/// Provider of validated ephemeris windows.
///
/// Implementations must return instants in a single absolute time
/// representation so that subtraction yields true elapsed durations.
#[async_trait]
pub trait EphemerisSource: Send + Sync {
    /// The boundary instants for `date` at `location`.
    async fn window_for(
        &self,
        date: NaiveDate,
        location: &GeographicLocation,
    ) -> Result<EphemerisWindow, EphemerisSourceError>;
}

/// In-memory ephemeris source keyed by civil date.
///
/// Location-agnostic: callers seed it with windows already appropriate for
/// the location they query.
#[derive(Debug, Default)]
pub struct StaticEphemeris {
    windows: HashMap<NaiveDate, EphemerisWindow>,
}

impl StaticEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the window for a date, replacing any previous entry.
    pub fn insert(&mut self, date: NaiveDate, window: EphemerisWindow) {
        self.windows.insert(date, window);
    }
}

#[async_trait]
impl EphemerisSource for StaticEphemeris {
    async fn window_for(
        &self,
        date: NaiveDate,
        _location: &GeographicLocation,
    ) -> Result<EphemerisWindow, EphemerisSourceError> {
        self.windows
            .get(&date)
            .copied()
            .ok_or(EphemerisSourceError::NotFound(date))
    }
}
