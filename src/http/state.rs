//! Application state for the HTTP server.

use std::sync::Arc;

use crate::ephemeris::EphemerisSource;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Ephemeris source used to resolve windows for lookup requests
    pub ephemeris: Arc<dyn EphemerisSource>,
}

impl AppState {
    /// Create a new application state with the given ephemeris source.
    pub fn new(ephemeris: Arc<dyn EphemerisSource>) -> Self {
        Self { ephemeris }
    }
}
