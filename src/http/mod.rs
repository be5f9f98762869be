//! HTTP server module for the planetary-hours engine.
//!
//! Exposes the computation as a small axum-based REST API. The handlers stay
//! thin: request parsing and validation here, all business logic in the
//! service layer, the ephemeris source behind the shared application state.

#[cfg(feature = "http-server")]
pub mod handlers;

#[cfg(feature = "http-server")]
pub mod router;

#[cfg(feature = "http-server")]
pub mod state;

#[cfg(feature = "http-server")]
pub mod error;

#[cfg(feature = "http-server")]
pub mod dto;

#[cfg(feature = "http-server")]
pub use router::create_router;

#[cfg(feature = "http-server")]
pub use state::AppState;
