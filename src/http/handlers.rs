//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for the actual computation.

use axum::{
    extract::{Query, State},
    Json,
};
use tracing::debug;

use super::dto::{ComputeHoursRequest, HealthResponse, HoursQuery};
use super::error::AppError;
use super::state::AppState;
use crate::api::GeographicLocation;
use crate::models::{EphemerisWindow, PlanetaryHours};
use crate::services::compute_planetary_hours;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
    })
}

/// POST /v1/planetary-hours
///
/// Compute planetary hours from boundary instants supplied in the body.
pub async fn compute_hours(
    Json(request): Json<ComputeHoursRequest>,
) -> HandlerResult<PlanetaryHours> {
    let location = GeographicLocation::new(request.latitude, request.longitude)
        .map_err(AppError::BadRequest)?;
    let window = EphemerisWindow::try_from(request.window)?;

    Ok(Json(compute_planetary_hours(request.date, location, &window)))
}

/// GET /v1/planetary-hours?date=&lat=&lng=
///
/// Resolve the window through the configured ephemeris source, then compute.
pub async fn lookup_hours(
    State(state): State<AppState>,
    Query(query): Query<HoursQuery>,
) -> HandlerResult<PlanetaryHours> {
    let location =
        GeographicLocation::new(query.lat, query.lng).map_err(AppError::BadRequest)?;
    let window = state.ephemeris.window_for(query.date, &location).await?;
    debug!(date = %query.date, "resolved ephemeris window");

    Ok(Json(compute_planetary_hours(query.date, location, &window)))
}
