//! # Planetary Hours Engine
//!
//! Computes "planetary hours": the traditional division of each day and night
//! into twelve unequal segments, each governed by a classical planet in the
//! Chaldean rotation.
//!
//! Given a civil date, a geographic location, and the three boundary instants
//! (sunrise, sunset, next sunrise), the engine produces 24 labeled time spans
//! with their rulers and the day's overall planetary ruler.
//!
//! ## Architecture
//!
//! - [`api`]: Public DTO types consumed by callers
//! - [`models`]: Rulers, the Chaldean rotation, validated ephemeris windows,
//!   and the computed hour spans
//! - [`services`]: The calculator plus formatting and notification planning
//! - [`ephemeris`]: The upstream boundary that supplies boundary instants
//! - [`http`]: Axum-based REST API (feature `http-server`)
//!
//! The core computation is a pure function: no I/O, no shared state, and
//! identical inputs always yield an identical result.

pub mod api;

pub mod ephemeris;
pub mod models;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
