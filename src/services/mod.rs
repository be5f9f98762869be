//! Service layer for the planetary-hours engine.
//!
//! The calculator is the algorithmic core; formatting and notification
//! planning are the downstream consumers of its result.

pub mod calculator;

pub mod formatting;

pub mod notifications;

pub use calculator::compute_planetary_hours;
pub use formatting::ClockStyle;
pub use notifications::{plan_hour_alerts, schedule_hour_alerts, AlertScheduler, HourAlert};
