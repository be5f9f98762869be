//! Alert planning for upcoming planetary hours.
//!
//! Planning is pure: it turns a computed table plus "now" into a list of
//! one-shot alert requests, one per span that has not started yet. Actual
//! delivery (device notification center, message bus) sits behind the
//! [`AlertScheduler`] trait and is supplied by the embedding application.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::formatting::ClockStyle;
use crate::models::{HourSpan, PlanetaryHours};

/// A one-shot alert for a single upcoming planetary hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourAlert {
    /// Millisecond timestamp of the fire instant, doubling as a stable id.
    pub id: i64,
    pub title: String,
    pub body: String,
    /// Instant at which the alert fires: the span's start.
    pub fire_at: DateTime<Utc>,
}

/// Sink that delivers planned alerts.
#[async_trait]
pub trait AlertScheduler: Send + Sync {
    async fn schedule(&self, alert: HourAlert) -> anyhow::Result<()>;
}

fn alert_for(span: &HourSpan, clock: ClockStyle) -> HourAlert {
    HourAlert {
        id: span.start.timestamp_millis(),
        title: format!(
            "{} hour {} - {} hour",
            span.kind.label(),
            span.ordinal,
            span.ruler
        ),
        body: format!(
            "The {} hour begins now and ends at {}",
            span.ruler,
            clock.format(span.end)
        ),
        fire_at: span.start,
    }
}

/// Plan one alert per span that starts after `now`.
///
/// Past and in-progress spans are skipped; an alert for an instant already
/// elapsed would either fire immediately or be dropped by the platform.
pub fn plan_hour_alerts(
    hours: &PlanetaryHours,
    now: DateTime<Utc>,
    clock: ClockStyle,
) -> Vec<HourAlert> {
    hours
        .solar_hours
        .iter()
        .chain(hours.lunar_hours.iter())
        .filter(|span| span.start > now)
        .map(|span| alert_for(span, clock))
        .collect()
}

/// Plan alerts for `hours` and hand each one to the scheduler.
///
/// Returns the number of alerts scheduled. Stops at the first delivery
/// failure; the error is surfaced, never swallowed.
pub async fn schedule_hour_alerts(
    scheduler: &dyn AlertScheduler,
    hours: &PlanetaryHours,
    now: DateTime<Utc>,
    clock: ClockStyle,
) -> anyhow::Result<usize> {
    let alerts = plan_hour_alerts(hours, now, clock);
    for alert in &alerts {
        scheduler.schedule(alert.clone()).await?;
    }
    Ok(alerts.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::GeographicLocation;
    use crate::models::EphemerisWindow;
    use crate::services::calculator::compute_planetary_hours;
    use chrono::{NaiveDate, TimeZone};

    fn sample_hours() -> PlanetaryHours {
        let sunrise = Utc.with_ymd_and_hms(2024, 3, 10, 6, 0, 0).unwrap();
        let sunset = Utc.with_ymd_and_hms(2024, 3, 10, 18, 0, 0).unwrap();
        let next_sunrise = Utc.with_ymd_and_hms(2024, 3, 11, 6, 0, 0).unwrap();
        let window = EphemerisWindow::new(sunrise, sunset, next_sunrise).unwrap();
        compute_planetary_hours(
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            GeographicLocation::new(51.4769, 0.0).unwrap(),
            &window,
        )
    }

    #[test]
    fn test_only_future_spans_planned() {
        let hours = sample_hours();
        // Noon: solar hours 1-7 have started (hour 7 begins at 12:00 exactly).
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let alerts = plan_hour_alerts(&hours, now, ClockStyle::default());

        assert_eq!(alerts.len(), 17);
        for alert in &alerts {
            assert!(alert.fire_at > now);
        }
    }

    #[test]
    fn test_all_spans_planned_before_sunrise() {
        let hours = sample_hours();
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 4, 0, 0).unwrap();
        assert_eq!(plan_hour_alerts(&hours, now, ClockStyle::default()).len(), 24);
    }

    #[test]
    fn test_no_spans_planned_after_window() {
        let hours = sample_hours();
        let now = Utc.with_ymd_and_hms(2024, 3, 11, 7, 0, 0).unwrap();
        assert!(plan_hour_alerts(&hours, now, ClockStyle::default()).is_empty());
    }

    #[test]
    fn test_alert_text_names_ordinal_ruler_and_end() {
        let hours = sample_hours();
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 9, 30, 0).unwrap();
        let alerts = plan_hour_alerts(&hours, now, ClockStyle::TwentyFourHourSeconds);

        // First future span at 10:00 is solar hour 5, ruled by Saturn on a Sunday.
        let first = &alerts[0];
        assert_eq!(first.title, "Solar hour 5 - Saturn hour");
        assert_eq!(first.body, "The Saturn hour begins now and ends at 11:00:00");
        assert_eq!(
            first.fire_at,
            Utc.with_ymd_and_hms(2024, 3, 10, 10, 0, 0).unwrap()
        );
        assert_eq!(first.id, first.fire_at.timestamp_millis());
    }
}
