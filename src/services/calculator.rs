//! Planetary-hour computation.
//!
//! Partitions the day (sunrise to sunset) into 12 equal solar hours and the
//! night (sunset to the next sunrise) into 12 equal lunar hours, assigning
//! each a ruler by walking the Chaldean order from the day ruler's position.
//! Pure and deterministic: no I/O, no state, no failure path beyond the
//! window validation that already happened upstream.

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Utc};

use crate::api::GeographicLocation;
use crate::models::{EphemerisWindow, HourKind, HourSpan, PlanetaryHours, Ruler};

/// Boundary of the `i`-th subdivision (0 through 12) of a half starting at
/// `origin` with total length `total`.
///
/// Multiplies before dividing so the twelfth boundary lands exactly on
/// `origin + total`, and every boundary is derived algebraically rather than
/// accumulated from the previous span's end.
fn nth_boundary(origin: DateTime<Utc>, total: TimeDelta, i: i32) -> DateTime<Utc> {
    origin + total * i / 12
}

fn half_spans(
    kind: HourKind,
    origin: DateTime<Utc>,
    total: TimeDelta,
    start_index: i64,
) -> Vec<HourSpan> {
    (0..12)
        .map(|i| HourSpan {
            ordinal: (i + 1) as u8,
            kind,
            start: nth_boundary(origin, total, i),
            end: nth_boundary(origin, total, i + 1),
            ruler: Ruler::at_chaldean(start_index + i as i64),
        })
        .collect()
}

/// Compute the 24 planetary hours for a civil date at a location.
///
/// `date` must already be localized to the location's calendar; no timezone
/// conversion happens here. The solar rotation starts at the day ruler's
/// position in the Chaldean order, and the lunar rotation continues one
/// position past solar hour 12's ruler rather than resetting.
pub fn compute_planetary_hours(
    date: NaiveDate,
    location: GeographicLocation,
    window: &EphemerisWindow,
) -> PlanetaryHours {
    let weekday = date.weekday();
    let day_ruler = Ruler::of_weekday(weekday);
    let start_index = day_ruler.chaldean_index() as i64;

    let solar_hours = half_spans(
        HourKind::Solar,
        window.sunrise(),
        window.day_length(),
        start_index,
    );

    // Continuity rule: the night picks up where the day's rotation stopped.
    let lunar_start = start_index + 12;
    let lunar_hours = half_spans(
        HourKind::Lunar,
        window.sunset(),
        window.night_length(),
        lunar_start,
    );

    PlanetaryHours {
        date,
        weekday,
        day_ruler,
        location,
        solar_hours,
        lunar_hours,
    }
}
