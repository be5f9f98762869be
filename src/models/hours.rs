//! Computed planetary-hour spans and the aggregate daily result.

use chrono::{DateTime, NaiveDate, Utc, Weekday};
use serde::{Serialize, Serializer};

use super::ruler::{weekday_name, Ruler};
use crate::api::GeographicLocation;

/// Which half of the day a span belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HourKind {
    /// One of the 12 subdivisions of sunrise to sunset.
    Solar,
    /// One of the 12 subdivisions of sunset to the next sunrise.
    Lunar,
}

impl HourKind {
    pub fn label(self) -> &'static str {
        match self {
            HourKind::Solar => "Solar",
            HourKind::Lunar => "Lunar",
        }
    }
}

/// One of the 24 planetary hours of a date.
///
/// Spans within a half share the same length, are contiguous, and tile the
/// half exactly: the first starts at the half's opening boundary and the last
/// ends at its closing boundary. The end instant is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourSpan {
    /// Position within its half, 1 through 12.
    pub ordinal: u8,
    pub kind: HourKind,
    /// Start instant (inclusive).
    pub start: DateTime<Utc>,
    /// End instant (exclusive).
    pub end: DateTime<Utc>,
    pub ruler: Ruler,
}

impl HourSpan {
    /// Whether `instant` falls inside this span (inclusive start, exclusive end).
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

fn serialize_weekday<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(weekday_name(*day))
}

/// Full planetary-hour table for one civil date at one location.
///
/// Immutable once constructed; identical inputs always produce an identical
/// table, so results may be cached by (date, location, window).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetaryHours {
    /// Civil date the table was computed for, already localized by the caller.
    pub date: NaiveDate,
    /// Weekday of the civil date.
    #[serde(serialize_with = "serialize_weekday")]
    pub weekday: Weekday,
    /// The planet governing the whole day.
    pub day_ruler: Ruler,
    pub location: GeographicLocation,
    /// The 12 solar hours, in order, tiling sunrise to sunset.
    pub solar_hours: Vec<HourSpan>,
    /// The 12 lunar hours, in order, tiling sunset to the next sunrise.
    pub lunar_hours: Vec<HourSpan>,
}

impl PlanetaryHours {
    /// The span in progress at `instant`, if any.
    ///
    /// Searches solar hours first, then lunar hours; with valid spans at most
    /// one can contain the instant.
    pub fn span_at(&self, instant: DateTime<Utc>) -> Option<&HourSpan> {
        self.solar_hours
            .iter()
            .chain(self.lunar_hours.iter())
            .find(|span| span.contains(instant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    fn span(start_hour: u32, ordinal: u8) -> HourSpan {
        let start = Utc.with_ymd_and_hms(2024, 3, 10, start_hour, 0, 0).unwrap();
        HourSpan {
            ordinal,
            kind: HourKind::Solar,
            start,
            end: start + TimeDelta::hours(1),
            ruler: Ruler::Sun,
        }
    }

    #[test]
    fn test_span_contains_half_open() {
        let s = span(10, 5);
        assert!(s.contains(s.start));
        assert!(s.contains(s.start + TimeDelta::minutes(30)));
        assert!(!s.contains(s.end));
        assert!(!s.contains(s.start - TimeDelta::seconds(1)));
    }

    #[test]
    fn test_hour_kind_labels() {
        assert_eq!(HourKind::Solar.label(), "Solar");
        assert_eq!(HourKind::Lunar.label(), "Lunar");
    }
}
