//! Clock formatting policy for rendering span boundaries.
//!
//! The engine keeps instants exact; turning them into human-readable strings
//! is one exchangeable policy applied uniformly to all 24 spans.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How instants are rendered for display and notification text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockStyle {
    /// 24-hour clock, e.g. "18:05".
    TwentyFourHour,
    /// 24-hour clock with seconds, e.g. "18:05:09".
    #[default]
    TwentyFourHourSeconds,
    /// 12-hour clock, e.g. "06:05 PM".
    TwelveHour,
    /// 12-hour clock with seconds, e.g. "06:05:09 PM".
    TwelveHourSeconds,
}

impl ClockStyle {
    /// Render the time-of-day of an instant under this policy.
    pub fn format(self, instant: DateTime<Utc>) -> String {
        let pattern = match self {
            ClockStyle::TwentyFourHour => "%H:%M",
            ClockStyle::TwentyFourHourSeconds => "%H:%M:%S",
            ClockStyle::TwelveHour => "%I:%M %p",
            ClockStyle::TwelveHourSeconds => "%I:%M:%S %p",
        };
        instant.format(pattern).to_string()
    }
}
