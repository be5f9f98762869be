//! Validated sunrise/sunset boundaries for a single civil date.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

/// Boundary instants that are not in strict chronological order.
///
/// Each variant carries both offending instants so the caller can report
/// exactly which inequality failed. These cases occur near the poles or when
/// an upstream time source misbehaves; they are never retried here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EphemerisError {
    /// Sunset does not fall strictly after sunrise (zero or negative day).
    #[error("sunset {sunset} is not after sunrise {sunrise}")]
    SunsetNotAfterSunrise {
        sunrise: DateTime<Utc>,
        sunset: DateTime<Utc>,
    },
    /// The next sunrise does not fall strictly after sunset (zero or negative night).
    #[error("next sunrise {next_sunrise} is not after sunset {sunset}")]
    NextSunriseNotAfterSunset {
        sunset: DateTime<Utc>,
        next_sunrise: DateTime<Utc>,
    },
}

/// The three boundary instants needed to compute a day's planetary hours:
/// sunrise, sunset and the following day's sunrise.
///
/// Construction goes through [`EphemerisWindow::new`], which guarantees
/// `sunrise < sunset < next_sunrise`. No clock computation happens here; the
/// instants come from an external ephemeris source and are only checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EphemerisWindow {
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
    next_sunrise: DateTime<Utc>,
}

impl EphemerisWindow {
    /// Validate three raw instants into a window.
    pub fn new(
        sunrise: DateTime<Utc>,
        sunset: DateTime<Utc>,
        next_sunrise: DateTime<Utc>,
    ) -> Result<Self, EphemerisError> {
        if sunset <= sunrise {
            return Err(EphemerisError::SunsetNotAfterSunrise { sunrise, sunset });
        }
        if next_sunrise <= sunset {
            return Err(EphemerisError::NextSunriseNotAfterSunset {
                sunset,
                next_sunrise,
            });
        }
        Ok(Self {
            sunrise,
            sunset,
            next_sunrise,
        })
    }

    pub fn sunrise(&self) -> DateTime<Utc> {
        self.sunrise
    }

    pub fn sunset(&self) -> DateTime<Utc> {
        self.sunset
    }

    pub fn next_sunrise(&self) -> DateTime<Utc> {
        self.next_sunrise
    }

    /// Elapsed time from sunrise to sunset. Always positive.
    pub fn day_length(&self) -> TimeDelta {
        self.sunset - self.sunrise
    }

    /// Elapsed time from sunset to the next sunrise. Always positive.
    pub fn night_length(&self) -> TimeDelta {
        self.next_sunrise - self.sunset
    }
}
