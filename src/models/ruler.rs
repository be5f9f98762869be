//! Classical planetary rulers and the Chaldean rotation.
//!
//! The seven classical planets rule days and hours in a fixed cyclic order
//! (the Chaldean order, slowest to fastest apparent motion). All rotation
//! arithmetic is done modulo 7 on positions in that order.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// One of the seven classical planets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ruler {
    Saturn,
    Jupiter,
    Mars,
    Sun,
    Venus,
    Mercury,
    Moon,
}

/// The Chaldean order of the seven rulers.
pub const CHALDEAN_ORDER: [Ruler; 7] = [
    Ruler::Saturn,
    Ruler::Jupiter,
    Ruler::Mars,
    Ruler::Sun,
    Ruler::Venus,
    Ruler::Mercury,
    Ruler::Moon,
];

impl Ruler {
    /// Position of this ruler in the Chaldean order (0 through 6).
    pub fn chaldean_index(self) -> usize {
        match self {
            Ruler::Saturn => 0,
            Ruler::Jupiter => 1,
            Ruler::Mars => 2,
            Ruler::Sun => 3,
            Ruler::Venus => 4,
            Ruler::Mercury => 5,
            Ruler::Moon => 6,
        }
    }

    /// Ruler at the given position in the Chaldean rotation.
    ///
    /// Total over all integers: the index is reduced to its non-negative
    /// residue mod 7, so `at_chaldean(k) == at_chaldean(k + 7)` for any `k`.
    pub fn at_chaldean(index: i64) -> Ruler {
        CHALDEAN_ORDER[index.rem_euclid(7) as usize]
    }

    /// The planet governing a civil weekday
    /// (Sunday→Sun, Monday→Moon, ..., Saturday→Saturn).
    pub fn of_weekday(day: Weekday) -> Ruler {
        match day {
            Weekday::Sun => Ruler::Sun,
            Weekday::Mon => Ruler::Moon,
            Weekday::Tue => Ruler::Mars,
            Weekday::Wed => Ruler::Mercury,
            Weekday::Thu => Ruler::Jupiter,
            Weekday::Fri => Ruler::Venus,
            Weekday::Sat => Ruler::Saturn,
        }
    }

    /// Canonical English name of the ruler.
    pub fn name(self) -> &'static str {
        match self {
            Ruler::Saturn => "Saturn",
            Ruler::Jupiter => "Jupiter",
            Ruler::Mars => "Mars",
            Ruler::Sun => "Sun",
            Ruler::Venus => "Venus",
            Ruler::Mercury => "Mercury",
            Ruler::Moon => "Moon",
        }
    }
}

impl fmt::Display for Ruler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error parsing a ruler name at the string boundary.
///
/// Typed [`Ruler`] values form a closed domain, so this can only arise when
/// decoding untrusted text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown planetary ruler: {0:?}")]
pub struct ParseRulerError(pub String);

impl FromStr for Ruler {
    type Err = ParseRulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Saturn" => Ok(Ruler::Saturn),
            "Jupiter" => Ok(Ruler::Jupiter),
            "Mars" => Ok(Ruler::Mars),
            "Sun" => Ok(Ruler::Sun),
            "Venus" => Ok(Ruler::Venus),
            "Mercury" => Ok(Ruler::Mercury),
            "Moon" => Ok(Ruler::Moon),
            other => Err(ParseRulerError(other.to_string())),
        }
    }
}

/// Error parsing a weekday name at the string boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid day name: {0:?}")]
pub struct ParseDayNameError(pub String);

/// Full English name of a weekday ("Sunday", "Monday", ...).
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// Parse one of the seven canonical English day names.
pub fn weekday_from_name(name: &str) -> Result<Weekday, ParseDayNameError> {
    match name {
        "Sunday" => Ok(Weekday::Sun),
        "Monday" => Ok(Weekday::Mon),
        "Tuesday" => Ok(Weekday::Tue),
        "Wednesday" => Ok(Weekday::Wed),
        "Thursday" => Ok(Weekday::Thu),
        "Friday" => Ok(Weekday::Fri),
        "Saturday" => Ok(Weekday::Sat),
        other => Err(ParseDayNameError(other.to_string())),
    }
}
