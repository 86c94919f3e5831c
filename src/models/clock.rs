//! Wall-clock times without a date.

use std::fmt;

use chrono::{NaiveTime, Timelike};

const CLOCK_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

/// A `HH:MM` time of day taken from the export
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Parse a clock-time, returning `None` for blank or malformed text
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        CLOCK_FORMATS
            .iter()
            .find_map(|format| NaiveTime::parse_from_str(raw, format).ok())
            .map(Self)
    }

    #[must_use]
    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    /// Time of day as fractional hours since midnight
    #[must_use]
    pub fn as_hours(self) -> f64 {
        f64::from(self.0.hour()) + f64::from(self.0.minute()) / 60.0
    }

    /// Hours elapsed from `self` until `later`
    ///
    /// A `later` time that is numerically smaller is taken to fall on the next
    /// day. Intervals spanning more than one midnight cannot be represented.
    #[must_use]
    pub fn hours_until(self, later: Self) -> f64 {
        let elapsed = later.as_hours() - self.as_hours();
        if elapsed < 0.0 { elapsed + 24.0 } else { elapsed }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

/// Format fractional hours as `HH:MM`
#[must_use]
pub fn format_hours_hhmm(hours: f64) -> String {
    let total_minutes = (hours.max(0.0) * 60.0).round() as u64;
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}
