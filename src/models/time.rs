//! Wall-clock times and half-open time windows.
//!
//! # Time Model
//! Meetings repeat weekly, so a time is just minutes since midnight.
//! No dates, time zones, or seconds.
//!
//! # Overlap Rule
//! Windows are half-open `[start, end)`. Two windows that merely touch
//! (one ends at 10:00, the next starts at 10:00) do not overlap.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TimeError;

const MINUTES_PER_DAY: u16 = 24 * 60;

/// A time of day, stored as minutes since midnight (0..=1439).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    /// Creates a time from hours (0..=23) and minutes (0..=59).
    pub fn new(hours: u16, minutes: u16) -> Result<Self, TimeError> {
        if hours >= 24 || minutes >= 60 {
            return Err(TimeError::InvalidTime(format!("{hours}:{minutes:02}")));
        }
        Ok(Self(hours * 60 + minutes))
    }

    /// Creates a time from minutes since midnight.
    pub fn from_minutes(minutes: u16) -> Result<Self, TimeError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(TimeError::InvalidTime(format!("{minutes} minutes")));
        }
        Ok(Self(minutes))
    }

    /// Caller guarantees `minutes < 1440`.
    pub(crate) const fn from_minutes_unchecked(minutes: u16) -> Self {
        Self(minutes)
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Hour component (0..=23).
    #[inline]
    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    /// Minute component (0..=59).
    #[inline]
    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// 12-hour display form, e.g. "1:30 PM".
    ///
    /// Midnight and noon print as 12.
    pub fn format_12h(self) -> String {
        let period = if self.hour() >= 12 { "PM" } else { "AM" };
        let display_hour = match self.hour() % 12 {
            0 => 12,
            h => h,
        };
        format!("{display_hour}:{:02} {period}", self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TimeError::InvalidTime(s.to_string());

        let (h, m) = s.split_once(':').ok_or_else(invalid)?;
        let digits = |part: &str, max_len: usize| {
            !part.is_empty() && part.len() <= max_len && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !digits(h, 2) || m.len() != 2 || !digits(m, 2) {
            return Err(invalid());
        }

        let hours: u16 = h.parse().map_err(|_| invalid())?;
        let minutes: u16 = m.parse().map_err(|_| invalid())?;
        Self::new(hours, minutes).map_err(|_| invalid())
    }
}

impl TryFrom<String> for ClockTime {
    type Error = TimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parses a 24-hour "HH:MM" string into minutes since midnight.
///
/// Malformed input is a caller contract violation and comes back as
/// [`TimeError::InvalidTime`].
///
/// ```
/// use u_timetable::models::to_minutes;
///
/// assert_eq!(to_minutes("10:30").unwrap(), 630);
/// assert!(to_minutes("ten thirty").is_err());
/// ```
pub fn to_minutes(time: &str) -> Result<u16, TimeError> {
    time.parse::<ClockTime>().map(ClockTime::minutes)
}

/// A time interval [start, end) within one day.
///
/// Half-open interval: includes start, excludes end. Never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: ClockTime,
    end: ClockTime,
}

impl TimeWindow {
    /// Creates a window. Fails unless `start < end`.
    pub fn new(start: ClockTime, end: ClockTime) -> Result<Self, TimeError> {
        if start >= end {
            return Err(TimeError::DegenerateInterval {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Caller guarantees `start < end`.
    pub(crate) const fn from_bounds_unchecked(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    /// Interval start (inclusive).
    #[inline]
    pub fn start(&self) -> ClockTime {
        self.start
    }

    /// Interval end (exclusive).
    #[inline]
    pub fn end(&self) -> ClockTime {
        self.end
    }

    /// Duration of this window in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes() - self.start.minutes()
    }

    /// Whether a time falls within this window.
    #[inline]
    pub fn contains(&self, time: ClockTime) -> bool {
        time >= self.start && time < self.end
    }

    /// Whether two windows overlap. Touching endpoints do not.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start.format_12h(), self.end.format_12h())
    }
}
