//! User-declared blocked time.
//!
//! A time block (work, commute, lunch) has the same shape as a section's
//! meeting plus a reason. For conflict purposes it behaves like a zero-seat
//! synthetic section whose location is the reason.

use serde::{Deserialize, Serialize};

use super::{ClockTime, Day, Meeting, TimeWindow, Timed};
use crate::error::TimeError;

/// A blocked period the generated schedules must avoid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TimeBlockRecord", into = "TimeBlockRecord")]
pub struct TimeBlock {
    schedule: Meeting,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimeBlockRecord {
    #[serde(default)]
    days: Vec<Day>,
    start_time: ClockTime,
    end_time: ClockTime,
    #[serde(default)]
    reason: String,
}

impl TimeBlock {
    /// Creates a block. Fails unless `start < end`.
    pub fn new(
        days: impl IntoIterator<Item = Day>,
        start: ClockTime,
        end: ClockTime,
        reason: impl Into<String>,
    ) -> Result<Self, TimeError> {
        Ok(Self {
            schedule: Meeting::new(days, start, end, reason)?,
        })
    }

    /// Parses day tokens and "HH:MM" times.
    ///
    /// ```
    /// use u_timetable::models::TimeBlock;
    ///
    /// let work = TimeBlock::parse(&["Monday"], "10:00", "12:00", "Work").unwrap();
    /// assert_eq!(work.reason(), "Work");
    /// ```
    pub fn parse<S: AsRef<str>>(
        days: &[S],
        start: &str,
        end: &str,
        reason: impl Into<String>,
    ) -> Result<Self, TimeError> {
        Ok(Self {
            schedule: Meeting::parse(days, start, end, reason)?,
        })
    }

    /// A fresh block: 09:00-10:00 "Break", no days selected yet.
    pub fn default_break() -> Self {
        let window = TimeWindow::from_bounds_unchecked(
            ClockTime::from_minutes_unchecked(9 * 60),
            ClockTime::from_minutes_unchecked(10 * 60),
        );
        Self {
            schedule: Meeting::from_window(Vec::<Day>::new(), window, "Break"),
        }
    }

    /// Why this time is blocked.
    pub fn reason(&self) -> &str {
        self.schedule.location()
    }

    /// Blocked days.
    pub fn days(&self) -> &[Day] {
        self.schedule.days()
    }

    /// Returns the same block covering `days` instead.
    pub fn with_days(self, days: impl IntoIterator<Item = Day>) -> Self {
        let window = self.schedule.window();
        Self {
            schedule: Meeting::from_window(days, window, self.schedule.location()),
        }
    }
}

impl Timed for TimeBlock {
    fn meeting(&self) -> &Meeting {
        &self.schedule
    }
}

impl TryFrom<TimeBlockRecord> for TimeBlock {
    type Error = TimeError;

    fn try_from(r: TimeBlockRecord) -> Result<Self, Self::Error> {
        Self::new(r.days, r.start_time, r.end_time, r.reason)
    }
}

impl From<TimeBlock> for TimeBlockRecord {
    fn from(b: TimeBlock) -> Self {
        Self {
            days: b.schedule.days().to_vec(),
            start_time: b.schedule.start(),
            end_time: b.schedule.end(),
            reason: b.schedule.location().to_string(),
        }
    }
}
