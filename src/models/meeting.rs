//! Weekly meeting pattern and the conflict predicate.
//!
//! A [`Meeting`] is the recurring slot attached to a section or a blocked
//! period: a set of days plus one daily time window. Two meetings conflict
//! iff they share a day AND their windows overlap (half-open, so touching
//! endpoints are compatible).

use serde::{Deserialize, Serialize};

use super::{ClockTime, Day, TimeWindow};
use crate::error::TimeError;

/// A recurring weekly meeting.
///
/// Invariant: `start < end`. Enforced at construction, including serde.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MeetingRecord", into = "MeetingRecord")]
pub struct Meeting {
    days: Vec<Day>,
    window: TimeWindow,
    location: String,
}

/// Wire shape of a meeting (catalog JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MeetingRecord {
    days: Vec<Day>,
    start_time: ClockTime,
    end_time: ClockTime,
    #[serde(default)]
    location: String,
}

impl Meeting {
    /// Creates a meeting. Duplicate days are collapsed, first occurrence wins.
    ///
    /// Fails with [`TimeError::DegenerateInterval`] unless `start < end`.
    pub fn new(
        days: impl IntoIterator<Item = Day>,
        start: ClockTime,
        end: ClockTime,
        location: impl Into<String>,
    ) -> Result<Self, TimeError> {
        let window = TimeWindow::new(start, end)?;
        Ok(Self::from_window(days, window, location))
    }

    /// Builds from an already-checked window.
    pub(crate) fn from_window(
        days: impl IntoIterator<Item = Day>,
        window: TimeWindow,
        location: impl Into<String>,
    ) -> Self {
        let mut unique = Vec::new();
        for day in days {
            if !unique.contains(&day) {
                unique.push(day);
            }
        }
        Self {
            days: unique,
            window,
            location: location.into(),
        }
    }

    /// Parses day tokens (long or short) and "HH:MM" times.
    ///
    /// ```
    /// use u_timetable::models::{Day, Meeting};
    ///
    /// let m = Meeting::parse(&["Monday", "W"], "10:30", "11:45", "CB2 101").unwrap();
    /// assert_eq!(m.days(), &[Day::Monday, Day::Wednesday]);
    /// assert!(Meeting::parse(&["Sat"], "10:30", "11:45", "").is_err());
    /// ```
    pub fn parse<S: AsRef<str>>(
        days: &[S],
        start: &str,
        end: &str,
        location: impl Into<String>,
    ) -> Result<Self, TimeError> {
        let days = days
            .iter()
            .map(|d| d.as_ref().parse::<Day>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(days, start.parse()?, end.parse()?, location)
    }

    /// Days this meeting occurs on, in the order given.
    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// Daily time window.
    pub fn window(&self) -> TimeWindow {
        self.window
    }

    /// Start time.
    pub fn start(&self) -> ClockTime {
        self.window.start()
    }

    /// End time (exclusive).
    pub fn end(&self) -> ClockTime {
        self.window.end()
    }

    /// Room or label.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Whether this meeting occurs on `day`.
    pub fn meets_on(&self, day: Day) -> bool {
        self.days.contains(&day)
    }

    /// Whether the two day sets intersect.
    pub fn shares_day(&self, other: &Self) -> bool {
        self.days.iter().any(|d| other.meets_on(*d))
    }

    /// Whether two meetings conflict.
    #[inline]
    pub fn conflicts_with(&self, other: &Self) -> bool {
        self.shares_day(other) && self.window.overlaps(&other.window)
    }

    /// Total minutes per week (duration × meeting days).
    pub fn weekly_minutes(&self) -> u32 {
        u32::from(self.window.duration_minutes()) * self.days.len() as u32
    }
}

impl TryFrom<MeetingRecord> for Meeting {
    type Error = TimeError;

    fn try_from(r: MeetingRecord) -> Result<Self, Self::Error> {
        Self::new(r.days, r.start_time, r.end_time, r.location)
    }
}

impl From<Meeting> for MeetingRecord {
    fn from(m: Meeting) -> Self {
        Self {
            days: m.days,
            start_time: m.window.start(),
            end_time: m.window.end(),
            location: m.location,
        }
    }
}

/// Anything that occupies a recurring weekly slot.
///
/// Sections and time blocks both implement this so the search can test
/// them against each other uniformly.
pub trait Timed {
    /// The recurring slot.
    fn meeting(&self) -> &Meeting;
}

impl Timed for Meeting {
    fn meeting(&self) -> &Meeting {
        self
    }
}

impl<T: Timed + ?Sized> Timed for &T {
    fn meeting(&self) -> &Meeting {
        (**self).meeting()
    }
}

/// Whether two timed items conflict.
///
/// False immediately when the day sets are disjoint; otherwise
/// `start(a) < end(b) && start(b) < end(a)`.
pub fn overlaps<A: Timed + ?Sized, B: Timed + ?Sized>(a: &A, b: &B) -> bool {
    a.meeting().conflicts_with(b.meeting())
}
