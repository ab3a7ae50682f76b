//! Weekday model.
//!
//! Course meetings are expressed over the five teaching days. Each day has a
//! long name ("Thursday") and a short canonical code ("Th"); catalogs mix the
//! two freely, so both parse to the same [`Day`].
//!
//! # Strictness
//! [`Day::from_str`] rejects anything outside the ten known tokens.
//! [`canonical_day`] is the lenient string-level variant: unknown tokens pass
//! through unchanged.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::TimeError;

/// A teaching day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    /// All days in week order.
    pub const ALL: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    /// Short canonical code: M, T, W, Th, F.
    pub fn short(self) -> &'static str {
        match self {
            Day::Monday => "M",
            Day::Tuesday => "T",
            Day::Wednesday => "W",
            Day::Thursday => "Th",
            Day::Friday => "F",
        }
    }

    /// Long name: Monday .. Friday.
    pub fn long(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }

    /// Zero-based position in the week (Monday = 0).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for Day {
    type Err = TimeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Day::ALL
            .into_iter()
            .find(|d| d.short() == token || d.long() == token)
            .ok_or_else(|| TimeError::UnknownDay(token.to_string()))
    }
}

impl TryFrom<String> for Day {
    type Error = TimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Day> for String {
    fn from(day: Day) -> Self {
        day.long().to_string()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.long())
    }
}

/// Maps a long or short day token to its short canonical form.
///
/// Never fails: an unrecognized token is returned unchanged, so two unknown
/// tokens still compare equal to themselves.
///
/// ```
/// use u_timetable::models::canonical_day;
///
/// assert_eq!(canonical_day("Thursday"), "Th");
/// assert_eq!(canonical_day("Th"), "Th");
/// assert_eq!(canonical_day("Saturday"), "Saturday");
/// ```
pub fn canonical_day(token: &str) -> Cow<'_, str> {
    match token.parse::<Day>() {
        Ok(day) => Cow::Borrowed(day.short()),
        Err(_) => Cow::Borrowed(token),
    }
}
