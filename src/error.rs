//! Error types.
//!
//! Two layers:
//! - [`TimeError`]: malformed time-model input (day tokens, clock strings,
//!   degenerate intervals). These are caller contract violations caught at
//!   construction, so the search itself never sees them.
//! - [`ScheduleError`]: outcomes the calling layer must tell apart when a
//!   generation yields nothing useful.

use thiserror::Error;

/// Malformed day or time input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    /// Token is neither a long ("Monday") nor a short ("M") weekday name.
    #[error("unknown day token '{0}'")]
    UnknownDay(String),
    /// Not a 24-hour "HH:MM" string.
    #[error("invalid time '{0}', expected 24-hour HH:MM")]
    InvalidTime(String),
    /// Start is not strictly before end.
    #[error("degenerate interval {start}-{end}: start must be before end")]
    DegenerateInterval { start: String, end: String },
}

/// Generation outcomes that produce no usable schedule.
///
/// The `Display` strings are the user-facing messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Zero courses were selected.
    #[error("Please select at least one course")]
    EmptySelection,
    /// Courses were selected but every branch of the search hit a conflict.
    #[error("No possible schedules found! Try selecting different courses or removing some time blocks.")]
    NoFeasibleCombination,
    /// A selected course id has no catalog entry (strict policy only).
    #[error("Course '{0}' is not in the catalog")]
    UnknownCourse(String),
}
