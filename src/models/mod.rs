//! Timetable domain models.
//!
//! Immutable value types describing the catalog, the user's blocked time,
//! and the generated timetables, plus the time model that decides whether
//! two weekly slots conflict.
//!
//! # Entity Map
//!
//! | Type | Role |
//! |------|------|
//! | `Course` | Catalog entry with ordered sections |
//! | `Section` | One offering, with a weekly `Meeting` |
//! | `TimeBlock` | User obstruction, conflict-checked like a section |
//! | `Meeting` | Day set + half-open daily `TimeWindow` |
//! | `ScheduleCombination` | One section per selected course, conflict-free |

mod catalog;
mod combination;
mod course;
mod day;
mod meeting;
mod time;
mod time_block;

pub use catalog::Catalog;
pub use combination::{ScheduleCombination, SectionChoice};
pub use course::{Course, Section};
pub use day::{canonical_day, Day};
pub use meeting::{overlaps, Meeting, Timed};
pub use time::{to_minutes, ClockTime, TimeWindow};
pub use time_block::TimeBlock;
