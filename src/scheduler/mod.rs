//! Timetable generation and combination metrics.
//!
//! # Algorithm
//!
//! `ScheduleGenerator` runs an exhaustive depth-first backtracking search:
//! one section per selected course, pruning any branch whose newest section
//! conflicts with an earlier choice or a time block. Every feasible
//! combination is returned, in traversal order.
//!
//! # Outcomes
//!
//! An empty result is a valid answer. Callers that need to tell "nothing
//! selected" from "nothing fits" use `generate_checked`.
//!
//! # Metrics
//!
//! `CombinationStats` summarizes one combination's weekly load.

mod config;
mod generator;
mod stats;

pub use config::{GeneratorConfig, UnknownCoursePolicy};
pub use generator::{generate_schedules, ScheduleGenerator, ScheduleRequest};
pub use stats::CombinationStats;
