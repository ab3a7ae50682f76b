//! Descriptive metrics for a generated combination.
//!
//! Summarizes how a timetable fills the week so callers can label or filter
//! combinations themselves. The generator never ranks or reorders results.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total credits | Sum of catalog credits over chosen courses |
//! | Weekly minutes | Σ meeting duration × meeting days |
//! | Days on campus | Days with at least one meeting |
//! | Earliest start / latest end | Bounds over all meetings |
//! | Seats | Sum of seat counts over chosen sections |

use std::collections::BTreeMap;

use crate::models::{Catalog, ClockTime, Day, ScheduleCombination};

/// Weekly load of one combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationStats {
    /// Credit hours across chosen courses (unknown course ids count 0).
    pub total_credits: u32,
    /// Class minutes per week.
    pub weekly_minutes: u32,
    /// Class minutes per day, only days with meetings.
    pub minutes_by_day: BTreeMap<Day, u32>,
    /// Earliest meeting start on any day.
    pub earliest_start: Option<ClockTime>,
    /// Latest meeting end on any day.
    pub latest_end: Option<ClockTime>,
    /// Sum of open seats across chosen sections.
    pub total_seats: u32,
}

impl CombinationStats {
    /// Computes stats for a combination.
    ///
    /// # Arguments
    /// * `combination` - A generated timetable.
    /// * `catalog` - The catalog it was generated from (for credits).
    pub fn calculate(combination: &ScheduleCombination, catalog: &Catalog) -> Self {
        let mut minutes_by_day: BTreeMap<Day, u32> = BTreeMap::new();
        let mut total_credits = 0;
        let mut total_seats = 0;

        for choice in &combination.choices {
            total_credits += catalog.get(&choice.course_id).map_or(0, |c| c.credits);
            total_seats += choice.section.seats;

            let meeting = &choice.section.schedule;
            let duration = u32::from(meeting.window().duration_minutes());
            for &day in meeting.days() {
                *minutes_by_day.entry(day).or_insert(0) += duration;
            }
        }

        let timed = combination
            .choices
            .iter()
            .map(|c| &c.section.schedule)
            .filter(|m| !m.days().is_empty());
        let earliest_start = timed.clone().map(|m| m.start()).min();
        let latest_end = timed.map(|m| m.end()).max();

        Self {
            total_credits,
            weekly_minutes: minutes_by_day.values().sum(),
            minutes_by_day,
            earliest_start,
            latest_end,
            total_seats,
        }
    }

    /// Days with at least one meeting, in week order.
    pub fn days_on_campus(&self) -> Vec<Day> {
        self.minutes_by_day.keys().copied().collect()
    }

    /// Days without any meeting, in week order.
    pub fn free_days(&self) -> Vec<Day> {
        Day::ALL
            .into_iter()
            .filter(|d| !self.minutes_by_day.contains_key(d))
            .collect()
    }
}
