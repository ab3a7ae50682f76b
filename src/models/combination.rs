//! Generated schedule combinations.
//!
//! A combination is one fully-resolved timetable: exactly one section per
//! selected course, in selection order, with no pairwise conflicts.

use serde::{Deserialize, Serialize};

use super::{Day, Section};

/// One chosen section and the course it belongs to.
///
/// Section ids are only unique within a course, so the course id travels
/// with the section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionChoice {
    /// Course the section was drawn from.
    pub course_id: String,
    /// The chosen section.
    pub section: Section,
}

/// A complete, conflict-free assignment of one section per selected course.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleCombination {
    /// Chosen sections, in the order the courses were selected.
    pub choices: Vec<SectionChoice>,
}

impl ScheduleCombination {
    /// Creates a combination from ordered choices.
    pub fn new(choices: Vec<SectionChoice>) -> Self {
        Self { choices }
    }

    /// Chosen sections in selection order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.choices.iter().map(|c| &c.section)
    }

    /// The section chosen for a course.
    pub fn choice_for(&self, course_id: &str) -> Option<&Section> {
        self.choices
            .iter()
            .find(|c| c.course_id == course_id)
            .map(|c| &c.section)
    }

    /// Choices meeting on `day`, earliest start first.
    ///
    /// Ties keep selection order.
    pub fn meetings_on(&self, day: Day) -> Vec<&SectionChoice> {
        let mut on_day: Vec<&SectionChoice> = self
            .choices
            .iter()
            .filter(|c| c.section.schedule.meets_on(day))
            .collect();
        on_day.sort_by_key(|c| c.section.schedule.start());
        on_day
    }

    /// Number of chosen sections.
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// Whether no sections are chosen.
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }
}
