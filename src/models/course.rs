//! Course and section models.
//!
//! A course is a catalog entry offered in one or more sections. Only a
//! section's meeting takes part in conflict checking; names, credits,
//! instructors, and seats are carried through untouched.

use serde::{Deserialize, Serialize};

use super::{Meeting, Timed};

/// A catalog course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course code, unique within a catalog (e.g., "COP4600").
    pub id: String,
    /// Display name.
    pub name: String,
    /// Credit hours.
    #[serde(default)]
    pub credits: u32,
    /// Offered sections, in catalog order.
    pub sections: Vec<Section>,
}

/// One offering of a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section number, unique within its course only (e.g., "0001").
    pub id: String,
    /// Instructor name.
    pub instructor: String,
    /// Seats available.
    #[serde(default)]
    pub seats: u32,
    /// Weekly meeting.
    pub schedule: Meeting,
}

impl Course {
    /// Creates a course with no sections.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            credits: 0,
            sections: Vec::new(),
        }
    }

    /// Sets the credit hours.
    pub fn with_credits(mut self, credits: u32) -> Self {
        self.credits = credits;
        self
    }

    /// Adds a section.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Finds a section by id.
    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }
}

impl Section {
    /// Creates a section.
    pub fn new(id: impl Into<String>, instructor: impl Into<String>, schedule: Meeting) -> Self {
        Self {
            id: id.into(),
            instructor: instructor.into(),
            seats: 0,
            schedule,
        }
    }

    /// Sets the seat count.
    pub fn with_seats(mut self, seats: u32) -> Self {
        self.seats = seats;
        self
    }
}

impl Timed for Section {
    fn meeting(&self) -> &Meeting {
        &self.schedule
    }
}
