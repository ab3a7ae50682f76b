//! Course catalog.
//!
//! Ordered collection of courses with id lookup. The catalog is read-only
//! input to the generator; it is never mutated by a search.
//!
//! # Duplicates
//! If two courses share an id, lookups return the first one in catalog order.
//! [`validate_catalog`](crate::validation::validate_catalog) reports the clash.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Course, Section};

/// A course catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Course>", into = "Vec<Course>")]
pub struct Catalog {
    courses: Vec<Course>,
    /// Course id → index of its first occurrence.
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from courses, preserving order.
    pub fn from_courses(courses: impl IntoIterator<Item = Course>) -> Self {
        let mut catalog = Self::new();
        for course in courses {
            catalog.push(course);
        }
        catalog
    }

    /// Parses a JSON array of courses.
    ///
    /// ```
    /// use u_timetable::models::Catalog;
    ///
    /// let catalog = Catalog::from_json(r#"[{"id":"X1","name":"Intro","sections":[]}]"#).unwrap();
    /// assert!(catalog.get("X1").is_some());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Adds a course at the end.
    pub fn with_course(mut self, course: Course) -> Self {
        self.push(course);
        self
    }

    fn push(&mut self, course: Course) {
        self.index
            .entry(course.id.clone())
            .or_insert(self.courses.len());
        self.courses.push(course);
    }

    /// Looks up a course by id.
    pub fn get(&self, course_id: &str) -> Option<&Course> {
        self.index.get(course_id).map(|&i| &self.courses[i])
    }

    /// Whether a course id is present.
    pub fn contains(&self, course_id: &str) -> bool {
        self.index.contains_key(course_id)
    }

    /// Sections of a course; empty if the id is unknown.
    pub fn sections_of(&self, course_id: &str) -> &[Section] {
        self.get(course_id)
            .map(|c| c.sections.as_slice())
            .unwrap_or(&[])
    }

    /// Courses in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }

    /// All courses as a slice.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Number of courses (including duplicates).
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog has no courses.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl From<Vec<Course>> for Catalog {
    fn from(courses: Vec<Course>) -> Self {
        Self::from_courses(courses)
    }
}

impl From<Catalog> for Vec<Course> {
    fn from(catalog: Catalog) -> Self {
        catalog.courses
    }
}

impl FromIterator<Course> for Catalog {
    fn from_iter<I: IntoIterator<Item = Course>>(iter: I) -> Self {
        Self::from_courses(iter)
    }
}
