//! Generator configuration.

use serde::{Deserialize, Serialize};

/// What to do with a selected course id that has no catalog entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownCoursePolicy {
    /// Resolve to an empty section list. The course then admits no section,
    /// so the search yields no combinations.
    #[default]
    TreatAsEmpty,
    /// Fail with [`ScheduleError::UnknownCourse`](crate::ScheduleError::UnknownCourse).
    Reject,
}

/// Settings for [`ScheduleGenerator`](super::ScheduleGenerator).
///
/// ```
/// use u_timetable::scheduler::{GeneratorConfig, UnknownCoursePolicy};
///
/// let config = GeneratorConfig::from_json(r#"{"unknown_course_policy":"reject"}"#).unwrap();
/// assert_eq!(config.unknown_course_policy, UnknownCoursePolicy::Reject);
/// assert!(!config.dedup_selection);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Handling of selected ids missing from the catalog.
    pub unknown_course_policy: UnknownCoursePolicy,
    /// Drop repeated course ids (keeping the first) before searching.
    /// Off by default: callers are expected to pass a de-duplicated selection.
    pub dedup_selection: bool,
}

impl GeneratorConfig {
    /// Default configuration (lenient, no de-duplication).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the unknown-course policy.
    pub fn with_unknown_course_policy(mut self, policy: UnknownCoursePolicy) -> Self {
        self.unknown_course_policy = policy;
        self
    }

    /// Enables or disables selection de-duplication.
    pub fn with_dedup_selection(mut self, dedup: bool) -> Self {
        self.dedup_selection = dedup;
        self
    }

    /// Parses a JSON config object. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
