//! Input validation for catalogs and course selections.
//!
//! Checks structural integrity before generation. Detects:
//! - Duplicate course IDs
//! - Duplicate section IDs within a course
//! - Courses with no sections
//! - Sections that meet on no day
//! - Repeated or unknown course IDs in a selection
//!
//! Validation is advisory. The generator accepts all of the above and
//! simply finds fewer (or no) combinations.

use crate::models::Catalog;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A course offers no sections.
    EmptyCourse,
    /// A section's meeting has an empty day set.
    NoMeetingDays,
    /// A selection names a course that doesn't exist.
    UnknownCourse,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a course catalog.
///
/// Checks:
/// 1. No duplicate course IDs
/// 2. No duplicate section IDs within one course
/// 3. Every course has at least one section
/// 4. Every section meets on at least one day
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
    let mut errors = Vec::new();
    let mut course_ids = HashSet::new();

    for course in catalog.iter() {
        if !course_ids.insert(course.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", course.id),
            ));
        }

        if course.sections.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyCourse,
                format!("Course '{}' has no sections", course.id),
            ));
        }

        let mut section_ids = HashSet::new();
        for section in &course.sections {
            if !section_ids.insert(section.id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!("Duplicate section ID {} in course {}", section.id, course.id),
                ));
            }
            if section.schedule.days().is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NoMeetingDays,
                    format!(
                        "Section '{}' of course '{}' meets on no day",
                        section.id, course.id
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a course selection against a catalog.
///
/// Checks:
/// 1. No course ID is selected twice
/// 2. Every selected ID exists in the catalog
pub fn validate_selection<S: AsRef<str>>(
    selected_course_ids: &[S],
    catalog: &Catalog,
) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for id in selected_course_ids {
        let id = id.as_ref();
        if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Course '{id}' selected more than once"),
            ));
        }
        if !catalog.contains(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownCourse,
                format!("Selected course '{id}' is not in the catalog"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, Meeting, Section};

    fn section(id: &str, days: &[&str]) -> Section {
        Section::new(id, "Staff", Meeting::parse(days, "09:00", "10:15", "TBA").unwrap())
    }

    fn sample_catalog() -> Catalog {
        Catalog::new()
            .with_course(
                Course::new("COP4600", "Operating Systems")
                    .with_section(section("0001", &["Monday", "Wednesday"]))
                    .with_section(section("0002", &["Tuesday", "Thursday"])),
            )
            .with_course(
                Course::new("COT4210", "Discrete Computational Structures")
                    .with_section(section("0001", &["M", "W", "F"])),
            )
    }

    #[test]
    fn test_valid_catalog() {
        assert!(validate_catalog(&sample_catalog()).is_ok());
    }

    #[test]
    fn test_duplicate_course_id() {
        let catalog = sample_catalog()
            .with_course(Course::new("COP4600", "Again").with_section(section("0001", &["F"])));

        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("course")));
    }

    #[test]
    fn test_section_ids_scoped_to_course() {
        // "0001" appears in two courses: fine.
        assert!(validate_catalog(&sample_catalog()).is_ok());

        let catalog = Catalog::new().with_course(
            Course::new("X", "X")
                .with_section(section("0001", &["M"]))
                .with_section(section("0001", &["T"])),
        );
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("section")));
    }

    #[test]
    fn test_empty_course() {
        let catalog = sample_catalog().with_course(Course::new("EMPTY", "Nothing"));
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyCourse));
    }

    #[test]
    fn test_section_without_days() {
        let catalog =
            Catalog::new().with_course(Course::new("ONLINE", "Async").with_section(section("0001", &[])));
        let errors = validate_catalog(&catalog).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::NoMeetingDays);
    }

    #[test]
    fn test_valid_selection() {
        assert!(validate_selection(&["COP4600", "COT4210"], &sample_catalog()).is_ok());
        let none: &[&str] = &[];
        assert!(validate_selection(none, &sample_catalog()).is_ok());
    }

    #[test]
    fn test_selection_errors() {
        let errors =
            validate_selection(&["COP4600", "COP4600", "NOPE"], &sample_catalog()).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownCourse));
    }
}
