//! Exhaustive conflict-free timetable enumeration.
//!
//! # Algorithm
//!
//! Depth-first backtracking over the selected courses, in selection order.
//! At depth `i`, each section of course `i` (catalog order) is tested against
//! every section already chosen at depths `0..i` and against every time
//! block. A section with no conflict is pushed and the search descends; a
//! path reaching depth `n` is emitted as one combination. The whole tree is
//! explored, so every feasible combination is returned in traversal order.
//!
//! # Complexity
//! O(∏ sᵢ · n · (n + b)) worst case, where sᵢ = sections of course i,
//! n = selected courses, b = time blocks.
//!
//! # Determinism
//! No randomness and no state outlives a call: identical inputs give an
//! identical result sequence.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, trace, warn};

use super::{GeneratorConfig, UnknownCoursePolicy};
use crate::error::ScheduleError;
use crate::models::{overlaps, Catalog, ScheduleCombination, Section, SectionChoice, TimeBlock};

/// Caller-supplied generation parameters.
///
/// ```
/// use u_timetable::scheduler::ScheduleRequest;
///
/// let json = r#"{
///     "selectedCourseIds": ["COP4600"],
///     "timeBlocks": [{"days": ["Monday"], "startTime": "10:00", "endTime": "12:00", "reason": "Work"}]
/// }"#;
/// let request: ScheduleRequest = serde_json::from_str(json).unwrap();
/// assert_eq!(request.time_blocks.len(), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    /// Course ids, one section each will be chosen, in this order.
    pub selected_course_ids: Vec<String>,
    /// Periods every combination must avoid.
    #[serde(default)]
    pub time_blocks: Vec<TimeBlock>,
}

impl ScheduleRequest {
    /// Creates a request for the given course ids.
    pub fn new<S: Into<String>>(course_ids: impl IntoIterator<Item = S>) -> Self {
        Self {
            selected_course_ids: course_ids.into_iter().map(Into::into).collect(),
            time_blocks: Vec::new(),
        }
    }

    /// Adds a time block.
    pub fn with_time_block(mut self, block: TimeBlock) -> Self {
        self.time_blocks.push(block);
        self
    }
}

/// One level of the search tree.
#[derive(Debug)]
struct CourseSlot<'a> {
    course_id: &'a str,
    sections: &'a [Section],
}

/// Exhaustive schedule generator.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Catalog, Course, Meeting, Section, TimeBlock};
/// use u_timetable::scheduler::ScheduleGenerator;
///
/// let catalog = Catalog::new().with_course(
///     Course::new("COP4600", "Operating Systems")
///         .with_section(Section::new("0001", "Dr. Smith",
///             Meeting::parse(&["Monday", "Wednesday"], "10:30", "11:45", "CB2 101").unwrap()))
///         .with_section(Section::new("0002", "Dr. Johnson",
///             Meeting::parse(&["Tuesday", "Thursday"], "13:30", "14:45", "ENG2 102").unwrap())),
/// );
/// let work = TimeBlock::parse(&["Monday"], "10:00", "12:00", "Work").unwrap();
///
/// let generator = ScheduleGenerator::new();
/// let combos = generator.generate(&["COP4600"], &catalog, &[work]).unwrap();
/// assert_eq!(combos.len(), 1);
/// assert_eq!(combos[0].choices[0].section.id, "0002");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleGenerator {
    config: GeneratorConfig,
}

impl ScheduleGenerator {
    /// Creates a generator with the default (lenient) configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with the given configuration.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Enumerates every conflict-free combination.
    ///
    /// An empty selection yields an empty result. Fails only under
    /// [`UnknownCoursePolicy::Reject`] when a selected id is not in the catalog.
    pub fn generate<S: AsRef<str>>(
        &self,
        selected_course_ids: &[S],
        catalog: &Catalog,
        time_blocks: &[TimeBlock],
    ) -> Result<Vec<ScheduleCombination>, ScheduleError> {
        let slots = self.resolve(selected_course_ids, catalog)?;
        Ok(enumerate(&slots, time_blocks))
    }

    /// Like [`generate`](Self::generate), but reports empty outcomes as errors.
    ///
    /// - no courses selected → [`ScheduleError::EmptySelection`]
    /// - courses selected, nothing feasible → [`ScheduleError::NoFeasibleCombination`]
    pub fn generate_checked<S: AsRef<str>>(
        &self,
        selected_course_ids: &[S],
        catalog: &Catalog,
        time_blocks: &[TimeBlock],
    ) -> Result<Vec<ScheduleCombination>, ScheduleError> {
        if selected_course_ids.is_empty() {
            return Err(ScheduleError::EmptySelection);
        }
        let combinations = self.generate(selected_course_ids, catalog, time_blocks)?;
        if combinations.is_empty() {
            return Err(ScheduleError::NoFeasibleCombination);
        }
        Ok(combinations)
    }

    /// Generates from a request container.
    pub fn generate_request(
        &self,
        request: &ScheduleRequest,
        catalog: &Catalog,
    ) -> Result<Vec<ScheduleCombination>, ScheduleError> {
        self.generate(&request.selected_course_ids, catalog, &request.time_blocks)
    }

    /// Counts feasible combinations without materializing them.
    pub fn count<S: AsRef<str>>(
        &self,
        selected_course_ids: &[S],
        catalog: &Catalog,
        time_blocks: &[TimeBlock],
    ) -> Result<usize, ScheduleError> {
        let slots = self.resolve(selected_course_ids, catalog)?;
        if slots.is_empty() {
            return Ok(0);
        }
        let mut count = 0;
        let mut partial = Vec::with_capacity(slots.len());
        Search::new(&slots, time_blocks).walk(0, &mut partial, &mut |_| count += 1);
        Ok(count)
    }

    /// Maps selected ids to their section lists, applying the configured
    /// unknown-course and de-duplication policies.
    fn resolve<'a, S: AsRef<str>>(
        &self,
        selected_course_ids: &'a [S],
        catalog: &'a Catalog,
    ) -> Result<Vec<CourseSlot<'a>>, ScheduleError> {
        let mut seen = HashSet::new();
        let mut slots = Vec::with_capacity(selected_course_ids.len());

        for id in selected_course_ids {
            let course_id = id.as_ref();
            if self.config.dedup_selection && !seen.insert(course_id) {
                continue;
            }

            let sections: &[Section] = match catalog.get(course_id) {
                Some(course) => course.sections.as_slice(),
                None => match self.config.unknown_course_policy {
                    UnknownCoursePolicy::Reject => {
                        return Err(ScheduleError::UnknownCourse(course_id.to_string()));
                    }
                    UnknownCoursePolicy::TreatAsEmpty => {
                        warn!(
                            course_id = %course_id,
                            "selected course not in catalog, treating as no sections"
                        );
                        &[]
                    }
                },
            };
            slots.push(CourseSlot { course_id, sections });
        }

        Ok(slots)
    }
}

/// Enumerates every conflict-free combination, resolving unknown course ids
/// to empty section lists.
///
/// Returns an empty sequence when `selected_course_ids` is empty or when no
/// combination is feasible; use
/// [`ScheduleGenerator::generate_checked`] to tell the two apart.
///
/// ```
/// use u_timetable::models::Catalog;
/// use u_timetable::generate_schedules;
///
/// let none: &[&str] = &[];
/// assert!(generate_schedules(none, &Catalog::new(), &[]).is_empty());
/// ```
pub fn generate_schedules<S: AsRef<str>>(
    selected_course_ids: &[S],
    catalog: &Catalog,
    time_blocks: &[TimeBlock],
) -> Vec<ScheduleCombination> {
    // The lenient policy never fails.
    ScheduleGenerator::new()
        .generate(selected_course_ids, catalog, time_blocks)
        .unwrap_or_default()
}

fn enumerate(slots: &[CourseSlot<'_>], time_blocks: &[TimeBlock]) -> Vec<ScheduleCombination> {
    if slots.is_empty() {
        return Vec::new();
    }

    debug!(
        courses = slots.len(),
        time_blocks = time_blocks.len(),
        "enumerating schedule combinations"
    );

    let mut results = Vec::new();
    let mut partial = Vec::with_capacity(slots.len());
    Search::new(slots, time_blocks).walk(0, &mut partial, &mut |chosen: &[&Section]| {
        let choices = slots
            .iter()
            .zip(chosen)
            .map(|(slot, section)| SectionChoice {
                course_id: slot.course_id.to_string(),
                section: (*section).clone(),
            })
            .collect();
        results.push(ScheduleCombination::new(choices));
    });

    debug!(combinations = results.len(), "enumeration complete");
    results
}

/// Borrowed view of one search: course levels plus fixed obstructions.
struct Search<'s, 'a> {
    slots: &'s [CourseSlot<'a>],
    time_blocks: &'s [TimeBlock],
}

impl<'s, 'a> Search<'s, 'a> {
    fn new(slots: &'s [CourseSlot<'a>], time_blocks: &'s [TimeBlock]) -> Self {
        Self { slots, time_blocks }
    }

    /// Visits every complete conflict-free path below `depth`.
    ///
    /// `partial` holds the sections chosen at depths `0..depth` and is
    /// restored before returning.
    fn walk<F>(&self, depth: usize, partial: &mut Vec<&'a Section>, emit: &mut F)
    where
        F: FnMut(&[&'a Section]),
    {
        if depth == self.slots.len() {
            emit(partial);
            return;
        }

        let slot = &self.slots[depth];
        for section in slot.sections {
            if !self.fits(section, partial) {
                trace!(
                    course_id = slot.course_id,
                    section_id = %section.id,
                    depth = depth,
                    "section pruned by conflict"
                );
                continue;
            }
            partial.push(section);
            self.walk(depth + 1, partial, emit);
            partial.pop();
        }
    }

    /// Whether `candidate` conflicts with nothing chosen so far and no block.
    fn fits(&self, candidate: &Section, partial: &[&'a Section]) -> bool {
        !partial.iter().any(|chosen| overlaps(*chosen, candidate))
            && !self.time_blocks.iter().any(|block| overlaps(block, candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, Meeting};
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn section(id: &str, days: &[&str], start: &str, end: &str) -> Section {
        Section::new(id, "Staff", Meeting::parse(days, start, end, "Room").unwrap()).with_seats(10)
    }

    fn block(days: &[&str], start: &str, end: &str, reason: &str) -> TimeBlock {
        TimeBlock::parse(days, start, end, reason).unwrap()
    }

    fn os_catalog() -> Catalog {
        Catalog::new().with_course(
            Course::new("COP4600", "Operating Systems")
                .with_credits(3)
                .with_section(section("A", &["Monday", "Wednesday"], "10:30", "11:45"))
                .with_section(section("B", &["Tuesday", "Thursday"], "13:30", "14:45")),
        )
    }

    fn section_ids(combo: &ScheduleCombination) -> Vec<&str> {
        combo.sections().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_single_course_all_sections() {
        let combos = generate_schedules(&["COP4600"], &os_catalog(), &[]);
        assert_eq!(combos.len(), 2);
        assert_eq!(section_ids(&combos[0]), vec!["A"]);
        assert_eq!(section_ids(&combos[1]), vec!["B"]);
        assert_eq!(combos[0].choices[0].course_id, "COP4600");
    }

    #[test]
    fn test_time_block_prunes_section() {
        let work = block(&["Monday"], "10:00", "12:00", "Work");
        let combos = generate_schedules(&["COP4600"], &os_catalog(), &[work]);
        assert_eq!(combos.len(), 1);
        assert_eq!(section_ids(&combos[0]), vec!["B"]);
    }

    #[test]
    fn test_touching_block_does_not_prune() {
        // Ends exactly when section A starts.
        let commute = block(&["Monday"], "09:30", "10:30", "Commute");
        let combos = generate_schedules(&["COP4600"], &os_catalog(), &[commute]);
        assert_eq!(combos.len(), 2);
    }

    #[test]
    fn test_all_pairs_conflicting() {
        let catalog = Catalog::new()
            .with_course(
                Course::new("X", "X")
                    .with_section(section("1", &["M"], "09:00", "10:00"))
                    .with_section(section("2", &["T"], "09:00", "10:00")),
            )
            .with_course(
                Course::new("Y", "Y")
                    .with_section(section("1", &["M", "T"], "09:30", "10:30")),
            );
        let combos = generate_schedules(&["X", "Y"], &catalog, &[]);
        assert!(combos.is_empty());
    }

    #[test]
    fn test_full_cross_product() {
        let catalog = Catalog::new()
            .with_course(
                Course::new("X", "X")
                    .with_section(section("x1", &["Monday"], "08:00", "09:00"))
                    .with_section(section("x2", &["Monday"], "09:00", "10:00")),
            )
            .with_course(
                Course::new("Y", "Y")
                    .with_section(section("y1", &["Tuesday"], "08:00", "09:00"))
                    .with_section(section("y2", &["Wednesday"], "08:00", "09:00"))
                    .with_section(section("y3", &["Friday"], "08:00", "09:00")),
            );

        let combos = generate_schedules(&["X", "Y"], &catalog, &[]);
        assert_eq!(combos.len(), 6);

        // Depth-first order: sections tried in catalog order.
        let order: Vec<Vec<&str>> = combos.iter().map(section_ids).collect();
        assert_eq!(
            order,
            vec![
                vec!["x1", "y1"],
                vec!["x1", "y2"],
                vec!["x1", "y3"],
                vec!["x2", "y1"],
                vec!["x2", "y2"],
                vec!["x2", "y3"],
            ]
        );
        for combo in &combos {
            assert_eq!(combo.choices[0].course_id, "X");
            assert_eq!(combo.choices[1].course_id, "Y");
        }
    }

    #[test]
    fn test_selection_order_drives_output_order() {
        let catalog = os_catalog().with_course(
            Course::new("MAC2311", "Calculus I")
                .with_section(section("C1", &["Friday"], "08:00", "09:00")),
        );
        let combos = generate_schedules(&["MAC2311", "COP4600"], &catalog, &[]);
        assert_eq!(combos.len(), 2);
        assert_eq!(combos[0].choices[0].course_id, "MAC2311");
        assert_eq!(section_ids(&combos[0]), vec!["C1", "A"]);
    }

    #[test]
    fn test_empty_selection() {
        let none: &[&str] = &[];
        assert!(generate_schedules(none, &os_catalog(), &[]).is_empty());

        let generator = ScheduleGenerator::new();
        assert!(generator.generate(none, &os_catalog(), &[]).unwrap().is_empty());
        assert_eq!(generator.count(none, &os_catalog(), &[]).unwrap(), 0);
    }

    #[test]
    fn test_unknown_course_lenient() {
        let combos = generate_schedules(&["COP4600", "NOPE"], &os_catalog(), &[]);
        assert!(combos.is_empty());

        let generator = ScheduleGenerator::new();
        assert!(generator
            .generate(&["NOPE"], &os_catalog(), &[])
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_unknown_course_rejected() {
        let config = GeneratorConfig::new().with_unknown_course_policy(UnknownCoursePolicy::Reject);
        let generator = ScheduleGenerator::with_config(config);

        let err = generator
            .generate(&["COP4600", "NOPE"], &os_catalog(), &[])
            .unwrap_err();
        assert_eq!(err, ScheduleError::UnknownCourse("NOPE".into()));

        // Known ids still work under the strict policy.
        assert_eq!(generator.generate(&["COP4600"], &os_catalog(), &[]).unwrap().len(), 2);
    }

    #[test]
    fn test_generate_checked_classifies() {
        let generator = ScheduleGenerator::new();
        let none: &[&str] = &[];
        assert_eq!(
            generator.generate_checked(none, &os_catalog(), &[]).unwrap_err(),
            ScheduleError::EmptySelection
        );

        let everything = block(&["M", "T", "W", "Th", "F"], "08:00", "18:00", "Busy");
        assert_eq!(
            generator
                .generate_checked(&["COP4600"], &os_catalog(), &[everything])
                .unwrap_err(),
            ScheduleError::NoFeasibleCombination
        );

        assert_eq!(
            generator
                .generate_checked(&["COP4600", "NOPE"], &os_catalog(), &[])
                .unwrap_err(),
            ScheduleError::NoFeasibleCombination
        );

        assert_eq!(generator.generate_checked(&["COP4600"], &os_catalog(), &[]).unwrap().len(), 2);
    }

    #[test]
    fn test_duplicate_selection() {
        let generator = ScheduleGenerator::new();
        // Same course twice: A pairs with B and B with A, never with itself.
        let combos = generator
            .generate(&["COP4600", "COP4600"], &os_catalog(), &[])
            .unwrap();
        let order: Vec<Vec<&str>> = combos.iter().map(section_ids).collect();
        assert_eq!(order, vec![vec!["A", "B"], vec!["B", "A"]]);

        let dedup = ScheduleGenerator::with_config(GeneratorConfig::new().with_dedup_selection(true));
        let combos = dedup.generate(&["COP4600", "COP4600"], &os_catalog(), &[]).unwrap();
        assert_eq!(combos.len(), 2);
        assert!(combos.iter().all(|c| c.len() == 1));
    }

    #[test]
    fn test_generate_request() {
        let request = ScheduleRequest::new(["COP4600"])
            .with_time_block(block(&["Monday"], "10:00", "12:00", "Work"));
        let combos = ScheduleGenerator::new()
            .generate_request(&request, &os_catalog())
            .unwrap();
        assert_eq!(combos.len(), 1);
    }

    #[test]
    fn test_count_matches_generate() {
        let generator = ScheduleGenerator::new();
        let work = block(&["Monday"], "10:00", "12:00", "Work");
        let catalog = os_catalog();
        for blocks in [vec![], vec![work]] {
            let generated = generator.generate(&["COP4600"], &catalog, &blocks).unwrap();
            let counted = generator.count(&["COP4600"], &catalog, &blocks).unwrap();
            assert_eq!(generated.len(), counted);
        }
    }

    #[test]
    fn test_course_without_sections() {
        let catalog = os_catalog().with_course(Course::new("EMPTY", "No sections yet"));
        assert!(generate_schedules(&["COP4600", "EMPTY"], &catalog, &[]).is_empty());
    }

    // ---- randomized properties ----

    const DAYS: [&str; 5] = ["M", "T", "W", "Th", "F"];

    fn random_meeting_parts(rng: &mut SmallRng) -> (Vec<&'static str>, String, String) {
        let days: Vec<&str> = DAYS.iter().copied().filter(|_| rng.random_bool(0.4)).collect();
        let start = rng.random_range(8 * 4..18 * 4) * 15; // quarter hours
        let len = rng.random_range(2..=6) * 15;
        let fmt = |m: u32| format!("{:02}:{:02}", m / 60, m % 60);
        (days, fmt(start), fmt(start + len))
    }

    fn random_catalog(rng: &mut SmallRng, courses: usize) -> Catalog {
        (0..courses)
            .map(|c| {
                let mut course = Course::new(format!("C{c}"), format!("Course {c}"));
                for s in 0..rng.random_range(1..=4) {
                    let (days, start, end) = random_meeting_parts(rng);
                    course = course.with_section(section(&format!("{s:04}"), &days, &start, &end));
                }
                course
            })
            .collect()
    }

    fn random_blocks(rng: &mut SmallRng) -> Vec<TimeBlock> {
        (0..rng.random_range(0..3))
            .map(|_| {
                let (days, start, end) = random_meeting_parts(rng);
                block(&days, &start, &end, "Blocked")
            })
            .collect()
    }

    fn brute_force_count(slots: &[&[Section]], blocks: &[TimeBlock]) -> usize {
        let total: usize = slots.iter().map(|s| s.len()).product();
        let mut count = 0;
        for mut code in 0..total {
            let mut chosen = Vec::new();
            for sections in slots {
                chosen.push(&sections[code % sections.len()]);
                code /= sections.len();
            }
            let pairwise_ok = chosen.iter().enumerate().all(|(i, a)| {
                chosen[i + 1..].iter().all(|b| !overlaps(*a, *b))
            });
            let blocks_ok = chosen
                .iter()
                .all(|s| blocks.iter().all(|b| !overlaps(*s, b)));
            if pairwise_ok && blocks_ok {
                count += 1;
            }
        }
        count
    }

    #[test]
    fn test_random_results_are_conflict_free() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..50 {
            let n = rng.random_range(1..=4);
            let catalog = random_catalog(&mut rng, n);
            let blocks = random_blocks(&mut rng);
            let ids: Vec<String> = (0..n).map(|c| format!("C{c}")).collect();

            for combo in generate_schedules(&ids, &catalog, &blocks) {
                assert_eq!(combo.len(), n);
                for (i, choice) in combo.choices.iter().enumerate() {
                    assert_eq!(choice.course_id, ids[i]);
                    assert!(catalog.sections_of(&ids[i]).contains(&choice.section));
                    for other in &combo.choices[i + 1..] {
                        assert!(!overlaps(&choice.section, &other.section));
                    }
                    for b in &blocks {
                        assert!(!overlaps(&choice.section, b));
                    }
                }
            }
        }
    }

    #[test]
    fn test_random_matches_brute_force() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            let n = rng.random_range(1..=4);
            let catalog = random_catalog(&mut rng, n);
            let blocks = random_blocks(&mut rng);
            let ids: Vec<String> = (0..n).map(|c| format!("C{c}")).collect();
            let slots: Vec<&[Section]> = ids.iter().map(|id| catalog.sections_of(id)).collect();

            let generated = generate_schedules(&ids, &catalog, &blocks);
            assert_eq!(generated.len(), brute_force_count(&slots, &blocks));
        }
    }

    #[test]
    fn test_random_deterministic() {
        let mut rng = SmallRng::seed_from_u64(1234);
        let catalog = random_catalog(&mut rng, 4);
        let blocks = random_blocks(&mut rng);
        let ids = ["C0", "C1", "C2", "C3"];

        let first = generate_schedules(&ids, &catalog, &blocks);
        let second = generate_schedules(&ids, &catalog, &blocks);
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_overlap_symmetric() {
        let mut rng = SmallRng::seed_from_u64(99);
        for _ in 0..200 {
            let (da, sa, ea) = random_meeting_parts(&mut rng);
            let (db, sb, eb) = random_meeting_parts(&mut rng);
            let a = Meeting::parse(&da, &sa, &ea, "").unwrap();
            let b = Meeting::parse(&db, &sb, &eb, "").unwrap();
            assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
            if !a.shares_day(&b) {
                assert!(!overlaps(&a, &b));
            }
        }
    }
}
