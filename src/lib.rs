//! Course timetable generation for the U-Engine ecosystem.
//!
//! Given selected courses (each offered in several sections) and a set of
//! blocked time periods, enumerates every combination of one section per
//! course in which nothing overlaps on a shared day.
//!
//! # Modules
//!
//! - **`models`**: Domain types and the time model: `Day`, `ClockTime`,
//!   `TimeWindow`, `Meeting`, `Course`, `Section`, `TimeBlock`, `Catalog`,
//!   `ScheduleCombination`
//! - **`scheduler`**: Exhaustive backtracking generator, configuration,
//!   and per-combination metrics
//! - **`validation`**: Catalog and selection integrity checks
//!
//! # Example
//!
//! ```
//! use u_timetable::generate_schedules;
//! use u_timetable::models::{Catalog, TimeBlock};
//!
//! let catalog = Catalog::from_json(r#"[{
//!     "id": "COP4600", "name": "Operating Systems", "credits": 3,
//!     "sections": [
//!         {"id": "0001", "instructor": "Dr. Smith", "seats": 15,
//!          "schedule": {"days": ["Monday", "Wednesday"], "startTime": "10:30", "endTime": "11:45", "location": "CB2 101"}},
//!         {"id": "0002", "instructor": "Dr. Johnson", "seats": 8,
//!          "schedule": {"days": ["Tuesday", "Thursday"], "startTime": "13:30", "endTime": "14:45", "location": "ENG2 102"}}
//!     ]
//! }]"#).unwrap();
//!
//! assert_eq!(generate_schedules(&["COP4600"], &catalog, &[]).len(), 2);
//!
//! let work = TimeBlock::parse(&["Monday"], "10:00", "12:00", "Work").unwrap();
//! assert_eq!(generate_schedules(&["COP4600"], &catalog, &[work]).len(), 1);
//! ```

pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{ScheduleError, TimeError};
pub use models::overlaps;
pub use scheduler::generate_schedules;
