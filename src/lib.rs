//! Course timetabling engine.
//!
//! Assigns each course a (instructor, room, timeslot) triple such that no
//! instructor or room is double-booked, room capability matches course
//! need, and instructor availability is respected, scheduling as many
//! courses as the budget allows.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Course`, `Instructor`, `Room`,
//!   `Timeslot`, `Assignment`, `Schedule`
//! - **`entities`**: The immutable entity snapshot a solve runs over
//! - **`constraints`**: Hard-constraint predicates and the occupancy index
//! - **`solver`**: Backtracking and greedy search strategies with budgets
//!   and telemetry
//! - **`validation`**: Independent post-hoc constraint audit and
//!   utilization statistics
//! - **`export`**: Resolved, serialization-ready schedule records
//! - **`error`**: Configuration / structural / model error taxonomy
//!
//! # Data flow
//!
//! Entity snapshot → [`solver::solve`] → [`models::Schedule`] →
//! [`validation::validate`] → report. The solver is the only component
//! with search state; everything else is a stateless function over
//! immutable inputs. Ingestion of delimited files, persistence, and any
//! HTTP or UI surface are external collaborators, not part of this crate.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use timetable::entities::Entities;
//! use timetable::models::{Course, CourseType, Day, Instructor, Room, RoomType, Timeslot};
//! use timetable::solver::{SolveRequest, Strategy};
//! use timetable::{export, validation};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let entities = Entities::new(
//!     vec![Course::new("CS101", "Intro to CS", 3, CourseType::Lecture)?],
//!     vec![Instructor::new("I1", "Dr. Ada").with_qualified_course("CS101")],
//!     vec![Room::new("R1", RoomType::Lecture, 60)?],
//!     vec![Timeslot::new(Day::Monday, "09:00", "10:00")],
//! )?;
//!
//! let result = SolveRequest::new(&entities)
//!     .with_strategy(Strategy::greedy(Duration::from_secs(60)))
//!     .with_seed(42)
//!     .solve()?;
//!
//! let report = validation::validate(&result.schedule, &entities)?;
//! assert!(report.hard_constraints_hold());
//!
//! let out = export::export(&result.schedule, &entities)?;
//! assert_eq!(out.scheduled_courses, 1);
//! # Ok(())
//! # }
//! ```

pub mod constraints;
pub mod entities;
pub mod error;
pub mod export;
pub mod models;
pub mod solver;
pub mod validation;

pub use entities::Entities;
pub use error::{ModelError, SnapshotError, SolveError};
pub use models::{Assignment, Course, CourseType, Day, Instructor, Room, RoomType, Schedule, Timeslot};
pub use solver::{CourseOrdering, SolveOutcome, SolveRequest, SolveResult, SolveStats, Strategy};
