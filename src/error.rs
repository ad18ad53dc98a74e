//! Error taxonomy for the timetabling engine.
//!
//! Three distinct failure classes, mirroring who can correct them:
//!
//! - [`ModelError`] — rejected at entity construction (bad input data).
//! - [`SolveError`] — configuration errors surfaced before search starts.
//! - [`SnapshotError`] — a schedule references entities absent from the
//!   snapshot; indicates a caller contract violation.
//!
//! Unplaced courses are **not** errors: they are reported as data in
//! [`SolveResult`](crate::solver::SolveResult) and
//! [`ValidationReport`](crate::validation::ValidationReport).

use thiserror::Error;

/// Construction-time rejection of a domain entity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A course must carry a positive credit count.
    #[error("course '{course_id}' has a zero credit count")]
    InvalidCredits {
        /// Offending course id.
        course_id: String,
    },
    /// A room must have a positive capacity.
    #[error("room '{room_id}' has zero capacity")]
    InvalidCapacity {
        /// Offending room id.
        room_id: String,
    },
    /// Two entities of the same kind share an identifier.
    #[error("duplicate {kind} id '{id}'")]
    DuplicateId {
        /// Entity kind ("course", "instructor", "room", "timeslot").
        kind: &'static str,
        /// The duplicated identifier.
        id: String,
    },
}

/// Caller-correctable configuration errors, detected before search begins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// After excluding courses with no qualified instructor, nothing remains.
    #[error("no schedulable courses: every course lacks a qualified instructor")]
    EmptyPool,
    /// The room set is empty.
    #[error("no rooms provided")]
    EmptyRooms,
    /// The timeslot set is empty.
    #[error("no timeslots provided")]
    EmptyTimeslots,
}

/// Structural errors: a schedule references something the entity snapshot
/// does not contain. Raised by the validator and exporter, never by the
/// solver (which only produces assignments from the snapshot).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// An assignment names a course id absent from the snapshot.
    #[error("assignment references unknown course '{0}'")]
    UnknownCourse(String),
    /// An assignment names an instructor id absent from the snapshot.
    #[error("assignment references unknown instructor '{0}'")]
    UnknownInstructor(String),
    /// An assignment names a room id absent from the snapshot.
    #[error("assignment references unknown room '{0}'")]
    UnknownRoom(String),
    /// An assignment's timeslot index is outside the snapshot's slot list.
    #[error("assignment references timeslot index {index} but only {count} timeslots exist")]
    SlotOutOfRange {
        /// The out-of-range index.
        index: usize,
        /// Number of timeslots in the snapshot.
        count: usize,
    },
}
