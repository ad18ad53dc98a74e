//! Constraint engine: pure predicates over candidate assignments.
//!
//! One predicate per hard constraint, each evaluated against the schedule
//! built so far. Occupancy is tracked in an index kept in lockstep with the
//! schedule, so every check is O(1) amortized rather than a scan of the
//! growing assignment list. Each availability check bumps the shared
//! constraint-check counter in [`SolveStats`]; the counter is telemetry
//! only and has no effect on the verdict.
//!
//! The instructor's unavailable-day preference is enforced here as a hard
//! constraint — the solver never emits an assignment on an avoided day.
//! The validator still audits it separately as a soft category, since it
//! must also handle schedules produced elsewhere.

use std::collections::HashSet;

use crate::models::{Course, CourseType, Instructor, RoomType, Timeslot};
use crate::solver::SolveStats;

/// Per-solve index of occupied (instructor, slot) and (room, slot) pairs.
///
/// Mirrors the schedule under construction: [`place`](Self::place) on
/// commit, [`remove`](Self::remove) on backtrack.
#[derive(Debug, Clone, Default)]
pub struct Occupancy {
    instructor_slots: HashSet<(String, usize)>,
    room_slots: HashSet<(String, usize)>,
}

impl Occupancy {
    /// Creates an empty occupancy index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks an instructor and room as busy at a slot.
    pub fn place(&mut self, instructor_id: &str, room_id: &str, slot: usize) {
        self.instructor_slots.insert((instructor_id.to_string(), slot));
        self.room_slots.insert((room_id.to_string(), slot));
    }

    /// Clears an instructor and room at a slot (backtrack undo).
    pub fn remove(&mut self, instructor_id: &str, room_id: &str, slot: usize) {
        self.instructor_slots.remove(&(instructor_id.to_string(), slot));
        self.room_slots.remove(&(room_id.to_string(), slot));
    }

    fn instructor_busy(&self, instructor_id: &str, slot: usize) -> bool {
        self.instructor_slots.contains(&(instructor_id.to_string(), slot))
    }

    fn room_busy(&self, room_id: &str, slot: usize) -> bool {
        self.room_slots.contains(&(room_id.to_string(), slot))
    }
}

/// A candidate (instructor, room, timeslot) tuple for one course, before
/// constraint filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Candidate instructor id.
    pub instructor_id: String,
    /// Candidate room id.
    pub room_id: String,
    /// Candidate slot index.
    pub slot: usize,
}

/// Whether the instructor can take the slot: not already teaching then,
/// and the slot's day is not in their unavailable set. A slot index
/// outside the timeslot list is never available.
pub fn instructor_available(
    instructor: &Instructor,
    slot: usize,
    timeslots: &[Timeslot],
    occupancy: &Occupancy,
    stats: &mut SolveStats,
) -> bool {
    stats.constraint_checks += 1;

    let Some(timeslot) = timeslots.get(slot) else {
        return false;
    };
    if !instructor.is_available_on(timeslot.day) {
        return false;
    }
    !occupancy.instructor_busy(&instructor.id, slot)
}

/// Whether the room is free at the slot.
pub fn room_available(
    room_id: &str,
    slot: usize,
    occupancy: &Occupancy,
    stats: &mut SolveStats,
) -> bool {
    stats.constraint_checks += 1;
    !occupancy.room_busy(room_id, slot)
}

/// Whether a room of the given type can host the given course kind.
///
/// Pure compatibility rule; also used for domain pre-filtering, so it does
/// not touch the check counter.
pub fn room_compatible(room_type: RoomType, course_type: CourseType) -> bool {
    room_type.is_compatible_with(course_type)
}

/// Conjunction of all hard constraints — the sole admission gate used by
/// both search strategies.
///
/// Room compatibility is guaranteed by domain generation (only compatible
/// rooms enter a course's domain), so only the two availability checks run
/// here.
pub fn is_consistent(
    _course: &Course,
    candidate: &Candidate,
    instructor: &Instructor,
    timeslots: &[Timeslot],
    occupancy: &Occupancy,
    stats: &mut SolveStats,
) -> bool {
    instructor_available(instructor, candidate.slot, timeslots, occupancy, stats)
        && room_available(&candidate.room_id, candidate.slot, occupancy, stats)
}
