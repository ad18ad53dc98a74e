//! Independent schedule validation and utilization analysis.
//!
//! Re-derives constraint satisfaction from a finished [`Schedule`] and the
//! entity snapshot, trusting none of the solver's bookkeeping — the input
//! may come from any producer, including hand-edited or imported
//! schedules. Violations are data, never control flow: the only error this
//! module raises is structural, when an assignment references an entity
//! the snapshot does not contain.
//!
//! The unavailable-day rule appears here as its own soft category even
//! though this crate's solver enforces it as hard; a schedule produced
//! elsewhere may well violate it.
//!
//! Report ordering is deterministic (schedule scan order for violations,
//! sorted maps for statistics), so validating the same input twice yields
//! identical reports.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::entities::Entities;
use crate::error::SnapshotError;
use crate::models::{CourseType, Day, RoomType, Schedule};

/// Two courses sharing one instructor at one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructorConflict {
    /// Double-booked instructor.
    pub instructor_id: String,
    /// Slot index of the clash.
    pub slot: usize,
    /// The conflicting course ids (first-seen, then the clashing one).
    pub courses: Vec<String>,
}

/// Two courses sharing one room at one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomConflict {
    /// Double-booked room.
    pub room_id: String,
    /// Slot index of the clash.
    pub slot: usize,
    /// The conflicting course ids (first-seen, then the clashing one).
    pub courses: Vec<String>,
}

/// A course placed in a room whose type cannot host it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMismatch {
    /// Mis-placed course.
    pub course_id: String,
    /// The offending room.
    pub room_id: String,
    /// What the course requires.
    pub expected: CourseType,
    /// What the room actually is.
    pub actual: RoomType,
}

/// A session scheduled on a day the instructor asked to avoid (soft).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceViolation {
    /// The affected instructor.
    pub instructor_id: String,
    /// The course assigned on the avoided day.
    pub course_id: String,
    /// The avoided day.
    pub day: Day,
}

/// Resource utilization derived from the schedule.
///
/// Rates are fractions in `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilizationReport {
    /// Session count per instructor that appears in the schedule.
    pub sessions_per_instructor: BTreeMap<String, usize>,
    /// Instructors with at least one session.
    pub active_instructors: usize,
    /// active_instructors / total instructors in the snapshot.
    pub instructor_active_rate: f64,
    /// Mean sessions per active instructor (0.0 when none are active).
    pub avg_sessions_per_instructor: f64,
    /// Heaviest single instructor workload.
    pub max_instructor_sessions: usize,
    /// Lightest workload among active instructors.
    pub min_instructor_sessions: usize,
    /// Session count per room that appears in the schedule.
    pub sessions_per_room: BTreeMap<String, usize>,
    /// Rooms with at least one session.
    pub rooms_used: usize,
    /// rooms_used / total rooms in the snapshot.
    pub room_utilization_rate: f64,
    /// Mean sessions per used room (0.0 when no room is used).
    pub avg_sessions_per_room: f64,
    /// Session count per day across the whole schedule.
    pub sessions_per_day: BTreeMap<Day, usize>,
}

/// Full validation output: violation lists plus utilization statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Hard: instructor double-bookings.
    pub instructor_conflicts: Vec<InstructorConflict>,
    /// Hard: room double-bookings.
    pub room_conflicts: Vec<RoomConflict>,
    /// Hard: room/course type incompatibilities.
    pub type_mismatches: Vec<TypeMismatch>,
    /// Soft: sessions on avoided days.
    pub preference_violations: Vec<PreferenceViolation>,
    /// Utilization statistics.
    pub utilization: UtilizationReport,
}

impl ValidationReport {
    /// Whether every hard constraint holds. Preference violations are soft
    /// and do not disqualify a schedule.
    pub fn hard_constraints_hold(&self) -> bool {
        self.instructor_conflicts.is_empty()
            && self.room_conflicts.is_empty()
            && self.type_mismatches.is_empty()
    }
}

/// Validates a schedule against the snapshot.
///
/// # Errors
/// Only structural: an assignment referencing an unknown course,
/// instructor, or room id, or a slot index outside the snapshot's
/// timeslot list. Constraint violations are returned in the report.
pub fn validate(schedule: &Schedule, entities: &Entities) -> Result<ValidationReport, SnapshotError> {
    // Structural pass first: every reference must resolve.
    let slot_count = entities.timeslots().len();
    for a in &schedule.assignments {
        if entities.course(&a.course_id).is_none() {
            return Err(SnapshotError::UnknownCourse(a.course_id.clone()));
        }
        if entities.instructor(&a.instructor_id).is_none() {
            return Err(SnapshotError::UnknownInstructor(a.instructor_id.clone()));
        }
        if entities.room(&a.room_id).is_none() {
            return Err(SnapshotError::UnknownRoom(a.room_id.clone()));
        }
        if a.slot >= slot_count {
            return Err(SnapshotError::SlotOutOfRange {
                index: a.slot,
                count: slot_count,
            });
        }
    }

    // Conflicts: linear scan with first-seen maps, so output order follows
    // the schedule and repeated runs agree.
    let mut instructor_conflicts = Vec::new();
    let mut first_by_instructor_slot: HashMap<(&str, usize), &str> = HashMap::new();
    for a in &schedule.assignments {
        match first_by_instructor_slot.get(&(a.instructor_id.as_str(), a.slot)) {
            Some(first) => instructor_conflicts.push(InstructorConflict {
                instructor_id: a.instructor_id.clone(),
                slot: a.slot,
                courses: vec![first.to_string(), a.course_id.clone()],
            }),
            None => {
                first_by_instructor_slot.insert((a.instructor_id.as_str(), a.slot), &a.course_id);
            }
        }
    }

    let mut room_conflicts = Vec::new();
    let mut first_by_room_slot: HashMap<(&str, usize), &str> = HashMap::new();
    for a in &schedule.assignments {
        match first_by_room_slot.get(&(a.room_id.as_str(), a.slot)) {
            Some(first) => room_conflicts.push(RoomConflict {
                room_id: a.room_id.clone(),
                slot: a.slot,
                courses: vec![first.to_string(), a.course_id.clone()],
            }),
            None => {
                first_by_room_slot.insert((a.room_id.as_str(), a.slot), &a.course_id);
            }
        }
    }

    let mut type_mismatches = Vec::new();
    let mut preference_violations = Vec::new();
    for a in &schedule.assignments {
        // Resolution cannot fail after the structural pass.
        let (Some(course), Some(instructor), Some(room)) = (
            entities.course(&a.course_id),
            entities.instructor(&a.instructor_id),
            entities.room(&a.room_id),
        ) else {
            continue;
        };

        if !room.room_type.is_compatible_with(course.course_type) {
            type_mismatches.push(TypeMismatch {
                course_id: a.course_id.clone(),
                room_id: a.room_id.clone(),
                expected: course.course_type,
                actual: room.room_type,
            });
        }

        let day = entities.timeslots()[a.slot].day;
        if !instructor.is_available_on(day) {
            preference_violations.push(PreferenceViolation {
                instructor_id: a.instructor_id.clone(),
                course_id: a.course_id.clone(),
                day,
            });
        }
    }

    Ok(ValidationReport {
        instructor_conflicts,
        room_conflicts,
        type_mismatches,
        preference_violations,
        utilization: utilization(schedule, entities),
    })
}

fn utilization(schedule: &Schedule, entities: &Entities) -> UtilizationReport {
    let mut sessions_per_instructor: BTreeMap<String, usize> = BTreeMap::new();
    let mut sessions_per_room: BTreeMap<String, usize> = BTreeMap::new();
    let mut sessions_per_day: BTreeMap<Day, usize> = BTreeMap::new();

    for a in &schedule.assignments {
        *sessions_per_instructor
            .entry(a.instructor_id.clone())
            .or_insert(0) += 1;
        *sessions_per_room.entry(a.room_id.clone()).or_insert(0) += 1;
        let day = entities.timeslots()[a.slot].day;
        *sessions_per_day.entry(day).or_insert(0) += 1;
    }

    let active_instructors = sessions_per_instructor.len();
    let rooms_used = sessions_per_room.len();
    let instructor_active_rate = rate(active_instructors, entities.instructors().len());
    let room_utilization_rate = rate(rooms_used, entities.rooms().len());

    // Every session lands in exactly one bucket of each map, so the totals
    // are all schedule.len().
    let avg_sessions_per_instructor = mean(schedule.len(), active_instructors);
    let max_instructor_sessions = sessions_per_instructor.values().copied().max().unwrap_or(0);
    let min_instructor_sessions = sessions_per_instructor.values().copied().min().unwrap_or(0);
    let avg_sessions_per_room = mean(schedule.len(), rooms_used);

    UtilizationReport {
        sessions_per_instructor,
        active_instructors,
        instructor_active_rate,
        avg_sessions_per_instructor,
        max_instructor_sessions,
        min_instructor_sessions,
        sessions_per_room,
        rooms_used,
        room_utilization_rate,
        avg_sessions_per_room,
        sessions_per_day,
    }
}

fn mean(total: usize, buckets: usize) -> f64 {
    if buckets == 0 {
        0.0
    } else {
        total as f64 / buckets as f64
    }
}

fn rate(used: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        used as f64 / total as f64
    }
}
