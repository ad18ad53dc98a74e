//! Serialization-ready schedule export.
//!
//! Resolves every assignment's entity references into a flat record an
//! external exporter can serialize to CSV, JSON, or anything else. Field
//! completeness is guaranteed here; file formatting is not this crate's
//! concern.

use serde::{Deserialize, Serialize};

use crate::entities::Entities;
use crate::error::SnapshotError;
use crate::models::{CourseType, Day, Schedule};

/// One fully resolved schedule row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportEntry {
    pub course_id: String,
    pub course_name: String,
    pub course_type: CourseType,
    pub instructor_id: String,
    pub instructor_name: String,
    pub room_id: String,
    pub day: Day,
    pub start: String,
    pub end: String,
}

/// The exportable shape of a finished schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleExport {
    /// Courses in the snapshot's catalog.
    pub total_courses: usize,
    /// Courses present in the schedule.
    pub scheduled_courses: usize,
    /// One record per assignment, in schedule order.
    pub entries: Vec<ExportEntry>,
}

/// Resolves a schedule against the snapshot into export records.
///
/// # Errors
/// Structural only: an assignment referencing an id or slot the snapshot
/// does not contain.
pub fn export(schedule: &Schedule, entities: &Entities) -> Result<ScheduleExport, SnapshotError> {
    let slot_count = entities.timeslots().len();
    let mut entries = Vec::with_capacity(schedule.len());

    for a in &schedule.assignments {
        let course = entities
            .course(&a.course_id)
            .ok_or_else(|| SnapshotError::UnknownCourse(a.course_id.clone()))?;
        let instructor = entities
            .instructor(&a.instructor_id)
            .ok_or_else(|| SnapshotError::UnknownInstructor(a.instructor_id.clone()))?;
        let room = entities
            .room(&a.room_id)
            .ok_or_else(|| SnapshotError::UnknownRoom(a.room_id.clone()))?;
        if a.slot >= slot_count {
            return Err(SnapshotError::SlotOutOfRange {
                index: a.slot,
                count: slot_count,
            });
        }
        let timeslot = &entities.timeslots()[a.slot];

        entries.push(ExportEntry {
            course_id: course.id.clone(),
            course_name: course.name.clone(),
            course_type: course.course_type,
            instructor_id: instructor.id.clone(),
            instructor_name: instructor.name.clone(),
            room_id: room.id.clone(),
            day: timeslot.day,
            start: timeslot.start.clone(),
            end: timeslot.end.clone(),
        });
    }

    Ok(ScheduleExport {
        total_courses: entities.courses().len(),
        scheduled_courses: schedule.len(),
        entries,
    })
}
