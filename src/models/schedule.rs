//! Schedule (solution) model.
//!
//! A schedule is an ordered sequence of course assignments, at most one per
//! course. It is grown and shrunk only during search; once the solver
//! returns it is treated as immutable. Constraint satisfaction is **not**
//! rechecked here — that is the job of [`crate::validation`].

use serde::{Deserialize, Serialize};

/// A committed (course, instructor, room, timeslot) placement.
///
/// `slot` indexes the timeslot list of the solve that produced this
/// assignment; it is resolved back to day/start/end by the exporter and
/// validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Assigned course id.
    pub course_id: String,
    /// Assigned instructor id.
    pub instructor_id: String,
    /// Assigned room id.
    pub room_id: String,
    /// Index into the solve's timeslot list.
    pub slot: usize,
}

impl Assignment {
    /// Creates an assignment.
    pub fn new(
        course_id: impl Into<String>,
        instructor_id: impl Into<String>,
        room_id: impl Into<String>,
        slot: usize,
    ) -> Self {
        Self {
            course_id: course_id.into(),
            instructor_id: instructor_id.into(),
            room_id: room_id.into(),
            slot,
        }
    }
}

/// An ordered sequence of assignments, at most one per course.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Assignments in commit order.
    pub assignments: Vec<Assignment>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an assignment.
    pub fn push(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Removes and returns the most recent assignment (search backtrack).
    pub fn pop(&mut self) -> Option<Assignment> {
        self.assignments.pop()
    }

    /// Number of assignments.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the schedule is empty.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Finds the assignment for a course, if any.
    pub fn assignment_for_course(&self, course_id: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.course_id == course_id)
    }

    /// Returns all assignments held by an instructor.
    pub fn assignments_for_instructor(&self, instructor_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.instructor_id == instructor_id)
            .collect()
    }

    /// Returns all assignments hosted by a room.
    pub fn assignments_for_room(&self, room_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.room_id == room_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new();
        s.push(Assignment::new("C1", "I1", "R1", 0));
        s.push(Assignment::new("C2", "I2", "R2", 0));
        s.push(Assignment::new("C3", "I1", "R1", 1));
        s
    }

    #[test]
    fn test_push_pop() {
        let mut s = sample_schedule();
        assert_eq!(s.len(), 3);
        let popped = s.pop().unwrap();
        assert_eq!(popped.course_id, "C3");
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_assignment_for_course() {
        let s = sample_schedule();
        assert_eq!(s.assignment_for_course("C2").unwrap().instructor_id, "I2");
        assert!(s.assignment_for_course("C9").is_none());
    }

    #[test]
    fn test_assignments_for_instructor() {
        let s = sample_schedule();
        assert_eq!(s.assignments_for_instructor("I1").len(), 2);
        assert_eq!(s.assignments_for_instructor("I2").len(), 1);
    }

    #[test]
    fn test_assignments_for_room() {
        let s = sample_schedule();
        assert_eq!(s.assignments_for_room("R1").len(), 2);
    }

    #[test]
    fn test_empty() {
        let s = Schedule::new();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
    }
}
