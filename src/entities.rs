//! Entity snapshot shared by solver, validator, and exporter.
//!
//! Input collections arrive already parsed and validated by the ingestion
//! layer; this module only indexes them for id lookup and rejects duplicate
//! identifiers. The snapshot is never mutated by a solve — each solve is an
//! independent, stateless computation over it.

use std::collections::HashMap;

use crate::error::ModelError;
use crate::models::{Course, Instructor, Room, Timeslot};

/// An immutable snapshot of the four entity collections plus id indexes.
#[derive(Debug, Clone)]
pub struct Entities {
    courses: Vec<Course>,
    instructors: Vec<Instructor>,
    rooms: Vec<Room>,
    timeslots: Vec<Timeslot>,
    course_index: HashMap<String, usize>,
    instructor_index: HashMap<String, usize>,
    room_index: HashMap<String, usize>,
}

impl Entities {
    /// Builds a snapshot, rejecting duplicate identifiers.
    ///
    /// Timeslot identity is `(day, start)`; two slots sharing both are
    /// duplicates even if their end times differ.
    pub fn new(
        courses: Vec<Course>,
        instructors: Vec<Instructor>,
        rooms: Vec<Room>,
        timeslots: Vec<Timeslot>,
    ) -> Result<Self, ModelError> {
        let mut course_index = HashMap::with_capacity(courses.len());
        for (i, c) in courses.iter().enumerate() {
            if course_index.insert(c.id.clone(), i).is_some() {
                return Err(ModelError::DuplicateId {
                    kind: "course",
                    id: c.id.clone(),
                });
            }
        }

        let mut instructor_index = HashMap::with_capacity(instructors.len());
        for (i, inst) in instructors.iter().enumerate() {
            if instructor_index.insert(inst.id.clone(), i).is_some() {
                return Err(ModelError::DuplicateId {
                    kind: "instructor",
                    id: inst.id.clone(),
                });
            }
        }

        let mut room_index = HashMap::with_capacity(rooms.len());
        for (i, r) in rooms.iter().enumerate() {
            if room_index.insert(r.id.clone(), i).is_some() {
                return Err(ModelError::DuplicateId {
                    kind: "room",
                    id: r.id.clone(),
                });
            }
        }

        let mut seen_slots = HashMap::with_capacity(timeslots.len());
        for ts in &timeslots {
            let key = (ts.day, ts.start.clone());
            if seen_slots.insert(key, ()).is_some() {
                return Err(ModelError::DuplicateId {
                    kind: "timeslot",
                    id: format!("{} {}", ts.day, ts.start),
                });
            }
        }

        Ok(Self {
            courses,
            instructors,
            rooms,
            timeslots,
            course_index,
            instructor_index,
            room_index,
        })
    }

    /// All courses, input order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// All instructors, input order.
    pub fn instructors(&self) -> &[Instructor] {
        &self.instructors
    }

    /// All rooms, input order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// All timeslots, input order. Slot indices refer into this list.
    pub fn timeslots(&self) -> &[Timeslot] {
        &self.timeslots
    }

    /// Looks up a course by id.
    pub fn course(&self, id: &str) -> Option<&Course> {
        self.course_index.get(id).map(|&i| &self.courses[i])
    }

    /// Looks up an instructor by id.
    pub fn instructor(&self, id: &str) -> Option<&Instructor> {
        self.instructor_index.get(id).map(|&i| &self.instructors[i])
    }

    /// Looks up a room by id.
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.room_index.get(id).map(|&i| &self.rooms[i])
    }

    /// Instructors qualified to teach the given course, input order.
    pub fn qualified_instructors(&self, course_id: &str) -> Vec<&Instructor> {
        self.instructors
            .iter()
            .filter(|i| i.is_qualified_for(course_id))
            .collect()
    }

    /// Rooms whose type can host the given course, input order.
    pub fn compatible_rooms(&self, course: &Course) -> Vec<&Room> {
        self.rooms
            .iter()
            .filter(|r| r.room_type.is_compatible_with(course.course_type))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CourseType, Day, RoomType};

    fn sample() -> Entities {
        Entities::new(
            vec![
                Course::new("C1", "Algorithms", 3, CourseType::Lecture).unwrap(),
                Course::new("C2", "OS Lab", 1, CourseType::Lab).unwrap(),
            ],
            vec![
                Instructor::new("I1", "Ada").with_qualified_course("C1"),
                Instructor::new("I2", "Grace")
                    .with_qualified_course("C1")
                    .with_qualified_course("C2"),
            ],
            vec![
                Room::new("R1", RoomType::Lecture, 60).unwrap(),
                Room::new("R2", RoomType::Lab, 24).unwrap(),
            ],
            vec![
                Timeslot::new(Day::Monday, "09:00", "10:00"),
                Timeslot::new(Day::Monday, "10:00", "11:00"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_lookups() {
        let e = sample();
        assert_eq!(e.course("C2").unwrap().name, "OS Lab");
        assert_eq!(e.instructor("I1").unwrap().name, "Ada");
        assert_eq!(e.room("R2").unwrap().room_type, RoomType::Lab);
        assert!(e.course("C9").is_none());
    }

    #[test]
    fn test_qualified_instructors() {
        let e = sample();
        let q: Vec<&str> = e
            .qualified_instructors("C1")
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(q, vec!["I1", "I2"]);
        assert_eq!(e.qualified_instructors("C2").len(), 1);
    }

    #[test]
    fn test_compatible_rooms() {
        let e = sample();
        let lecture = e.course("C1").unwrap();
        let rooms: Vec<&str> = e
            .compatible_rooms(lecture)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(rooms, vec!["R1"]);
    }

    #[test]
    fn test_duplicate_course_rejected() {
        let err = Entities::new(
            vec![
                Course::new("C1", "A", 3, CourseType::Lecture).unwrap(),
                Course::new("C1", "B", 3, CourseType::Lecture).unwrap(),
            ],
            vec![],
            vec![],
            vec![],
        )
        .unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateId {
                kind: "course",
                id: "C1".into()
            }
        );
    }

    #[test]
    fn test_duplicate_timeslot_rejected() {
        let err = Entities::new(
            vec![],
            vec![],
            vec![],
            vec![
                Timeslot::new(Day::Monday, "09:00", "10:00"),
                Timeslot::new(Day::Monday, "09:00", "10:30"),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, ModelError::DuplicateId { kind: "timeslot", .. }));
    }
}
