//! Candidate domain generation.
//!
//! The domain of a course is the cartesian product of its qualified
//! instructors, the rooms compatible with its type, and every timeslot
//! index of the solve. Generated in deterministic input order; any
//! shuffling happens afterwards in the strategy that asked for it.

use crate::constraints::Candidate;
use crate::entities::Entities;
use crate::models::Course;

/// Builds the unfiltered candidate set for a course.
///
/// A course with no qualified instructor yields an empty domain; such
/// courses are excluded from the pool before search and never reach here
/// during a solve.
pub fn domain_for(course: &Course, entities: &Entities) -> Vec<Candidate> {
    let instructors = entities.qualified_instructors(&course.id);
    let rooms = entities.compatible_rooms(course);
    let slot_count = entities.timeslots().len();

    let mut domain = Vec::with_capacity(instructors.len() * rooms.len() * slot_count);
    for instructor in &instructors {
        for room in &rooms {
            for slot in 0..slot_count {
                domain.push(Candidate {
                    instructor_id: instructor.id.clone(),
                    room_id: room.id.clone(),
                    slot,
                });
            }
        }
    }
    domain
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CourseType, Day, Instructor, Room, RoomType, Timeslot};

    fn entities() -> Entities {
        Entities::new(
            vec![
                Course::new("C1", "Algo", 3, CourseType::Lecture).unwrap(),
                Course::new("C2", "Orphan", 3, CourseType::Lab).unwrap(),
                Course::new("C3", "Hybrid", 3, CourseType::LectureAndLab).unwrap(),
            ],
            vec![
                Instructor::new("I1", "Ada")
                    .with_qualified_course("C1")
                    .with_qualified_course("C3"),
                Instructor::new("I2", "Grace").with_qualified_course("C3"),
            ],
            vec![
                Room::new("R1", RoomType::Lecture, 40).unwrap(),
                Room::new("R2", RoomType::Lab, 20).unwrap(),
            ],
            vec![
                Timeslot::new(Day::Monday, "09:00", "10:00"),
                Timeslot::new(Day::Monday, "10:00", "11:00"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_domain_size_is_product() {
        let e = entities();
        // C1: 1 instructor x 1 lecture room x 2 slots
        let d = domain_for(e.course("C1").unwrap(), &e);
        assert_eq!(d.len(), 2);
        // C3: 2 instructors x 2 rooms (either type) x 2 slots
        let d3 = domain_for(e.course("C3").unwrap(), &e);
        assert_eq!(d3.len(), 8);
    }

    #[test]
    fn test_domain_empty_without_qualified_instructor() {
        let e = entities();
        let d = domain_for(e.course("C2").unwrap(), &e);
        assert!(d.is_empty());
    }

    #[test]
    fn test_domain_only_compatible_rooms() {
        let e = entities();
        let d = domain_for(e.course("C1").unwrap(), &e);
        assert!(d.iter().all(|c| c.room_id == "R1"));
    }

    #[test]
    fn test_domain_deterministic_order() {
        let e = entities();
        let a = domain_for(e.course("C3").unwrap(), &e);
        let b = domain_for(e.course("C3").unwrap(), &e);
        assert_eq!(a, b);
    }
}
