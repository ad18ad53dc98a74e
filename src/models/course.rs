//! Course model.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::error::ModelError;

/// Kind of session a course requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseType {
    /// Requires a lecture room.
    Lecture,
    /// Requires a lab room.
    Lab,
    /// Accepts either room type.
    LectureAndLab,
}

/// A course to be scheduled.
///
/// Immutable once constructed; equality and hashing are by [`id`](Self::id).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Credit count (always positive).
    pub credits: u32,
    /// Session kind, drives room compatibility.
    pub course_type: CourseType,
}

impl Course {
    /// Creates a course, rejecting a zero credit count.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        credits: u32,
        course_type: CourseType,
    ) -> Result<Self, ModelError> {
        let id = id.into();
        if credits == 0 {
            return Err(ModelError::InvalidCredits { course_id: id });
        }
        Ok(Self {
            id,
            name: name.into(),
            credits,
            course_type,
        })
    }
}

impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Course {}

impl Hash for Course {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_new() {
        let c = Course::new("CS101", "Intro to CS", 3, CourseType::Lecture).unwrap();
        assert_eq!(c.id, "CS101");
        assert_eq!(c.credits, 3);
        assert_eq!(c.course_type, CourseType::Lecture);
    }

    #[test]
    fn test_course_zero_credits_rejected() {
        let err = Course::new("CS101", "Intro", 0, CourseType::Lab).unwrap_err();
        assert_eq!(
            err,
            ModelError::InvalidCredits {
                course_id: "CS101".into()
            }
        );
    }

    #[test]
    fn test_course_identity_by_id() {
        let a = Course::new("CS101", "Intro", 3, CourseType::Lecture).unwrap();
        let b = Course::new("CS101", "Renamed", 4, CourseType::Lab).unwrap();
        assert_eq!(a, b);
    }
}
