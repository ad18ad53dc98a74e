//! Instructor model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use super::Day;

/// An instructor who can be assigned to courses.
///
/// Day preferences arrive as a structured set of unavailable days; any
/// free-text encoding ("Not on Friday") is the ingestion layer's problem,
/// never parsed here. An instructor with an empty qualification set can
/// teach nothing — courses only they could cover become unschedulable.
///
/// Equality and hashing are by [`id`](Self::id).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instructor {
    /// Unique instructor identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Role tag (e.g. "Professor", "TA"). Informational only.
    pub role: String,
    /// Days this instructor must not be scheduled on.
    pub unavailable_days: BTreeSet<Day>,
    /// Course ids this instructor is qualified to teach.
    pub qualified_courses: BTreeSet<String>,
}

impl Instructor {
    /// Creates an instructor with no qualifications and full availability.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: String::new(),
            unavailable_days: BTreeSet::new(),
            qualified_courses: BTreeSet::new(),
        }
    }

    /// Sets the role tag.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Marks a day as unavailable.
    pub fn with_unavailable_day(mut self, day: Day) -> Self {
        self.unavailable_days.insert(day);
        self
    }

    /// Adds a course qualification.
    pub fn with_qualified_course(mut self, course_id: impl Into<String>) -> Self {
        self.qualified_courses.insert(course_id.into());
        self
    }

    /// Whether this instructor is qualified for the given course.
    pub fn is_qualified_for(&self, course_id: &str) -> bool {
        self.qualified_courses.contains(course_id)
    }

    /// Whether this instructor may be scheduled on the given day.
    pub fn is_available_on(&self, day: Day) -> bool {
        !self.unavailable_days.contains(&day)
    }
}

impl PartialEq for Instructor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Instructor {}

impl Hash for Instructor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instructor_builder() {
        let i = Instructor::new("I1", "Dr. Ada")
            .with_role("Professor")
            .with_unavailable_day(Day::Friday)
            .with_qualified_course("CS101")
            .with_qualified_course("CS202");

        assert_eq!(i.role, "Professor");
        assert!(i.is_qualified_for("CS101"));
        assert!(!i.is_qualified_for("CS999"));
        assert!(i.is_available_on(Day::Monday));
        assert!(!i.is_available_on(Day::Friday));
    }

    #[test]
    fn test_instructor_no_qualifications() {
        let i = Instructor::new("I1", "Dr. Ada");
        assert!(i.qualified_courses.is_empty());
        assert!(!i.is_qualified_for("CS101"));
    }

    #[test]
    fn test_instructor_identity_by_id() {
        let a = Instructor::new("I1", "Ada");
        let b = Instructor::new("I1", "Babbage").with_role("TA");
        assert_eq!(a, b);
    }
}
