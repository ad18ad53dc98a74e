//! Room model.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::error::ModelError;

use super::CourseType;

/// Room capability. A room is a lecture room or a lab, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomType {
    Lecture,
    Lab,
}

impl RoomType {
    /// Whether this room can host the given course kind.
    ///
    /// Lecture courses need lecture rooms, lab courses need labs, and
    /// combined courses accept either.
    pub fn is_compatible_with(self, course_type: CourseType) -> bool {
        match course_type {
            CourseType::Lecture => self == RoomType::Lecture,
            CourseType::Lab => self == RoomType::Lab,
            CourseType::LectureAndLab => true,
        }
    }
}

/// A room courses can be scheduled into.
///
/// Equality and hashing are by [`id`](Self::id). Capacity is carried but
/// not yet constrained against enrollment (reserved attribute).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Capability type.
    pub room_type: RoomType,
    /// Seat capacity (always positive).
    pub capacity: u32,
}

impl Room {
    /// Creates a room, rejecting zero capacity.
    pub fn new(id: impl Into<String>, room_type: RoomType, capacity: u32) -> Result<Self, ModelError> {
        let id = id.into();
        if capacity == 0 {
            return Err(ModelError::InvalidCapacity { room_id: id });
        }
        Ok(Self {
            id,
            room_type,
            capacity,
        })
    }
}

impl PartialEq for Room {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Room {}

impl Hash for Room {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
