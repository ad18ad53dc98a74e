//! Timetabling domain models.
//!
//! Immutable value types describing a timetabling problem and its solution.
//! The only behavior here is structural validation at construction and
//! identity-based equality; all scheduling logic lives in
//! [`crate::solver`] and [`crate::constraints`].
//!
//! # Identity
//!
//! | Type | Identity |
//! |------|----------|
//! | [`Course`] / [`Instructor`] / [`Room`] | id |
//! | [`Timeslot`] | (day, start) |
//! | [`Assignment`] | course id (at most one per schedule) |

mod course;
mod instructor;
mod room;
mod schedule;
mod timeslot;

pub use course::{Course, CourseType};
pub use instructor::Instructor;
pub use room::{Room, RoomType};
pub use schedule::{Assignment, Schedule};
pub use timeslot::{Day, Timeslot};
