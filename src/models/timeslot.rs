//! Timeslot and weekday models.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Day of week.
///
/// Ordered Monday through Sunday so per-day reports have a stable layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        };
        f.write_str(name)
    }
}

/// A bookable time window on a specific day.
///
/// Identity (equality and hashing) is by `(day, start)` — two slots on the
/// same day with the same start are the same slot regardless of end time.
/// Timeslots keep their input order throughout a solve; the engine never
/// sorts them by time of day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timeslot {
    /// Day of week.
    pub day: Day,
    /// Start time, e.g. `"09:00"`.
    pub start: String,
    /// End time, e.g. `"10:00"`.
    pub end: String,
}

impl Timeslot {
    /// Creates a timeslot.
    pub fn new(day: Day, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            day,
            start: start.into(),
            end: end.into(),
        }
    }
}

impl PartialEq for Timeslot {
    fn eq(&self, other: &Self) -> bool {
        self.day == other.day && self.start == other.start
    }
}

impl Eq for Timeslot {}

impl Hash for Timeslot {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.day.hash(state);
        self.start.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeslot_identity() {
        let a = Timeslot::new(Day::Monday, "09:00", "10:00");
        let b = Timeslot::new(Day::Monday, "09:00", "10:30");
        let c = Timeslot::new(Day::Tuesday, "09:00", "10:00");
        assert_eq!(a, b); // End time is not part of identity
        assert_ne!(a, c);
    }

    #[test]
    fn test_day_ordering() {
        assert!(Day::Monday < Day::Friday);
        assert!(Day::Saturday < Day::Sunday);
    }

    #[test]
    fn test_day_display() {
        assert_eq!(Day::Wednesday.to_string(), "Wednesday");
    }
}
