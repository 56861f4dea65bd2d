//! The availability oracle: is an instructor free at a given slot.
//!
//! Malformed times never bubble up as an error, they simply make the
//! instructor unavailable.

use crate::domain::{Instructor, Slot};
use chrono::NaiveTime;

const TIME_FORMAT: &str = "%H:%M";

/// `shift_start <= slot.start_time` and `slot.start_time + duration <=
/// shift_end`. Any unparseable time (on either side) returns `false`.
pub fn is_available(instructor: &Instructor, slot: &Slot) -> bool {
    let (shift_start, shift_end, slot_start) = match (
        NaiveTime::parse_from_str(&instructor.shift_start, TIME_FORMAT),
        NaiveTime::parse_from_str(&instructor.shift_end, TIME_FORMAT),
        NaiveTime::parse_from_str(&slot.start_time, TIME_FORMAT),
    ) {
        (Ok(a), Ok(b), Ok(c)) => (a, b, c),
        _ => return false,
    };

    let slot_end = slot_start + chrono::Duration::minutes(slot.duration_minutes as i64);

    shift_start <= slot_start && slot_end <= shift_end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instructor(start: &str, end: &str) -> Instructor {
        Instructor {
            name: "Jane".to_string(),
            registration: "R1".to_string(),
            shift_start: start.to_string(),
            shift_end: end.to_string(),
        }
    }

    #[test]
    fn available_within_shift() {
        let ins = instructor("08:00", "17:00");
        assert!(is_available(&ins, &Slot::new("13:40")));
    }

    #[test]
    fn unavailable_before_shift_start() {
        let ins = instructor("15:00", "20:00");
        assert!(!is_available(&ins, &Slot::new("13:40")));
    }

    #[test]
    fn unavailable_when_course_would_run_past_shift_end() {
        let ins = instructor("08:00", "14:00");
        // 13:40 + 50min = 14:30, past the 14:00 shift end.
        assert!(!is_available(&ins, &Slot::new("13:40")));
    }

    #[test]
    fn malformed_time_is_unavailable_not_an_error() {
        let ins = instructor("not-a-time", "17:00");
        assert!(!is_available(&ins, &Slot::new("13:40")));

        let ins = instructor("08:00", "also-not-a-time");
        assert!(!is_available(&ins, &Slot::new("13:40")));
    }

    #[test]
    fn boundary_is_available() {
        let ins = instructor("13:40", "14:30");
        assert!(is_available(&ins, &Slot::new("13:40")));
    }
}
