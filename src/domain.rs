//! The domain model: courses, classrooms, instructors, slots, and the
//! eligibility index derived from them.
//!
//! Every collection here is built once by the loader and never mutated for
//! the lifetime of a run.

/// A course to be scheduled. `code` is the stable, unique key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub name: String,
    pub code: String,
    pub career: String,
    pub semester: String,
    pub section: String,
    pub kind: String,
}

/// A physical room. `id` is the stable, unique key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classroom {
    pub id: String,
    pub name: String,
}

/// An instructor with a daily availability shift. `registration` is the
/// stable, unique key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instructor {
    pub name: String,
    pub registration: String,
    pub shift_start: String,
    pub shift_end: String,
}

/// A `(instructor, course)` eligibility relation as read from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructorCourse {
    pub instructor_registration: String,
    pub course_code: String,
}

/// A fixed-length 50-minute start-time bucket. Position in the owning slot
/// list is the slot's ordinal; "consecutive" means adjacent ordinals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub start_time: String,
    pub duration_minutes: u32,
}

impl Slot {
    pub fn new(start_time: impl Into<String>) -> Self {
        Slot {
            start_time: start_time.into(),
            duration_minutes: 50,
        }
    }
}

/// The default slot list used when the caller does not override it.
pub fn default_slots() -> Vec<Slot> {
    [
        "13:40", "14:30", "15:20", "16:10", "17:00", "17:50", "18:40", "19:30", "20:20", "21:10",
    ]
    .iter()
    .map(|s| Slot::new(*s))
    .collect()
}

/// `course_ordinal -> eligible instructor ordinals`, precomputed once.
///
/// An empty entry means the course has no eligible instructor at all; the
/// cost evaluator and initializer must tolerate that.
#[derive(Debug, Clone, Default)]
pub struct EligibilityIndex {
    entries: Vec<Vec<usize>>,
}

impl EligibilityIndex {
    pub fn eligible(&self, course_ordinal: usize) -> &[usize] {
        &self.entries[course_ordinal]
    }
}

/// The immutable universe of values a run draws from: the course list (whose
/// indices are the stable course ordinals used throughout the crate), the
/// classroom list, the slot list, the instructor list, and the eligibility
/// index derived from the instructor-course relations.
#[derive(Debug, Clone)]
pub struct Universe {
    pub courses: Vec<Course>,
    pub classrooms: Vec<Classroom>,
    pub instructors: Vec<Instructor>,
    pub slots: Vec<Slot>,
    eligibility: EligibilityIndex,
}

impl Universe {
    /// Builds the universe and its eligibility index from the four loaded
    /// collections: group relations by course, resolve each to its
    /// instructor.
    pub fn new(
        courses: Vec<Course>,
        classrooms: Vec<Classroom>,
        instructors: Vec<Instructor>,
        slots: Vec<Slot>,
        relations: &[InstructorCourse],
    ) -> Self {
        let mut entries = vec![Vec::new(); courses.len()];

        for (course_ordinal, course) in courses.iter().enumerate() {
            for relation in relations.iter().filter(|r| r.course_code == course.code) {
                if let Some(instructor_ordinal) = instructors
                    .iter()
                    .position(|i| i.registration == relation.instructor_registration)
                {
                    if !entries[course_ordinal].contains(&instructor_ordinal) {
                        entries[course_ordinal].push(instructor_ordinal);
                    }
                }
            }
        }

        Universe {
            courses,
            classrooms,
            instructors,
            slots,
            eligibility: EligibilityIndex { entries },
        }
    }

    pub fn eligibility(&self) -> &EligibilityIndex {
        &self.eligibility
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }
}
