//! Student system trait definitions

use crate::record::StudentRecord;

/// What happened to a mutating call.
///
/// Not an error: a missing id leaves the roster untouched and the caller
/// carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The roster changed
    Applied,
    /// No record carried the requested id
    NotFound,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

impl From<bool> for Outcome {
    fn from(applied: bool) -> Self {
        if applied {
            Outcome::Applied
        } else {
            Outcome::NotFound
        }
    }
}

/// The interface client code expects from a student roster.
///
/// GPAs come in as `f64`; implementations may store them at lower precision.
pub trait StudentSystem {
    /// Register a student. Always applied.
    fn add(&mut self, id: i32, name: &str, gpa: f64) -> Outcome;

    /// Remove the student(s) with `id`.
    fn remove(&mut self, id: i32) -> Outcome;

    /// Replace name and GPA of the student with `id`.
    fn update(&mut self, id: i32, name: &str, gpa: f64) -> Outcome;

    /// One display line per student, in roster order.
    fn list_all(&self) -> Vec<String>;

    /// Number of students on the roster.
    fn total(&self) -> usize;

    /// Typed copy of the roster, used for structured output.
    ///
    /// Defaults to empty for systems that only expose display lines.
    fn snapshot(&self) -> Vec<StudentRecord> {
        Vec::new()
    }
}
