//! Client working purely against the `StudentSystem` interface

use std::io::Write;

use crate::system::{Outcome, RosterResult, StudentSystem};

/// Student management front end.
///
/// Borrows the system it drives; it never sees the legacy store.
pub struct StudentManagementClient<'a> {
    system: &'a mut dyn StudentSystem,
}

impl<'a> StudentManagementClient<'a> {
    pub fn new(system: &'a mut dyn StudentSystem) -> Self {
        Self { system }
    }

    pub fn register_new_student(&mut self, id: i32, name: &str, gpa: f64) -> Outcome {
        self.system.add(id, name, gpa)
    }

    pub fn remove_student(&mut self, id: i32) -> Outcome {
        self.system.remove(id)
    }

    pub fn update_student_details(&mut self, id: i32, name: &str, gpa: f64) -> Outcome {
        self.system.update(id, name, gpa)
    }

    pub fn total_students(&self) -> usize {
        self.system.total()
    }

    /// Write `Total Students: N` followed by one line per student.
    pub fn display_all_students(&self, out: &mut dyn Write) -> RosterResult<()> {
        writeln!(out, "Total Students: {}", self.system.total())?;
        for info in self.system.list_all() {
            writeln!(out, "{}", info)?;
        }
        Ok(())
    }

    /// Write the roster as a pretty-printed JSON array.
    pub fn write_snapshot_json(&self, out: &mut dyn Write) -> RosterResult<()> {
        let snapshot = self.system.snapshot();
        serde_json::to_writer_pretty(&mut *out, &snapshot)?;
        writeln!(out)?;
        Ok(())
    }
}
