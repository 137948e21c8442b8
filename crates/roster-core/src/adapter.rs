//! Adapter exposing the legacy store as a `StudentSystem`
//!
//! Translates the modern calls onto the legacy method names and narrows
//! `f64` GPAs to the store's `f32` scores. Store outcomes are logged here,
//! the store itself stays silent.

use tracing::{debug, info, warn};

use crate::legacy::LegacyStudentDatabase;
use crate::record::StudentRecord;
use crate::system::{Outcome, StudentSystem};

/// Narrow a GPA to the legacy score precision. Lossy.
pub fn narrow_score(gpa: f64) -> f32 {
    gpa as f32
}

/// `StudentSystem` backed by an exclusively owned [`LegacyStudentDatabase`].
#[derive(Debug, Default)]
pub struct StudentSystemAdapter {
    legacy_system: LegacyStudentDatabase,
}

impl StudentSystemAdapter {
    /// Create an adapter over a fresh, empty legacy database.
    pub fn new() -> Self {
        Self {
            legacy_system: LegacyStudentDatabase::new(),
        }
    }

    /// Read-only access to the wrapped store.
    pub fn legacy(&self) -> &LegacyStudentDatabase {
        &self.legacy_system
    }
}

impl StudentSystem for StudentSystemAdapter {
    fn add(&mut self, id: i32, name: &str, gpa: f64) -> Outcome {
        let academic_score = narrow_score(gpa);
        debug!("Narrowed GPA {} to score {}", gpa, academic_score);
        self.legacy_system
            .insert_student_record(id, name, academic_score);
        info!("Legacy system: Added student with ID {}", id);
        Outcome::Applied
    }

    fn remove(&mut self, id: i32) -> Outcome {
        match self.legacy_system.delete_student_record(id) {
            0 => {
                warn!("Legacy system: Student with ID {} not found", id);
                Outcome::NotFound
            }
            removed => {
                if removed > 1 {
                    debug!("Removed {} records sharing ID {}", removed, id);
                }
                info!("Legacy system: Removed student with ID {}", id);
                Outcome::Applied
            }
        }
    }

    fn update(&mut self, id: i32, name: &str, gpa: f64) -> Outcome {
        let academic_score = narrow_score(gpa);
        debug!("Narrowed GPA {} to score {}", gpa, academic_score);
        let outcome = Outcome::from(
            self.legacy_system
                .update_student_record(id, name, academic_score),
        );
        if outcome.is_applied() {
            info!("Legacy system: Updated student with ID {}", id);
        } else {
            warn!("Legacy system: Student with ID {} not found", id);
        }
        outcome
    }

    fn list_all(&self) -> Vec<String> {
        self.legacy_system.fetch_all_records()
    }

    fn total(&self) -> usize {
        self.legacy_system.get_record_count()
    }

    fn snapshot(&self) -> Vec<StudentRecord> {
        self.legacy_system.records().to_vec()
    }
}
