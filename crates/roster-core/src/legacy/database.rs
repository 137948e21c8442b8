//! Vec-backed legacy record store

use crate::record::StudentRecord;

/// Legacy student database.
///
/// Records keep insertion order. Ids are not checked for uniqueness, so
/// duplicates can coexist:
/// - `delete_student_record` removes every record with the id
/// - `update_student_record` only touches the first one
#[derive(Debug, Default)]
pub struct LegacyStudentDatabase {
    records: Vec<StudentRecord>,
}

impl LegacyStudentDatabase {
    /// Create an empty database.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record. Always succeeds, duplicates included.
    pub fn insert_student_record(
        &mut self,
        student_id: i32,
        full_name: &str,
        academic_score: f32,
    ) {
        self.records
            .push(StudentRecord::new(student_id, full_name, academic_score));
    }

    /// Remove all records with `student_id`, keeping the order of the rest.
    ///
    /// Returns the number of records removed; `0` means the id was not found.
    pub fn delete_student_record(&mut self, student_id: i32) -> usize {
        let before = self.records.len();
        self.records.retain(|record| record.id != student_id);
        before - self.records.len()
    }

    /// Overwrite name and score of the first record with `student_id`.
    ///
    /// Returns `false` if no record matched.
    pub fn update_student_record(
        &mut self,
        student_id: i32,
        full_name: &str,
        academic_score: f32,
    ) -> bool {
        match self.records.iter_mut().find(|r| r.id == student_id) {
            Some(record) => {
                record.name = full_name.to_string();
                record.score = academic_score;
                true
            }
            None => false,
        }
    }

    pub fn get_record_count(&self) -> usize {
        self.records.len()
    }

    /// Display strings for every record, in storage order.
    pub fn fetch_all_records(&self) -> Vec<String> {
        self.records.iter().map(ToString::to_string).collect()
    }

    /// Typed view of the stored records.
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn seeded() -> LegacyStudentDatabase {
        let mut db = LegacyStudentDatabase::new();
        db.insert_student_record(1, "Ada", 3.5);
        db.insert_student_record(2, "Grace", 3.9);
        db.insert_student_record(3, "Linus", 2.8);
        db
    }

    #[test]
    fn test_insert_counts() {
        let mut db = LegacyStudentDatabase::new();
        assert_eq!(db.get_record_count(), 0);

        for id in 0..5 {
            db.insert_student_record(id, "Student", 3.0);
            assert_eq!(db.get_record_count(), id as usize + 1);
        }
    }

    #[test]
    fn test_insert_preserves_order() {
        let db = seeded();
        let ids: Vec<i32> = db.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_insert_duplicate_id_keeps_both() {
        let mut db = seeded();
        db.insert_student_record(2, "Grace Again", 1.0);

        assert_eq!(db.get_record_count(), 4);
        let names: Vec<&str> = db
            .records()
            .iter()
            .filter(|r| r.id == 2)
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["Grace", "Grace Again"]);
    }

    #[test]
    fn test_delete() {
        let mut db = seeded();
        assert_eq!(db.delete_student_record(2), 1);
        assert_eq!(
            db.fetch_all_records(),
            vec![
                "ID: 1, Name: Ada, Score: 3.500000".to_string(),
                "ID: 3, Name: Linus, Score: 2.800000".to_string(),
            ]
        );
    }

    #[test]
    fn test_delete_missing() {
        let mut db = seeded();
        assert_eq!(db.delete_student_record(42), 0);
        assert_eq!(db.get_record_count(), 3);
    }

    #[test]
    fn test_delete_on_empty() {
        let mut db = LegacyStudentDatabase::new();
        assert_eq!(db.delete_student_record(1), 0);
        assert_eq!(db.get_record_count(), 0);
    }

    // Delete removes every duplicate while update stops at the first.
    // The asymmetry is inherited behaviour and kept as-is.
    #[test]
    fn test_delete_removes_all_duplicates() {
        let mut db = seeded();
        db.insert_student_record(2, "Grace Again", 1.0);
        db.insert_student_record(2, "Grace Thrice", 1.5);

        assert_eq!(db.delete_student_record(2), 3);
        assert_eq!(db.get_record_count(), 2);
        assert!(db.records().iter().all(|r| r.id != 2));
    }

    #[test]
    fn test_update() {
        let mut db = seeded();
        assert!(db.update_student_record(3, "Linus T.", 3.25));

        let record = &db.records()[2];
        assert_eq!(record.id, 3);
        assert_eq!(record.name, "Linus T.");
        assert_eq!(record.score, 3.25);
    }

    #[test]
    fn test_update_missing() {
        let mut db = seeded();
        assert!(!db.update_student_record(99, "Ghost", 4.0));
        assert_eq!(db.fetch_all_records().len(), 3);
        assert!(db.records().iter().all(|r| r.name != "Ghost"));
    }

    #[test]
    fn test_update_touches_first_duplicate_only() {
        let mut db = LegacyStudentDatabase::new();
        db.insert_student_record(7, "First", 1.0);
        db.insert_student_record(8, "Other", 2.0);
        db.insert_student_record(7, "Second", 3.0);

        assert!(db.update_student_record(7, "Renamed", 4.0));

        assert_eq!(db.records()[0], StudentRecord::new(7, "Renamed", 4.0));
        assert_eq!(db.records()[1], StudentRecord::new(8, "Other", 2.0));
        assert_eq!(db.records()[2], StudentRecord::new(7, "Second", 3.0));
    }

    #[test]
    fn test_fetch_all_empty() {
        let db = LegacyStudentDatabase::new();
        assert!(db.fetch_all_records().is_empty());
    }
}
