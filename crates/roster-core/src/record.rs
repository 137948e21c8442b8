//! Student record type

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single student entry as kept by the legacy store.
///
/// Scores are single precision; anything wider is narrowed on the way in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Student number. Not unique: the store accepts duplicates.
    pub id: i32,

    /// Full display name
    pub name: String,

    /// Academic score (GPA)
    pub score: f32,
}

impl StudentRecord {
    pub fn new(id: i32, name: impl Into<String>, score: f32) -> Self {
        Self {
            id,
            name: name.into(),
            score,
        }
    }
}

/// Renders `ID: <id>, Name: <name>, Score: <score>`, score with six decimals.
impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Score: {:.6}",
            self.id, self.name, self.score
        )
    }
}
