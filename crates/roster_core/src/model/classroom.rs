//! Classroom domain model.
//!
//! # Invariants
//! - `name` is required, non-empty, and unique across all classrooms
//!   (case-sensitive exact match, backed by a UNIQUE constraint).

use super::ValidationError;
use serde::{Deserialize, Serialize};

/// Stable identifier for a persisted classroom.
pub type ClassroomId = i64;

/// Persisted classroom record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classroom {
    pub id: ClassroomId,
    pub name: String,
}

/// Insert shape for a classroom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClassroom {
    pub name: String,
}

impl NewClassroom {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyClassroomName);
        }
        Ok(())
    }
}
