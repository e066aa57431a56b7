//! Enrollment association model.
//!
//! An enrollment is the join row "student X is enrolled in classroom Y".
//! It is stored as an id-keyed row referencing both parents by id instead of
//! a bidirectional object graph; cascade-delete and back-reference
//! consistency live in the storage schema (foreign keys with ON DELETE
//! CASCADE, UNIQUE pair constraint).
//!
//! # Invariants
//! - The `(student_id, classroom_id)` pair is unique while the enrollment
//!   exists.
//! - Enrollments are only created explicitly and only destroyed explicitly
//!   or by parent deletion; there is no update operation.

use crate::model::classroom::ClassroomId;
use crate::model::student::StudentId;
use serde::{Deserialize, Serialize};

/// Stable identifier for a persisted enrollment.
pub type EnrollmentId = i64;

/// Persisted student/classroom association row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    /// Storage-assigned id; a removed-then-recreated pair gets a fresh id.
    pub id: EnrollmentId,
    pub student_id: StudentId,
    pub classroom_id: ClassroomId,
}
