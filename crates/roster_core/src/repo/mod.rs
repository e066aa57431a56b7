//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts per entity.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repository writes validate model fields before SQL mutations.
//! - Repository APIs return semantic errors (`NotFound`, `Conflict`) in
//!   addition to DB transport errors.
//! - UNIQUE constraint violations surface as `Conflict`, never as a raw
//!   storage fault.

pub mod classroom_repo;
pub mod enrollment_repo;
pub mod student_repo;

use crate::db::DbError;
use crate::model::classroom::ClassroomId;
use crate::model::student::StudentId;
use crate::model::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Identifies which entity a lookup failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingEntity {
    Student(StudentId),
    Classroom(ClassroomId),
    Enrollment {
        student_id: StudentId,
        classroom_id: ClassroomId,
    },
}

impl Display for MissingEntity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Student(id) => write!(f, "Student not found with ID: {id}"),
            Self::Classroom(id) => write!(f, "Classroom not found with ID: {id}"),
            Self::Enrollment {
                student_id,
                classroom_id,
            } => write!(
                f,
                "Enrollment not found for student {student_id} in classroom {classroom_id}"
            ),
        }
    }
}

/// Rejected operation that would have violated a uniqueness rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictKind {
    /// A classroom with this exact name already exists.
    DuplicateClassroomName(String),
    /// The student is already enrolled in the classroom.
    AlreadyEnrolled {
        student_id: StudentId,
        classroom_id: ClassroomId,
    },
}

impl Display for ConflictKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateClassroomName(_) => {
                write!(f, "Classroom with the same name already exists")
            }
            Self::AlreadyEnrolled { .. } => write!(f, "Student already in the classroom"),
        }
    }
}

/// Generic repository error for roster persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    Conflict(ConflictKind),
    NotFound(MissingEntity),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Conflict(kind) => write!(f, "{kind}"),
            Self::NotFound(entity) => write!(f, "{entity}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Conflict(_) | Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Detects a UNIQUE (or primary key) constraint violation.
///
/// The schema's uniqueness constraints are the authoritative guard for
/// duplicate classroom names and duplicate enrollment pairs; callers map a
/// positive result to `RepoError::Conflict`.
pub(crate) fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(inner, _)
            if inner.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                || inner.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
    )
}
