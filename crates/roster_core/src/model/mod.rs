//! Domain model for students, classrooms and enrollments.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Own field-level validation rules shared by insert and update paths.
//!
//! # Invariants
//! - Every domain object is identified by a stable integer id assigned by
//!   storage and never reused.
//! - Enrollments reference exactly one student and one classroom by id.

pub mod classroom;
pub mod enrollment;
pub mod student;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Field-level validation failure detected before any store mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Student name is required and must be non-empty.
    EmptyStudentName,
    /// Student email does not look like an email address.
    InvalidEmail(String),
    /// Phone number must be exactly 10 digits when present.
    InvalidPhoneNumber(String),
    /// Classroom name is required and must be non-empty.
    EmptyClassroomName,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyStudentName => write!(f, "Name cannot be empty"),
            Self::InvalidEmail(value) => {
                write!(f, "Not a valid email address: `{value}`")
            }
            Self::InvalidPhoneNumber(value) => {
                write!(f, "Invalid phone number `{value}` (use only 10 digits)")
            }
            Self::EmptyClassroomName => {
                write!(f, "Classroom name cannot be null or empty")
            }
        }
    }
}

impl Error for ValidationError {}
