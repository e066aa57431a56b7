//! Student domain model.
//!
//! # Responsibility
//! - Define the persisted student record and its insert shape.
//! - Validate required/optional field formats before persistence.
//!
//! # Invariants
//! - `name` and `email` are required; `email` must match a basic address
//!   shape.
//! - `phone_number` is exactly 10 digits when present.

use super::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Stable identifier for a persisted student.
pub type StudentId = i64;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern must compile")
});

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern must compile"));

/// Persisted student record.
///
/// Serialized field names follow the external camelCase wire format
/// (`phoneNumber`), matching what API consumers already expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Storage-assigned id, never reused for another student.
    pub id: StudentId,
    pub name: String,
    pub email: String,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    /// Optional date of birth (ISO `YYYY-MM-DD` on the wire).
    pub birthdate: Option<NaiveDate>,
    pub grade: Option<String>,
}

/// Insert shape for a student: everything except the storage-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub birthdate: Option<NaiveDate>,
    #[serde(default)]
    pub grade: Option<String>,
}

impl Student {
    /// Checks field formats shared with the insert shape.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_student_fields(&self.name, &self.email, self.phone_number.as_deref())
    }
}

impl NewStudent {
    /// Checks field formats before the record is handed to storage.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_student_fields(&self.name, &self.email, self.phone_number.as_deref())
    }
}

fn validate_student_fields(
    name: &str,
    email: &str,
    phone_number: Option<&str>,
) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyStudentName);
    }

    if !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationError::InvalidEmail(email.to_string()));
    }

    if let Some(phone) = phone_number {
        if !PHONE_PATTERN.is_match(phone) {
            return Err(ValidationError::InvalidPhoneNumber(phone.to_string()));
        }
    }

    Ok(())
}
