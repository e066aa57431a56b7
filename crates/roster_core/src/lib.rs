//! Core domain logic for Roster.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::classroom::{Classroom, ClassroomId, NewClassroom};
pub use model::enrollment::{Enrollment, EnrollmentId};
pub use model::student::{NewStudent, Student, StudentId};
pub use model::ValidationError;
pub use repo::classroom_repo::{ClassroomRepository, SqliteClassroomRepository};
pub use repo::enrollment_repo::{EnrollmentRepository, SqliteEnrollmentRepository};
pub use repo::student_repo::{SqliteStudentRepository, StudentRepository};
pub use repo::{ConflictKind, MissingEntity, RepoError, RepoResult};
pub use service::classroom_service::ClassroomService;
pub use service::enrollment_service::EnrollmentService;
pub use service::student_service::StudentService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
