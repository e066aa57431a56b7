//! Enrollment use-case service.
//!
//! # Responsibility
//! - Orchestrate the enroll/unenroll workflow across all three
//!   repositories.
//!
//! # Invariants
//! - `add` checks the duplicate pair before resolving either parent, so a
//!   duplicate attempt short-circuits without entity lookups.
//! - `add` either binds both references and persists one row, or persists
//!   nothing.
//! - An enrollment is never edited; it is only created or destroyed.

use crate::model::classroom::ClassroomId;
use crate::model::enrollment::Enrollment;
use crate::model::student::StudentId;
use crate::repo::classroom_repo::ClassroomRepository;
use crate::repo::enrollment_repo::EnrollmentRepository;
use crate::repo::student_repo::StudentRepository;
use crate::repo::{ConflictKind, MissingEntity, RepoError, RepoResult};
use log::{info, warn};

/// Use-case service wrapper for enrollment operations.
pub struct EnrollmentService<E, S, C>
where
    E: EnrollmentRepository,
    S: StudentRepository,
    C: ClassroomRepository,
{
    enrollments: E,
    students: S,
    classrooms: C,
}

impl<E, S, C> EnrollmentService<E, S, C>
where
    E: EnrollmentRepository,
    S: StudentRepository,
    C: ClassroomRepository,
{
    pub fn new(enrollments: E, students: S, classrooms: C) -> Self {
        Self {
            enrollments,
            students,
            classrooms,
        }
    }

    /// Returns all enrollments for one classroom; empty is a valid outcome.
    pub fn list_by_classroom(&self, classroom_id: ClassroomId) -> RepoResult<Vec<Enrollment>> {
        self.enrollments.list_by_classroom(classroom_id)
    }

    /// Enrolls a student in a classroom.
    ///
    /// # Contract
    /// - A pair that is already enrolled is rejected as a conflict before
    ///   either parent is resolved.
    /// - A missing student or classroom is reported as `NotFound` naming the
    ///   entity, student first.
    /// - The UNIQUE pair constraint backs the pre-check, so a concurrent
    ///   duplicate insert still surfaces as a conflict.
    pub fn add(
        &self,
        student_id: StudentId,
        classroom_id: ClassroomId,
    ) -> RepoResult<Enrollment> {
        if self.enrollments.exists_pair(student_id, classroom_id)? {
            warn!(
                "event=enrollment_add module=service status=conflict student_id={student_id} classroom_id={classroom_id}"
            );
            return Err(RepoError::Conflict(ConflictKind::AlreadyEnrolled {
                student_id,
                classroom_id,
            }));
        }

        if self.students.find_by_id(student_id)?.is_none() {
            return Err(RepoError::NotFound(MissingEntity::Student(student_id)));
        }

        if self.classrooms.find_by_id(classroom_id)?.is_none() {
            return Err(RepoError::NotFound(MissingEntity::Classroom(classroom_id)));
        }

        let enrollment = self.enrollments.create(student_id, classroom_id)?;
        info!(
            "event=enrollment_add module=service status=ok enrollment_id={} student_id={student_id} classroom_id={classroom_id}",
            enrollment.id
        );
        Ok(enrollment)
    }

    /// Removes the enrollment for the pair; an absent pair is `NotFound`.
    pub fn remove(&self, student_id: StudentId, classroom_id: ClassroomId) -> RepoResult<()> {
        self.enrollments.delete_by_pair(student_id, classroom_id)?;
        info!(
            "event=enrollment_remove module=service status=ok student_id={student_id} classroom_id={classroom_id}"
        );
        Ok(())
    }
}
