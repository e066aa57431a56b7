//! Classroom use-case service.
//!
//! # Responsibility
//! - Enforce the classroom name uniqueness workflow (pre-check + constraint).
//! - Provide the student projection for one classroom.
//!
//! # Invariants
//! - `create` never persists when a classroom with the same name exists; the
//!   pre-check is an early exit and the UNIQUE constraint closes the race.
//! - `delete_by_id` uses the same check-then-delete policy as students.

use crate::model::classroom::{Classroom, ClassroomId, NewClassroom};
use crate::model::student::Student;
use crate::repo::classroom_repo::ClassroomRepository;
use crate::repo::enrollment_repo::EnrollmentRepository;
use crate::repo::{ConflictKind, MissingEntity, RepoError, RepoResult};
use log::{info, warn};

/// Use-case service wrapper for classroom operations.
pub struct ClassroomService<C: ClassroomRepository, E: EnrollmentRepository> {
    classrooms: C,
    enrollments: E,
}

impl<C: ClassroomRepository, E: EnrollmentRepository> ClassroomService<C, E> {
    pub fn new(classrooms: C, enrollments: E) -> Self {
        Self {
            classrooms,
            enrollments,
        }
    }

    /// Returns every classroom.
    pub fn list_all(&self) -> RepoResult<Vec<Classroom>> {
        self.classrooms.list_all()
    }

    /// Creates a classroom after empty-name validation and a duplicate-name
    /// check (case-sensitive exact match).
    pub fn create(&self, classroom: &NewClassroom) -> RepoResult<Classroom> {
        classroom.validate()?;

        if self.classrooms.find_by_name(&classroom.name)?.is_some() {
            warn!(
                "event=classroom_create module=service status=conflict name={}",
                classroom.name
            );
            return Err(RepoError::Conflict(ConflictKind::DuplicateClassroomName(
                classroom.name.clone(),
            )));
        }

        let created = self.classrooms.create(classroom)?;
        info!(
            "event=classroom_create module=service status=ok classroom_id={}",
            created.id
        );
        Ok(created)
    }

    /// Deletes one classroom after an existence check.
    ///
    /// Storage cascades deletion of the classroom's enrollments; the
    /// enrolled students themselves are never deleted.
    pub fn delete_by_id(&self, id: ClassroomId) -> RepoResult<()> {
        self.classrooms.delete_by_id(id)?;
        info!(
            "event=classroom_delete module=service status=ok classroom_id={id}"
        );
        Ok(())
    }

    /// Lists the students enrolled in one classroom.
    ///
    /// An existing classroom with no enrollments yields an empty list; an
    /// unknown classroom id yields `NotFound`.
    pub fn list_students(&self, id: ClassroomId) -> RepoResult<Vec<Student>> {
        if self.classrooms.find_by_id(id)?.is_none() {
            return Err(RepoError::NotFound(MissingEntity::Classroom(id)));
        }

        self.enrollments.list_students(id)
    }
}
