//! Student use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for core callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Update rejects unknown ids with `NotFound` instead of upserting.

use crate::model::student::{NewStudent, Student, StudentId};
use crate::repo::student_repo::StudentRepository;
use crate::repo::{MissingEntity, RepoError, RepoResult};
use log::info;

/// Use-case service wrapper for student CRUD operations.
pub struct StudentService<R: StudentRepository> {
    repo: R,
}

impl<R: StudentRepository> StudentService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns every student.
    pub fn list_all(&self) -> RepoResult<Vec<Student>> {
        self.repo.list_all()
    }

    /// Validates and persists a new student, returning it with its id.
    pub fn create(&self, student: &NewStudent) -> RepoResult<Student> {
        student.validate()?;
        let created = self.repo.create(student)?;
        info!(
            "event=student_create module=service status=ok student_id={}",
            created.id
        );
        Ok(created)
    }

    /// Resolves one student; an absent id is a `NotFound`, not a fault.
    pub fn find_by_id(&self, id: StudentId) -> RepoResult<Student> {
        self.repo
            .find_by_id(id)?
            .ok_or(RepoError::NotFound(MissingEntity::Student(id)))
    }

    /// Replaces the full record for `student.id`.
    ///
    /// Unknown ids are rejected with `NotFound`; this service deliberately
    /// does not fall back to insert-on-missing.
    pub fn update(&self, student: &Student) -> RepoResult<Student> {
        student.validate()?;
        self.repo.update(student)?;
        info!(
            "event=student_update module=service status=ok student_id={}",
            student.id
        );
        Ok(student.clone())
    }

    /// Deletes one student after an existence check.
    ///
    /// Storage cascades deletion of the student's enrollments.
    pub fn delete_by_id(&self, id: StudentId) -> RepoResult<()> {
        self.repo.delete_by_id(id)?;
        info!(
            "event=student_delete module=service status=ok student_id={id}"
        );
        Ok(())
    }
}
