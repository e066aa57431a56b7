//! Enrollment repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Own persistence for the student/classroom join table.
//! - Provide the pair-keyed lookups the enrollment workflow depends on.
//!
//! # Invariants
//! - The `(student_id, classroom_id)` UNIQUE constraint is the authoritative
//!   duplicate guard; a violation surfaces as `Conflict`, so a race between
//!   an `exists_pair` pre-check and the insert cannot create two rows.
//! - Enrollment ids are assigned by AUTOINCREMENT and never reused.

use crate::model::classroom::ClassroomId;
use crate::model::enrollment::Enrollment;
use crate::model::student::{Student, StudentId};
use crate::repo::student_repo::parse_student_row;
use crate::repo::{is_unique_violation, ConflictKind, MissingEntity, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

/// Repository interface for enrollment association rows.
pub trait EnrollmentRepository {
    /// Returns all enrollments for one classroom; empty is not an error.
    fn list_by_classroom(&self, classroom_id: ClassroomId) -> RepoResult<Vec<Enrollment>>;
    fn find_by_pair(
        &self,
        student_id: StudentId,
        classroom_id: ClassroomId,
    ) -> RepoResult<Option<Enrollment>>;
    fn exists_pair(&self, student_id: StudentId, classroom_id: ClassroomId) -> RepoResult<bool>;
    /// Inserts the association row; a duplicate pair is a `Conflict`.
    fn create(
        &self,
        student_id: StudentId,
        classroom_id: ClassroomId,
    ) -> RepoResult<Enrollment>;
    /// Deletes the association row for the pair; absent pairs are `NotFound`.
    fn delete_by_pair(&self, student_id: StudentId, classroom_id: ClassroomId) -> RepoResult<()>;
    /// Projects the students enrolled in one classroom.
    fn list_students(&self, classroom_id: ClassroomId) -> RepoResult<Vec<Student>>;
}

/// SQLite-backed enrollment repository.
pub struct SqliteEnrollmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEnrollmentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl EnrollmentRepository for SqliteEnrollmentRepository<'_> {
    fn list_by_classroom(&self, classroom_id: ClassroomId) -> RepoResult<Vec<Enrollment>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, student_id, classroom_id
             FROM enrollments
             WHERE classroom_id = ?1
             ORDER BY id;",
        )?;
        let mut rows = stmt.query([classroom_id])?;
        let mut enrollments = Vec::new();

        while let Some(row) = rows.next()? {
            enrollments.push(parse_enrollment_row(row)?);
        }

        Ok(enrollments)
    }

    fn find_by_pair(
        &self,
        student_id: StudentId,
        classroom_id: ClassroomId,
    ) -> RepoResult<Option<Enrollment>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, student_id, classroom_id
             FROM enrollments
             WHERE student_id = ?1 AND classroom_id = ?2;",
        )?;
        let mut rows = stmt.query(params![student_id, classroom_id])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(parse_enrollment_row(row)?));
        }

        Ok(None)
    }

    fn exists_pair(&self, student_id: StudentId, classroom_id: ClassroomId) -> RepoResult<bool> {
        let mut stmt = self.conn.prepare(
            "SELECT 1 FROM enrollments WHERE student_id = ?1 AND classroom_id = ?2;",
        )?;
        let exists = stmt.exists(params![student_id, classroom_id])?;
        Ok(exists)
    }

    fn create(
        &self,
        student_id: StudentId,
        classroom_id: ClassroomId,
    ) -> RepoResult<Enrollment> {
        let result = self.conn.execute(
            "INSERT INTO enrollments (student_id, classroom_id) VALUES (?1, ?2);",
            params![student_id, classroom_id],
        );

        match result {
            Ok(_) => Ok(Enrollment {
                id: self.conn.last_insert_rowid(),
                student_id,
                classroom_id,
            }),
            Err(err) if is_unique_violation(&err) => {
                Err(RepoError::Conflict(ConflictKind::AlreadyEnrolled {
                    student_id,
                    classroom_id,
                }))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn delete_by_pair(&self, student_id: StudentId, classroom_id: ClassroomId) -> RepoResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM enrollments WHERE student_id = ?1 AND classroom_id = ?2;",
            params![student_id, classroom_id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(MissingEntity::Enrollment {
                student_id,
                classroom_id,
            }));
        }

        Ok(())
    }

    fn list_students(&self, classroom_id: ClassroomId) -> RepoResult<Vec<Student>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                s.id,
                s.name,
                s.email,
                s.address,
                s.phone_number,
                s.birthdate,
                s.grade
             FROM students s
             INNER JOIN enrollments e ON e.student_id = s.id
             WHERE e.classroom_id = ?1
             ORDER BY e.id;",
        )?;
        let mut rows = stmt.query([classroom_id])?;
        let mut students = Vec::new();

        while let Some(row) = rows.next()? {
            students.push(parse_student_row(row)?);
        }

        Ok(students)
    }
}

fn parse_enrollment_row(row: &Row<'_>) -> RepoResult<Enrollment> {
    Ok(Enrollment {
        id: row.get("id")?,
        student_id: row.get("student_id")?,
        classroom_id: row.get("classroom_id")?,
    })
}
