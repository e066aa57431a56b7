//! Student repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `students` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths validate model fields before SQL mutations.
//! - Deleting a student cascades to its enrollments at the store
//!   (`ON DELETE CASCADE`), never in application code.

use crate::model::student::{NewStudent, Student, StudentId};
use crate::repo::{MissingEntity, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const STUDENT_SELECT_SQL: &str = "SELECT
    id,
    name,
    email,
    address,
    phone_number,
    birthdate,
    grade
FROM students";

/// Repository interface for student CRUD operations.
pub trait StudentRepository {
    /// Returns every student in insertion order.
    fn list_all(&self) -> RepoResult<Vec<Student>>;
    /// Persists a new student and returns it with the assigned id.
    fn create(&self, student: &NewStudent) -> RepoResult<Student>;
    fn find_by_id(&self, id: StudentId) -> RepoResult<Option<Student>>;
    fn find_by_name(&self, name: &str) -> RepoResult<Option<Student>>;
    /// Replaces the full record for `student.id`; unknown ids are rejected.
    fn update(&self, student: &Student) -> RepoResult<()>;
    /// Deletes one student; absent ids are reported as `NotFound`.
    fn delete_by_id(&self, id: StudentId) -> RepoResult<()>;
}

/// SQLite-backed student repository.
pub struct SqliteStudentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStudentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl StudentRepository for SqliteStudentRepository<'_> {
    fn list_all(&self) -> RepoResult<Vec<Student>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{STUDENT_SELECT_SQL} ORDER BY id;"))?;
        let mut rows = stmt.query([])?;
        let mut students = Vec::new();

        while let Some(row) = rows.next()? {
            students.push(parse_student_row(row)?);
        }

        Ok(students)
    }

    fn create(&self, student: &NewStudent) -> RepoResult<Student> {
        student.validate()?;

        self.conn.execute(
            "INSERT INTO students (name, email, address, phone_number, birthdate, grade)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                student.name.as_str(),
                student.email.as_str(),
                student.address.as_deref(),
                student.phone_number.as_deref(),
                student.birthdate,
                student.grade.as_deref(),
            ],
        )?;

        Ok(Student {
            id: self.conn.last_insert_rowid(),
            name: student.name.clone(),
            email: student.email.clone(),
            address: student.address.clone(),
            phone_number: student.phone_number.clone(),
            birthdate: student.birthdate,
            grade: student.grade.clone(),
        })
    }

    fn find_by_id(&self, id: StudentId) -> RepoResult<Option<Student>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{STUDENT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(parse_student_row(row)?));
        }

        Ok(None)
    }

    fn find_by_name(&self, name: &str) -> RepoResult<Option<Student>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{STUDENT_SELECT_SQL} WHERE name = ?1 ORDER BY id;"))?;
        let mut rows = stmt.query([name])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(parse_student_row(row)?));
        }

        Ok(None)
    }

    fn update(&self, student: &Student) -> RepoResult<()> {
        student.validate()?;

        let changed = self.conn.execute(
            "UPDATE students
             SET
                name = ?1,
                email = ?2,
                address = ?3,
                phone_number = ?4,
                birthdate = ?5,
                grade = ?6
             WHERE id = ?7;",
            params![
                student.name.as_str(),
                student.email.as_str(),
                student.address.as_deref(),
                student.phone_number.as_deref(),
                student.birthdate,
                student.grade.as_deref(),
                student.id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(MissingEntity::Student(student.id)));
        }

        Ok(())
    }

    fn delete_by_id(&self, id: StudentId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM students WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(MissingEntity::Student(id)));
        }

        Ok(())
    }
}

pub(crate) fn parse_student_row(row: &Row<'_>) -> RepoResult<Student> {
    Ok(Student {
        id: row.get("id")?,
        name: row.get("name")?,
        email: row.get("email")?,
        address: row.get("address")?,
        phone_number: row.get("phone_number")?,
        birthdate: row.get("birthdate")?,
        grade: row.get("grade")?,
    })
}
