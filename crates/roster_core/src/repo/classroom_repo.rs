//! Classroom repository contract and SQLite implementation.
//!
//! # Invariants
//! - Classroom names are unique; the UNIQUE constraint is the authoritative
//!   guard and violations surface as `Conflict`.
//! - Deleting a classroom cascades to its enrollments at the store and never
//!   touches the enrolled students themselves.

use crate::model::classroom::{Classroom, ClassroomId, NewClassroom};
use crate::repo::{is_unique_violation, ConflictKind, MissingEntity, RepoError, RepoResult};
use rusqlite::{Connection, Row};

/// Repository interface for classroom CRUD operations.
pub trait ClassroomRepository {
    fn list_all(&self) -> RepoResult<Vec<Classroom>>;
    /// Persists a new classroom; a duplicate name is a `Conflict`.
    fn create(&self, classroom: &NewClassroom) -> RepoResult<Classroom>;
    fn find_by_id(&self, id: ClassroomId) -> RepoResult<Option<Classroom>>;
    /// Case-sensitive exact-match lookup by name.
    fn find_by_name(&self, name: &str) -> RepoResult<Option<Classroom>>;
    /// Deletes one classroom; absent ids are reported as `NotFound`.
    fn delete_by_id(&self, id: ClassroomId) -> RepoResult<()>;
}

/// SQLite-backed classroom repository.
pub struct SqliteClassroomRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteClassroomRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ClassroomRepository for SqliteClassroomRepository<'_> {
    fn list_all(&self) -> RepoResult<Vec<Classroom>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM classrooms ORDER BY id;")?;
        let mut rows = stmt.query([])?;
        let mut classrooms = Vec::new();

        while let Some(row) = rows.next()? {
            classrooms.push(parse_classroom_row(row)?);
        }

        Ok(classrooms)
    }

    fn create(&self, classroom: &NewClassroom) -> RepoResult<Classroom> {
        classroom.validate()?;

        let result = self.conn.execute(
            "INSERT INTO classrooms (name) VALUES (?1);",
            [classroom.name.as_str()],
        );

        match result {
            Ok(_) => Ok(Classroom {
                id: self.conn.last_insert_rowid(),
                name: classroom.name.clone(),
            }),
            Err(err) if is_unique_violation(&err) => Err(RepoError::Conflict(
                ConflictKind::DuplicateClassroomName(classroom.name.clone()),
            )),
            Err(err) => Err(err.into()),
        }
    }

    fn find_by_id(&self, id: ClassroomId) -> RepoResult<Option<Classroom>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM classrooms WHERE id = ?1;")?;
        let mut rows = stmt.query([id])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(parse_classroom_row(row)?));
        }

        Ok(None)
    }

    fn find_by_name(&self, name: &str) -> RepoResult<Option<Classroom>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM classrooms WHERE name = ?1;")?;
        let mut rows = stmt.query([name])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(parse_classroom_row(row)?));
        }

        Ok(None)
    }

    fn delete_by_id(&self, id: ClassroomId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM classrooms WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(MissingEntity::Classroom(id)));
        }

        Ok(())
    }
}

fn parse_classroom_row(row: &Row<'_>) -> RepoResult<Classroom> {
    Ok(Classroom {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}
