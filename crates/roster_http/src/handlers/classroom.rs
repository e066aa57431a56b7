//! Classroom endpoints.
//!
//! - `GET    /classroom`                list all classrooms
//! - `POST   /classroom`                create (400 empty name, 409 dup)
//! - `DELETE /classroom/{id}`           delete, cascading enrollments
//! - `GET    /classroom/{id}/students`  students enrolled in the classroom

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use roster_core::{
    Classroom, ClassroomId, ClassroomService, NewClassroom, SqliteClassroomRepository,
    SqliteEnrollmentRepository, Student,
};

fn service(
    conn: &rusqlite::Connection,
) -> ClassroomService<SqliteClassroomRepository<'_>, SqliteEnrollmentRepository<'_>> {
    ClassroomService::new(
        SqliteClassroomRepository::new(conn),
        SqliteEnrollmentRepository::new(conn),
    )
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Classroom>>, ApiError> {
    let conn = state.conn()?;
    let classrooms = service(&conn).list_all()?;
    Ok(Json(classrooms))
}

pub async fn create(
    State(state): State<AppState>,
    Json(classroom): Json<NewClassroom>,
) -> Result<Json<Classroom>, ApiError> {
    let conn = state.conn()?;
    let created = service(&conn).create(&classroom)?;
    Ok(Json(created))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(classroom_id): Path<ClassroomId>,
) -> Result<StatusCode, ApiError> {
    let conn = state.conn()?;
    service(&conn).delete_by_id(classroom_id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn students(
    State(state): State<AppState>,
    Path(classroom_id): Path<ClassroomId>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let conn = state.conn()?;
    let students = service(&conn).list_students(classroom_id)?;
    Ok(Json(students))
}
