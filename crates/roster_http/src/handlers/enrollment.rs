//! Enrollment endpoints.
//!
//! - `GET    /studentclassroom/getAll/{classroomId}`            list rows
//! - `POST   /studentclassroom/add/{studentId}/{classroomId}`   enroll
//! - `DELETE /studentclassroom/remove/{studentId}/{classroomId}` unenroll

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use roster_core::{
    ClassroomId, Enrollment, EnrollmentService, SqliteClassroomRepository,
    SqliteEnrollmentRepository, SqliteStudentRepository, StudentId,
};

fn service(
    conn: &rusqlite::Connection,
) -> EnrollmentService<
    SqliteEnrollmentRepository<'_>,
    SqliteStudentRepository<'_>,
    SqliteClassroomRepository<'_>,
> {
    EnrollmentService::new(
        SqliteEnrollmentRepository::new(conn),
        SqliteStudentRepository::new(conn),
        SqliteClassroomRepository::new(conn),
    )
}

pub async fn list_for_classroom(
    State(state): State<AppState>,
    Path(classroom_id): Path<ClassroomId>,
) -> Result<Json<Vec<Enrollment>>, ApiError> {
    let conn = state.conn()?;
    let enrollments = service(&conn).list_by_classroom(classroom_id)?;
    Ok(Json(enrollments))
}

pub async fn add(
    State(state): State<AppState>,
    Path((student_id, classroom_id)): Path<(StudentId, ClassroomId)>,
) -> Result<Json<Enrollment>, ApiError> {
    let conn = state.conn()?;
    let enrollment = service(&conn).add(student_id, classroom_id)?;
    Ok(Json(enrollment))
}

pub async fn remove(
    State(state): State<AppState>,
    Path((student_id, classroom_id)): Path<(StudentId, ClassroomId)>,
) -> Result<StatusCode, ApiError> {
    let conn = state.conn()?;
    service(&conn).remove(student_id, classroom_id)?;
    Ok(StatusCode::NO_CONTENT)
}
