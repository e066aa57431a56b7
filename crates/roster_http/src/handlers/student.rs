//! Student endpoints.
//!
//! - `GET    /student`                    list all students
//! - `POST   /student`                    create a student (201)
//! - `GET    /student/search?studentId=`  find one student
//! - `PUT    /student/update`             full-record update
//! - `DELETE /student/delete?studentId=`  delete with confirmation message

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use roster_core::{NewStudent, SqliteStudentRepository, Student, StudentId, StudentService};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentIdQuery {
    pub student_id: StudentId,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Student>>, ApiError> {
    let conn = state.conn()?;
    let service = StudentService::new(SqliteStudentRepository::new(&conn));
    let students = service.list_all()?;
    Ok(Json(students))
}

pub async fn create(
    State(state): State<AppState>,
    Json(student): Json<NewStudent>,
) -> Result<(StatusCode, Json<Student>), ApiError> {
    let conn = state.conn()?;
    let service = StudentService::new(SqliteStudentRepository::new(&conn));
    let created = service.create(&student)?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<StudentIdQuery>,
) -> Result<Json<Student>, ApiError> {
    let conn = state.conn()?;
    let service = StudentService::new(SqliteStudentRepository::new(&conn));
    let student = service.find_by_id(query.student_id)?;
    Ok(Json(student))
}

pub async fn update(
    State(state): State<AppState>,
    Json(student): Json<Student>,
) -> Result<Json<Student>, ApiError> {
    let conn = state.conn()?;
    let service = StudentService::new(SqliteStudentRepository::new(&conn));
    let updated = service.update(&student)?;
    Ok(Json(updated))
}

pub async fn remove(
    State(state): State<AppState>,
    Query(query): Query<StudentIdQuery>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let conn = state.conn()?;
    let service = StudentService::new(SqliteStudentRepository::new(&conn));
    service.delete_by_id(query.student_id)?;
    Ok((StatusCode::OK, "Student deleted successfully"))
}
