//! REST surface for the roster core.
//!
//! # Responsibility
//! - Bind HTTP verbs/paths to core entity and association operations.
//! - Translate domain outcomes into status codes and response bodies.
//!
//! # Invariants
//! - Handlers are stateless and request-scoped; the only shared mutable
//!   resource is the backing store connection.
//! - Domain error taxonomy maps to exactly one status code per kind.

pub mod error;
pub mod handlers;
pub mod state;

use axum::routing::{delete, get, post, put};
use axum::Router;
use state::AppState;

/// Builds the full application router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/classroom",
            get(handlers::classroom::list).post(handlers::classroom::create),
        )
        .route("/classroom/:classroom_id", delete(handlers::classroom::remove))
        .route(
            "/classroom/:classroom_id/students",
            get(handlers::classroom::students),
        )
        .route(
            "/student",
            get(handlers::student::list).post(handlers::student::create),
        )
        .route("/student/search", get(handlers::student::search))
        .route("/student/update", put(handlers::student::update))
        .route("/student/delete", delete(handlers::student::remove))
        .route(
            "/studentclassroom/getAll/:classroom_id",
            get(handlers::enrollment::list_for_classroom),
        )
        .route(
            "/studentclassroom/add/:student_id/:classroom_id",
            post(handlers::enrollment::add),
        )
        .route(
            "/studentclassroom/remove/:student_id/:classroom_id",
            delete(handlers::enrollment::remove),
        )
        .with_state(state)
}
