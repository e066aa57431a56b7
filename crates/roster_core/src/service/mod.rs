//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep HTTP/CLI layers decoupled from storage details.

pub mod classroom_service;
pub mod enrollment_service;
pub mod student_service;
