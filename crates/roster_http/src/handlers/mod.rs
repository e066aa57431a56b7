//! Request handlers grouped per entity.

pub mod classroom;
pub mod enrollment;
pub mod student;
