//! Services layered over repositories.
//!
//! # Responsibility
//! - Add opt-in behavior on top of the plain record mapper.
//! - Stay storage-agnostic by depending only on `DepartmentRepository`.

pub mod department_registry;
