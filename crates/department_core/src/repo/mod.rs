//! Repository layer: the mapping between `Department` values and rows.
//!
//! # Responsibility
//! - Own every schema and row-level statement against `departments`.
//! - Keep SQL details out of callers.
//!
//! # Invariants
//! - Each operation is one statement committed by SQLite autocommit.
//! - Driver errors are returned unchanged inside `RepoError::Db`.

pub mod department_repo;
