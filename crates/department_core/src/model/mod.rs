//! Domain model for persisted department records.
//!
//! # Invariants
//! - A value with no id has never been persisted.
//! - An assigned id is owned by the store and never reassigned in memory.

pub mod department;
