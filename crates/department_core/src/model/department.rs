//! Department domain model.
//!
//! # Responsibility
//! - Define the in-memory shape mapped onto the `departments` table.
//! - Expose identity state (unassigned vs. store-assigned primary key).
//!
//! # Invariants
//! - `id == None` means no row exists for this value.
//! - Once set by a repository, `id` is never changed by this type.
//! - Local field changes do not reach the row until an explicit update.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Store-assigned primary key (`departments.id`).
pub type DepartmentId = i64;

/// In-memory department record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// `None` until the first successful save.
    pub(crate) id: Option<DepartmentId>,
    pub name: String,
    pub location: String,
}

impl Department {
    /// Creates an unpersisted department.
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            location: location.into(),
        }
    }

    /// Rebuilds a department from an existing row.
    ///
    /// Used by repository read paths; the caller vouches that `id` names a
    /// row that existed when it was read.
    pub fn with_id(
        id: DepartmentId,
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            location: location.into(),
        }
    }

    /// Returns the store-assigned id, if any.
    pub fn id(&self) -> Option<DepartmentId> {
        self.id
    }

    /// Returns whether this value has been written at least once.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub(crate) fn assign_id(&mut self, id: DepartmentId) {
        self.id = Some(id);
    }
}

impl Display for Department {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.id {
            Some(id) => write!(f, "<Department {id}: {}, {}>", self.name, self.location),
            None => write!(f, "<Department None: {}, {}>", self.name, self.location),
        }
    }
}
