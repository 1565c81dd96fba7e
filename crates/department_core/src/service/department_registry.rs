//! Opt-in identity cache for departments.
//!
//! # Responsibility
//! - Keep the last known snapshot of each department keyed by id.
//! - Forward every write to the wrapped repository first.
//!
//! # Invariants
//! - A snapshot is cached only after the repository call succeeded.
//! - `delete` always evicts; `drop_table` clears everything.
//! - An `update` that matched no row evicts the stale entry.
//! - Callers that never build a registry get no caching.

use crate::model::department::{Department, DepartmentId};
use crate::repo::department_repo::{DepartmentRepository, RepoResult};
use log::debug;
use std::collections::BTreeMap;

/// Department repository wrapper that remembers persisted values by id.
pub struct DepartmentRegistry<R: DepartmentRepository> {
    repo: R,
    cache: BTreeMap<DepartmentId, Department>,
}

impl<R: DepartmentRepository> DepartmentRegistry<R> {
    /// Wraps `repo` with an empty cache.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            cache: BTreeMap::new(),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn create_table(&mut self) -> RepoResult<()> {
        self.repo.create_table()
    }

    /// Drops the table and forgets every cached department.
    pub fn drop_table(&mut self) -> RepoResult<()> {
        self.repo.drop_table()?;
        self.cache.clear();
        debug!("event=registry_clear module=service status=ok");
        Ok(())
    }

    pub fn save(&mut self, department: &mut Department) -> RepoResult<DepartmentId> {
        let id = self.repo.save(department)?;
        self.cache.insert(id, department.clone());
        Ok(id)
    }

    pub fn create(&mut self, name: &str, location: &str) -> RepoResult<Department> {
        let department = self.repo.create(name, location)?;
        if let Some(id) = department.id() {
            self.cache.insert(id, department.clone());
        }
        Ok(department)
    }

    pub fn update(&mut self, department: &Department) -> RepoResult<bool> {
        let matched = self.repo.update(department)?;
        if let Some(id) = department.id() {
            if matched {
                self.cache.insert(id, department.clone());
            } else {
                self.cache.remove(&id);
            }
        }
        Ok(matched)
    }

    pub fn delete(&mut self, department: &Department) -> RepoResult<bool> {
        let matched = self.repo.delete(department)?;
        if let Some(id) = department.id() {
            self.cache.remove(&id);
            debug!("event=registry_evict module=service status=ok id={id}");
        }
        Ok(matched)
    }

    /// Returns the cached snapshot, loading and caching the row on a miss.
    pub fn find_by_id(&mut self, id: DepartmentId) -> RepoResult<Option<Department>> {
        if let Some(hit) = self.cache.get(&id) {
            return Ok(Some(hit.clone()));
        }

        let loaded = self.repo.find_by_id(id)?;
        if let Some(department) = &loaded {
            self.cache.insert(id, department.clone());
        }
        Ok(loaded)
    }

    /// Returns the cached snapshot without touching the store.
    pub fn cached(&self, id: DepartmentId) -> Option<&Department> {
        self.cache.get(&id)
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    pub fn into_inner(self) -> R {
        self.repo
    }
}
