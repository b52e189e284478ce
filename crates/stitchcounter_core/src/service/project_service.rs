//! Project-list controller.
//!
//! # Responsibility
//! - Own the canonical in-memory project list on behalf of UI callers.
//! - Apply one pure edit + one save per user action, in that order.
//!
//! # Invariants
//! - The cached list only advances after the save succeeded; a failed save
//!   leaves the previous state visible and persisted.
//! - Every action performs exactly one full-list save (last-writer-wins).
//! - No retries and no automatic recovery; storage errors propagate.

use crate::model::project::Project;
use crate::mutate;
use crate::store::{ProjectStore, StoreResult};

/// Explicit state holder replacing ad-hoc caller-side globals. Constructed
/// with its store and handed to the UI layer as the single edit surface.
pub struct ProjectService<S: ProjectStore> {
    store: S,
    projects: Vec<Project>,
}

impl<S: ProjectStore> ProjectService<S> {
    /// Creates a service and loads the current list from the store.
    pub fn open(store: S) -> StoreResult<Self> {
        let projects = store.load()?;
        Ok(Self { store, projects })
    }

    /// Re-reads the list from the store, replacing the cached copy.
    pub fn reload(&mut self) -> StoreResult<()> {
        self.projects = self.store.load()?;
        Ok(())
    }

    /// Read view of the cached canonical list, newest project first.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Creates a new project and returns its id for follow-up navigation.
    pub fn create_project(&mut self) -> StoreResult<String> {
        let next = mutate::create_project(&self.projects);
        // New project is always at position 0.
        let id = next[0].id.clone();
        self.commit(next)?;
        Ok(id)
    }

    /// Deletes a project. Unknown id is a no-op (still persisted once).
    pub fn delete_project(&mut self, project_id: &str) -> StoreResult<()> {
        let next = mutate::delete_project(&self.projects, project_id);
        self.commit(next)
    }

    /// Renames a project. Unknown id is a no-op.
    pub fn rename_project(&mut self, project_id: &str, name: &str) -> StoreResult<()> {
        let next = mutate::rename_project(&self.projects, project_id, name);
        self.commit(next)
    }

    /// Appends a counter to the given project.
    pub fn add_counter(&mut self, project_id: &str) -> StoreResult<()> {
        let next = mutate::add_counter(&self.projects, project_id);
        self.commit(next)
    }

    /// Deletes a counter. Unknown ids are a no-op.
    pub fn delete_counter(&mut self, project_id: &str, counter_id: &str) -> StoreResult<()> {
        let next = mutate::delete_counter(&self.projects, project_id, counter_id);
        self.commit(next)
    }

    /// Renames a counter. Unknown ids are a no-op.
    pub fn rename_counter(
        &mut self,
        project_id: &str,
        counter_id: &str,
        name: &str,
    ) -> StoreResult<()> {
        let next = mutate::rename_counter(&self.projects, project_id, counter_id, name);
        self.commit(next)
    }

    /// Adjusts a counter's value by `delta`, clamped at zero.
    pub fn adjust_counter(
        &mut self,
        project_id: &str,
        counter_id: &str,
        delta: i64,
    ) -> StoreResult<()> {
        let next = mutate::adjust_counter(&self.projects, project_id, counter_id, delta);
        self.commit(next)
    }

    fn commit(&mut self, next: Vec<Project>) -> StoreResult<()> {
        self.store.save(&next)?;
        self.projects = next;
        Ok(())
    }
}
