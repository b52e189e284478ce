//! Pure project-list edits.
//!
//! # Responsibility
//! - Compute a new project list from the current one plus one logical edit.
//! - Keep every edit free of I/O; persistence is the caller's job.
//!
//! # Invariants
//! - Inputs are never modified; every function returns a fresh list.
//! - Counter insertion order is preserved across edits.
//! - Edits targeting an unknown project or counter id return the list
//!   unchanged. Tolerant-update policy: a stale id from the UI is a no-op,
//!   not an error.

use crate::model::project::{Counter, Project};
use crate::store::{make_id, now_epoch_ms};

/// Prepends a new project holding its single default counter.
///
/// The default display name is `Project {N}` where N is the new list size,
/// so the first project a user creates reads "Project 1".
pub fn create_project(projects: &[Project]) -> Vec<Project> {
    let project = Project::new(
        make_id(),
        format!("Project {}", projects.len() + 1),
        make_id(),
        now_epoch_ms(),
    );

    let mut next = Vec::with_capacity(projects.len() + 1);
    next.push(project);
    next.extend_from_slice(projects);
    next
}

/// Removes the project with the given id.
pub fn delete_project(projects: &[Project], project_id: &str) -> Vec<Project> {
    projects
        .iter()
        .filter(|project| project.id != project_id)
        .cloned()
        .collect()
}

/// Sets the display name of the project with the given id.
pub fn rename_project(projects: &[Project], project_id: &str, name: &str) -> Vec<Project> {
    with_project(projects, project_id, |project| {
        project.name = name.to_string();
    })
}

/// Appends a new counter (`Counter {N}`, value 0) to the given project.
pub fn add_counter(projects: &[Project], project_id: &str) -> Vec<Project> {
    with_project(projects, project_id, |project| {
        let name = format!("Counter {}", project.counters.len() + 1);
        project.counters.push(Counter::new(make_id(), name));
    })
}

/// Removes the given counter from its project.
pub fn delete_counter(projects: &[Project], project_id: &str, counter_id: &str) -> Vec<Project> {
    with_project(projects, project_id, |project| {
        project.counters.retain(|counter| counter.id != counter_id);
    })
}

/// Sets the display name of the given counter.
pub fn rename_counter(
    projects: &[Project],
    project_id: &str,
    counter_id: &str,
    name: &str,
) -> Vec<Project> {
    with_counter(projects, project_id, counter_id, |counter| {
        counter.name = name.to_string();
    })
}

/// Adds `delta` to the given counter's value, clamping at zero.
pub fn adjust_counter(
    projects: &[Project],
    project_id: &str,
    counter_id: &str,
    delta: i64,
) -> Vec<Project> {
    with_counter(projects, project_id, counter_id, |counter| {
        counter.adjust(delta);
    })
}

fn with_project(
    projects: &[Project],
    project_id: &str,
    edit: impl FnOnce(&mut Project),
) -> Vec<Project> {
    let mut next = projects.to_vec();
    if let Some(project) = next.iter_mut().find(|project| project.id == project_id) {
        edit(project);
    }
    next
}

fn with_counter(
    projects: &[Project],
    project_id: &str,
    counter_id: &str,
    edit: impl FnOnce(&mut Counter),
) -> Vec<Project> {
    with_project(projects, project_id, |project| {
        if let Some(counter) = project
            .counters
            .iter_mut()
            .find(|counter| counter.id == counter_id)
        {
            edit(counter);
        }
    })
}
