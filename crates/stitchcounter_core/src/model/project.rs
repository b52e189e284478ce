//! Project and counter domain records.
//!
//! # Responsibility
//! - Define the persisted shape of projects and their counters.
//! - Provide constructors that establish the default-counter lifecycle.
//!
//! # Invariants
//! - `id` values are stable and never reused within their containing scope.
//! - `Counter::value >= 0` at all times; adjustments clamp at zero.
//! - `created_at` is set once at creation and serialized as `createdAt`.

use serde::{Deserialize, Serialize};

/// Name given to the single counter every new project starts with.
pub const DEFAULT_COUNTER_NAME: &str = "Main counter";

/// A named non-negative tally owned by a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    /// Stable opaque identifier, unique within the owning project.
    pub id: String,
    /// User-editable display name.
    pub name: String,
    /// Current tally. Never negative.
    pub value: i64,
}

impl Counter {
    /// Creates a counter starting at zero.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value: 0,
        }
    }

    /// Applies a signed delta, clamping the result at zero.
    ///
    /// `delta` is typically `+1`/`-1` from the UI, but any magnitude is
    /// accepted and the non-negativity invariant still holds.
    pub fn adjust(&mut self, delta: i64) {
        self.value = self.value.saturating_add(delta).max(0);
    }
}

/// A named collection of counters, the top-level persisted entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable opaque identifier, unique within the project list.
    pub id: String,
    /// User-editable display name.
    pub name: String,
    /// Counters in insertion order. Order is preserved across edits.
    pub counters: Vec<Counter>,
    /// Creation time in epoch milliseconds. Immutable after creation.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl Project {
    /// Creates a project with its single default counter.
    ///
    /// # Invariants
    /// - `counters` starts with exactly one counter named
    ///   [`DEFAULT_COUNTER_NAME`] at value 0.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        default_counter_id: impl Into<String>,
        created_at: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            counters: vec![Counter::new(default_counter_id, DEFAULT_COUNTER_NAME)],
            created_at,
        }
    }

    /// Returns the counter with the given id, if present.
    pub fn counter(&self, counter_id: &str) -> Option<&Counter> {
        self.counters.iter().find(|counter| counter.id == counter_id)
    }
}

#[cfg(test)]
mod tests {
    use super::{Counter, Project, DEFAULT_COUNTER_NAME};

    #[test]
    fn new_project_has_single_default_counter() {
        let project = Project::new("p1", "Socks", "c1", 1_700_000_000_000);
        assert_eq!(project.counters.len(), 1);
        assert_eq!(project.counters[0].name, DEFAULT_COUNTER_NAME);
        assert_eq!(project.counters[0].value, 0);
    }

    #[test]
    fn adjust_clamps_at_zero() {
        let mut counter = Counter::new("c1", "Rows");
        counter.adjust(3);
        assert_eq!(counter.value, 3);
        counter.adjust(-5);
        assert_eq!(counter.value, 0);
    }

    #[test]
    fn adjust_saturates_instead_of_overflowing() {
        let mut counter = Counter::new("c1", "Rows");
        counter.value = i64::MAX;
        counter.adjust(1);
        assert_eq!(counter.value, i64::MAX);
    }

    #[test]
    fn counter_lookup_finds_by_id_only() {
        let project = Project::new("p1", "Socks", "c1", 0);
        assert_eq!(project.counter("c1").map(|c| c.name.as_str()), Some(DEFAULT_COUNTER_NAME));
        assert!(project.counter("c2").is_none());
    }

    #[test]
    fn created_at_serializes_in_camel_case() {
        let project = Project::new("p1", "Socks", "c1", 42);
        let json = serde_json::to_value(&project).expect("project should serialize");
        assert_eq!(json["createdAt"], 42);
        assert!(json.get("created_at").is_none());
    }
}
