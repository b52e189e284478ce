//! Persistence of the project list as one serialized blob.
//!
//! # Responsibility
//! - Define the storage contract for loading/saving the whole project list.
//! - Generate stable identifiers and creation timestamps.
//!
//! # Invariants
//! - The entire list lives under one fixed key; saves are all-or-nothing.
//! - Every load re-reads storage; every save rewrites the full blob.

use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

pub mod project_store;

pub use project_store::{ProjectStore, SqliteProjectStore, StoreError, StoreResult, PROJECTS_KEY};

/// Generates a fresh opaque identifier for projects and counters.
///
/// UUID v4 rather than a timestamp+random concatenation, so uniqueness does
/// not depend on clock resolution or edit rate.
pub fn make_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current wall-clock time in epoch milliseconds, for `created_at` stamps.
///
/// Clamps to zero if the system clock reports a pre-epoch time.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}
