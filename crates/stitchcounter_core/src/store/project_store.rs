//! Project-list store contract and SQLite implementation.
//!
//! # Responsibility
//! - Load and save the full project list as one JSON value under a fixed key.
//! - Surface storage and corruption failures without masking them.
//!
//! # Invariants
//! - A missing key reads back as an empty list, never an error.
//! - A present but unparseable value is `CorruptData`, propagated to the
//!   caller; the store never falls back silently.
//! - `save` replaces the previous value in a single statement.

use crate::db::DbError;
use crate::model::project::Project;
use crate::store::now_epoch_ms;
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed storage key for the serialized project list. The `v1` suffix is the
/// only schema marker; a layout change means a new key, not an in-place
/// migration of this one.
pub const PROJECTS_KEY: &str = "stitchCounter.projects.v1";

pub type StoreResult<T> = Result<T, StoreError>;

/// Failures surfaced by project-list persistence.
#[derive(Debug)]
pub enum StoreError {
    /// The underlying storage layer could not be read or written.
    Db(DbError),
    /// A value exists under the key but is not a valid serialized list.
    CorruptData {
        key: &'static str,
        source: serde_json::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::CorruptData { key, source } => {
                write!(f, "corrupt data under key `{key}`: {source}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::CorruptData { source, .. } => Some(source),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage contract for the canonical project list.
///
/// Implementations persist the whole list as one unit. Concurrency policy is
/// last-writer-wins: the most recent completed `save` replaces all prior
/// state with no merge.
pub trait ProjectStore {
    /// Reads the full project list; absent key yields an empty list.
    fn load(&self) -> StoreResult<Vec<Project>>;
    /// Serializes and writes the full list, overwriting any previous value.
    fn save(&self, projects: &[Project]) -> StoreResult<()>;
}

/// SQLite-backed store keeping the list as JSON text in the `kv` table.
pub struct SqliteProjectStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProjectStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ProjectStore for SqliteProjectStore<'_> {
    fn load(&self) -> StoreResult<Vec<Project>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1;",
                [PROJECTS_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let Some(raw) = raw else {
            info!("event=store_load module=store status=ok projects=0 source=empty");
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<Project>>(&raw) {
            Ok(projects) => {
                info!(
                    "event=store_load module=store status=ok projects={}",
                    projects.len()
                );
                Ok(projects)
            }
            Err(source) => {
                error!("event=store_load module=store status=error error_code=corrupt_data error={source}");
                Err(StoreError::CorruptData {
                    key: PROJECTS_KEY,
                    source,
                })
            }
        }
    }

    fn save(&self, projects: &[Project]) -> StoreResult<()> {
        let encoded = serde_json::to_string(projects).map_err(|source| {
            // Serialization of in-memory state failing means the blob we
            // would write is already unrepresentable, same class as corrupt.
            StoreError::CorruptData {
                key: PROJECTS_KEY,
                source,
            }
        })?;

        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![PROJECTS_KEY, encoded, now_epoch_ms()],
        )?;

        info!(
            "event=store_save module=store status=ok projects={} bytes={}",
            projects.len(),
            encoded.len()
        );
        Ok(())
    }
}
