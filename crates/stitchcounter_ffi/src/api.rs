//! FFI use-case API for UI-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to the UI layer via FRB.
//! - Keep error semantics simple: envelopes with `ok` + message, no throws.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Every mutation call performs exactly one load, one edit, one save.
//! - Confirmation of destructive actions is the UI's job; deletes here are
//!   unconditional.

use log::info;
use stitchcounter_core::db::open_db;
use stitchcounter_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Counter, Project, ProjectService, SqliteProjectStore,
};
use std::path::PathBuf;
use std::sync::OnceLock;

const DB_FILE_NAME: &str = "stitchcounter.sqlite3";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Idempotent for the same `level + log_dir`; reconfiguration is rejected.
/// - Never panics; returns empty string on success, error message otherwise.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Counter snapshot handed to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSnapshot {
    pub counter_id: String,
    pub name: String,
    pub value: i64,
}

/// Project snapshot handed to the UI, counters in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSnapshot {
    pub project_id: String,
    pub name: String,
    pub created_at_epoch_ms: i64,
    pub counters: Vec<CounterSnapshot>,
}

/// Envelope for list reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectListResponse {
    /// Whether the read succeeded. On `false`, `projects` is empty.
    pub ok: bool,
    /// Projects newest-first (creation order).
    pub projects: Vec<ProjectSnapshot>,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
}

/// Envelope for mutation calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectActionResponse {
    /// Whether the operation was applied and persisted.
    pub ok: bool,
    /// Set when the operation created a project.
    pub project_id: Option<String>,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
}

impl ProjectActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            project_id: None,
            message: message.into(),
        }
    }

    fn created(message: impl Into<String>, project_id: String) -> Self {
        Self {
            ok: true,
            project_id: Some(project_id),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            project_id: None,
            message: message.into(),
        }
    }
}

/// Reads the full project list.
///
/// # FFI contract
/// - Sync call, storage-backed execution.
/// - Never panics; storage and corruption failures become `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn project_list() -> ProjectListResponse {
    match with_service(|service| Ok(service.projects().iter().map(to_snapshot).collect::<Vec<_>>())) {
        Ok(projects) => {
            let message = format!("{} project(s).", projects.len());
            ProjectListResponse {
                ok: true,
                projects,
                message,
            }
        }
        Err(err) => ProjectListResponse {
            ok: false,
            projects: Vec::new(),
            message: format!("project_list failed: {err}"),
        },
    }
}

/// Creates a project with its default counter and returns its id.
#[flutter_rust_bridge::frb(sync)]
pub fn project_create() -> ProjectActionResponse {
    match with_service(|service| service.create_project().map_err(|err| err.to_string())) {
        Ok(project_id) => ProjectActionResponse::created("Project created.", project_id),
        Err(err) => ProjectActionResponse::failure(format!("project_create failed: {err}")),
    }
}

/// Deletes a project. Unknown id is a silent no-op.
#[flutter_rust_bridge::frb(sync)]
pub fn project_delete(project_id: String) -> ProjectActionResponse {
    run_action("project_delete", "Project deleted.", |service| {
        service.delete_project(&project_id)
    })
}

/// Renames a project. Unknown id is a silent no-op.
#[flutter_rust_bridge::frb(sync)]
pub fn project_rename(project_id: String, name: String) -> ProjectActionResponse {
    run_action("project_rename", "Project renamed.", |service| {
        service.rename_project(&project_id, name.trim())
    })
}

/// Appends a counter to a project.
#[flutter_rust_bridge::frb(sync)]
pub fn counter_add(project_id: String) -> ProjectActionResponse {
    run_action("counter_add", "Counter added.", |service| {
        service.add_counter(&project_id)
    })
}

/// Deletes a counter. Unknown ids are a silent no-op.
#[flutter_rust_bridge::frb(sync)]
pub fn counter_delete(project_id: String, counter_id: String) -> ProjectActionResponse {
    run_action("counter_delete", "Counter deleted.", |service| {
        service.delete_counter(&project_id, &counter_id)
    })
}

/// Renames a counter. Unknown ids are a silent no-op.
#[flutter_rust_bridge::frb(sync)]
pub fn counter_rename(
    project_id: String,
    counter_id: String,
    name: String,
) -> ProjectActionResponse {
    run_action("counter_rename", "Counter renamed.", |service| {
        service.rename_counter(&project_id, &counter_id, name.trim())
    })
}

/// Adjusts a counter by `delta` (typically +1/-1), clamping at zero.
#[flutter_rust_bridge::frb(sync)]
pub fn counter_adjust(
    project_id: String,
    counter_id: String,
    delta: i64,
) -> ProjectActionResponse {
    run_action("counter_adjust", "Counter adjusted.", |service| {
        service.adjust_counter(&project_id, &counter_id, delta)
    })
}

fn run_action(
    name: &str,
    success_message: &str,
    action: impl FnOnce(
        &mut ProjectService<SqliteProjectStore<'_>>,
    ) -> stitchcounter_core::StoreResult<()>,
) -> ProjectActionResponse {
    match with_service(|service| action(service).map_err(|err| err.to_string())) {
        Ok(()) => ProjectActionResponse::success(success_message),
        Err(err) => ProjectActionResponse::failure(format!("{name} failed: {err}")),
    }
}

fn with_service<T>(
    f: impl FnOnce(&mut ProjectService<SqliteProjectStore<'_>>) -> Result<T, String>,
) -> Result<T, String> {
    let db_path = resolve_db_path();
    let conn = open_db(&db_path).map_err(|err| format!("db open failed: {err}"))?;
    let mut service = ProjectService::open(SqliteProjectStore::new(&conn))
        .map_err(|err| format!("store load failed: {err}"))?;
    f(&mut service)
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            let path = std::env::var("STITCHCOUNTER_DB_PATH")
                .ok()
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
                .map_or_else(|| std::env::temp_dir().join(DB_FILE_NAME), PathBuf::from);
            info!(
                "event=db_path_resolved module=ffi status=ok path={}",
                path.display()
            );
            path
        })
        .clone()
}

fn to_snapshot(project: &Project) -> ProjectSnapshot {
    ProjectSnapshot {
        project_id: project.id.clone(),
        name: project.name.clone(),
        created_at_epoch_ms: project.created_at,
        counters: project.counters.iter().map(counter_snapshot).collect(),
    }
}

fn counter_snapshot(counter: &Counter) -> CounterSnapshot {
    CounterSnapshot {
        counter_id: counter.id.clone(),
        name: counter.name.clone(),
        value: counter.value,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, counter_add, counter_adjust, counter_delete, init_logging, ping,
        project_create, project_delete, project_list,
    };

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn full_project_flow_round_trips_through_the_envelope_api() {
        let created = project_create();
        assert!(created.ok, "{}", created.message);
        let project_id = created
            .project_id
            .clone()
            .expect("created project should return its id");

        let added = counter_add(project_id.clone());
        assert!(added.ok, "{}", added.message);

        let listed = project_list();
        assert!(listed.ok, "{}", listed.message);
        let project = listed
            .projects
            .iter()
            .find(|snapshot| snapshot.project_id == project_id)
            .expect("created project should be listed");
        assert_eq!(project.counters.len(), 2);

        let second_counter = project.counters[1].counter_id.clone();
        let adjusted = counter_adjust(project_id.clone(), second_counter.clone(), -5);
        assert!(adjusted.ok, "{}", adjusted.message);

        let listed = project_list();
        let project = listed
            .projects
            .iter()
            .find(|snapshot| snapshot.project_id == project_id)
            .expect("project should still be listed");
        assert_eq!(project.counters[1].value, 0);

        let removed = counter_delete(project_id.clone(), second_counter);
        assert!(removed.ok, "{}", removed.message);

        let cleaned = project_delete(project_id.clone());
        assert!(cleaned.ok, "{}", cleaned.message);
        let listed = project_list();
        assert!(listed
            .projects
            .iter()
            .all(|snapshot| snapshot.project_id != project_id));
    }

    #[test]
    fn deleting_unknown_project_is_a_tolerated_no_op() {
        let response = project_delete("not-a-real-id".to_string());
        assert!(response.ok, "{}", response.message);
    }
}
