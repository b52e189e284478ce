use std::cell::{Cell, RefCell};

use stitchcounter_core::db::open_db_in_memory;
use stitchcounter_core::{
    Project, ProjectService, ProjectStore, SqliteProjectStore, StoreError, StoreResult,
    DEFAULT_COUNTER_NAME,
};

#[test]
fn service_sequences_each_action_into_one_persisted_state() {
    let conn = open_db_in_memory().unwrap();
    let mut service = ProjectService::open(SqliteProjectStore::new(&conn)).unwrap();
    assert!(service.projects().is_empty());

    let project_id = service.create_project().unwrap();
    assert_eq!(service.projects()[0].id, project_id);
    assert_eq!(service.projects()[0].counters[0].name, DEFAULT_COUNTER_NAME);

    service.add_counter(&project_id).unwrap();
    let counter_id = service.projects()[0].counters[1].id.clone();
    service.adjust_counter(&project_id, &counter_id, -5).unwrap();
    assert_eq!(service.projects()[0].counters[1].value, 0);

    service.rename_project(&project_id, "Blanket").unwrap();

    // Persisted state matches the cached view, action by action.
    let persisted = SqliteProjectStore::new(&conn).load().unwrap();
    assert_eq!(persisted, service.projects());
    assert_eq!(persisted[0].name, "Blanket");
}

#[test]
fn reload_picks_up_state_written_by_another_store_handle() {
    let conn = open_db_in_memory().unwrap();
    let mut service = ProjectService::open(SqliteProjectStore::new(&conn)).unwrap();
    service.create_project().unwrap();

    // Last-writer-wins: a second writer replaces the whole list.
    SqliteProjectStore::new(&conn).save(&[]).unwrap();
    service.reload().unwrap();
    assert!(service.projects().is_empty());
}

#[test]
fn create_project_returns_id_of_new_head() {
    let conn = open_db_in_memory().unwrap();
    let mut service = ProjectService::open(SqliteProjectStore::new(&conn)).unwrap();

    let first = service.create_project().unwrap();
    let second = service.create_project().unwrap();
    assert_eq!(service.projects()[0].id, second);
    assert_eq!(service.projects()[1].id, first);
}

/// In-memory store double whose saves can be made to fail on demand.
struct FlakyStore {
    saved: RefCell<Vec<Project>>,
    fail_next_save: Cell<bool>,
}

impl FlakyStore {
    fn new() -> Self {
        Self {
            saved: RefCell::new(Vec::new()),
            fail_next_save: Cell::new(false),
        }
    }
}

impl ProjectStore for FlakyStore {
    fn load(&self) -> StoreResult<Vec<Project>> {
        Ok(self.saved.borrow().clone())
    }

    fn save(&self, projects: &[Project]) -> StoreResult<()> {
        if self.fail_next_save.take() {
            return Err(StoreError::Db(stitchcounter_core::db::DbError::Sqlite(
                rusqlite::Error::InvalidQuery,
            )));
        }
        *self.saved.borrow_mut() = projects.to_vec();
        Ok(())
    }
}

#[test]
fn failed_save_leaves_cached_state_untouched() {
    let store = FlakyStore::new();
    store.fail_next_save.set(true);
    let mut service = ProjectService::open(store).unwrap();

    let err = service.create_project().unwrap_err();
    assert!(matches!(err, StoreError::Db(_)));
    assert!(service.projects().is_empty());

    // Next action persists normally and the cache advances with it.
    let project_id = service.create_project().unwrap();
    assert_eq!(service.projects()[0].id, project_id);
}
