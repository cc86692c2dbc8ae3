//! Task list serialization over the key-value slot.
//!
//! # Responsibility
//! - Load and save the full task list as one JSON array in a single slot.
//! - Validate persisted records before handing them to the manager.
//!
//! # Invariants
//! - The slot holds a JSON array of `{id, text, done}` records in creation
//!   order.
//! - Loaded lists must have unique ids and non-empty text; anything else is
//!   `InvalidData`, never silently repaired here.

use crate::model::task::Task;
use crate::repo::kv_store::KeyValueStore;
use crate::repo::{RepoError, RepoResult};
use std::collections::HashSet;

/// Slot key holding the serialized task list.
///
/// Kept verbatim from the shipped app so existing on-device data loads.
pub const TASK_LIST_KEY: &str = "tarefas";

/// Repository interface for whole-list load/save.
///
/// The manager only ever works with full-list snapshots, so the contract is
/// deliberately coarse; finer-grained persistence stays swappable behind it.
pub trait TaskListRepository {
    fn load(&self) -> RepoResult<Vec<Task>>;
    fn save(&self, tasks: &[Task]) -> RepoResult<()>;
}

/// Key-value-backed task list repository.
pub struct KvTaskListRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> KvTaskListRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access to the underlying slot store, mainly for diagnostics and
    /// tests that assert on the raw persisted payload.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: KeyValueStore> TaskListRepository for KvTaskListRepository<S> {
    fn load(&self) -> RepoResult<Vec<Task>> {
        let raw = match self.store.get(TASK_LIST_KEY)? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };

        let tasks: Vec<Task> = serde_json::from_str(&raw).map_err(|err| {
            RepoError::InvalidData(format!("slot `{TASK_LIST_KEY}` is not a task array: {err}"))
        })?;

        let mut seen_ids = HashSet::new();
        for task in &tasks {
            task.validate()?;
            if !seen_ids.insert(&task.id) {
                return Err(RepoError::InvalidData(format!(
                    "duplicate task id `{}` in slot `{TASK_LIST_KEY}`",
                    task.id
                )));
            }
        }

        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> RepoResult<()> {
        for task in tasks {
            task.validate()?;
        }

        let raw = serde_json::to_string(tasks).map_err(|err| {
            RepoError::InvalidData(format!("failed to serialize task list: {err}"))
        })?;
        self.store.set(TASK_LIST_KEY, &raw)
    }
}
