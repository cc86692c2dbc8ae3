//! Core domain logic for the task list app.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskId, TaskValidationError};
pub use repo::kv_store::{KeyValueStore, SqliteKeyValueStore};
pub use repo::task_repo::{KvTaskListRepository, TaskListRepository, TASK_LIST_KEY};
pub use repo::{RepoError, RepoResult};
pub use service::task_manager::{AddOutcome, TaskListManager, ToggleOutcome};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
