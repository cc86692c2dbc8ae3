//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the presentation intents (input changed, add pressed, toggle
//!   pressed) and render outputs to Dart via FRB.
//! - Keep error semantics simple for UI integration: response envelopes,
//!   never exceptions.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Session state is process-global; intents are dispatched one at a time
//!   by the UI host.

use log::warn;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, OnceLock};
use tasklist_core::db::open_db;
use tasklist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    AddOutcome, KvTaskListRepository, SqliteKeyValueStore, TaskId, TaskListManager, ToggleOutcome,
};

const SESSION_DB_FILE_NAME: &str = "tasklist.sqlite3";

type SessionManager = TaskListManager<KvTaskListRepository<SqliteKeyValueStore>>;

struct Session {
    db_path: PathBuf,
    manager: SessionManager,
}

static SESSION: OnceLock<Mutex<Session>> = OnceLock::new();

fn lock_session() -> Option<MutexGuard<'static, Session>> {
    let mutex = SESSION.get()?;
    // A poisoned lock means a previous caller panicked mid-intent; the
    // manager state is still structurally valid, so keep serving.
    Some(match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    })
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking, UI-thread safe.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Idempotent for the same `level + log_dir`; reconfiguration attempts
///   return an error message.
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Opens the task list session backed by `tasklist.sqlite3` under `data_dir`
/// and restores the persisted list.
///
/// # FFI contract
/// - One session per process; repeated calls with the same directory are
///   idempotent, a different directory returns an error message.
/// - Load failures degrade to an empty list inside core and are not
///   reported here.
/// - Never panics; returns empty string on success.
#[flutter_rust_bridge::frb(sync)]
pub fn open_session(data_dir: String) -> String {
    let db_path = PathBuf::from(data_dir).join(SESSION_DB_FILE_NAME);

    if let Some(session) = lock_session() {
        if session.db_path == db_path {
            return String::new();
        }
        return format!(
            "session already open at `{}`; refusing to switch to `{}`",
            session.db_path.display(),
            db_path.display()
        );
    }

    let conn = match open_db(&db_path) {
        Ok(conn) => conn,
        Err(err) => {
            warn!("event=session_open module=ffi status=error error={err}");
            return format!("failed to open task store: {err}");
        }
    };
    let store = match SqliteKeyValueStore::try_new(conn) {
        Ok(store) => store,
        Err(err) => {
            warn!("event=session_open module=ffi status=error error={err}");
            return format!("failed to attach task store: {err}");
        }
    };

    let mut manager = TaskListManager::new(KvTaskListRepository::new(store));
    manager.load();

    match SESSION.set(Mutex::new(Session {
        db_path: db_path.clone(),
        manager,
    })) {
        Ok(()) => String::new(),
        // Lost a race with another opener; the winning session stands, so
        // report success only when it serves the same path.
        Err(_) => match lock_session() {
            Some(session) if session.db_path == db_path => String::new(),
            Some(session) => format!(
                "session already open at `{}`; refusing to switch to `{}`",
                session.db_path.display(),
                db_path.display()
            ),
            None => String::new(),
        },
    }
}

/// Task row shaped for list rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItemView {
    /// Stable id used for toggle intents and list keying.
    pub id: String,
    /// Task text for display (struck through when `done`).
    pub text: String,
    /// Completion state driving the toggle control.
    pub done: bool,
}

/// Full render output for the single screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListView {
    /// Current input buffer value.
    pub input: String,
    /// Tasks in display order: most recently added first.
    pub tasks: Vec<TaskItemView>,
}

/// Response envelope for the add-pressed intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskResponse {
    /// Whether a task was appended.
    pub ok: bool,
    /// Fresh task id when `ok`.
    pub task_id: Option<String>,
    /// True exactly when the host should dismiss the text-entry focus.
    pub dismiss_keyboard: bool,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Response envelope for the toggle-pressed intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleTaskResponse {
    /// Whether a task was toggled.
    pub ok: bool,
    /// New completion state when `ok`.
    pub done: Option<bool>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Forwards the input-changed intent; replaces the input buffer.
///
/// # FFI contract
/// - Sync call, non-blocking; empty text is allowed.
/// - No-op when no session is open.
#[flutter_rust_bridge::frb(sync)]
pub fn input_changed(text: String) {
    if let Some(mut session) = lock_session() {
        session.manager.set_input(text);
    }
}

/// Forwards the add-pressed intent.
///
/// # FFI contract
/// - Empty (after trimming) input is a silent no-op with `ok = false`.
/// - Persistence is best-effort inside core; a write failure still reports
///   `ok = true`.
#[flutter_rust_bridge::frb(sync)]
pub fn add_pressed() -> AddTaskResponse {
    let Some(mut session) = lock_session() else {
        return AddTaskResponse {
            ok: false,
            task_id: None,
            dismiss_keyboard: false,
            message: "no session open".to_string(),
        };
    };

    match session.manager.add_task() {
        AddOutcome::Added(id) => AddTaskResponse {
            ok: true,
            task_id: Some(id.to_string()),
            dismiss_keyboard: true,
            message: "task added".to_string(),
        },
        AddOutcome::IgnoredEmptyInput => AddTaskResponse {
            ok: false,
            task_id: None,
            dismiss_keyboard: false,
            message: "empty input ignored".to_string(),
        },
    }
}

/// Forwards the toggle-pressed intent for the task with `id`.
///
/// # FFI contract
/// - Unknown ids are a no-op with `ok = false`; the list is unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn task_toggle_pressed(id: String) -> ToggleTaskResponse {
    let Some(mut session) = lock_session() else {
        return ToggleTaskResponse {
            ok: false,
            done: None,
            message: "no session open".to_string(),
        };
    };

    match session.manager.toggle_task(&TaskId::from(id)) {
        ToggleOutcome::Toggled { done } => ToggleTaskResponse {
            ok: true,
            done: Some(done),
            message: "task toggled".to_string(),
        },
        ToggleOutcome::UnknownId => ToggleTaskResponse {
            ok: false,
            done: None,
            message: "unknown task id".to_string(),
        },
    }
}

/// Returns the current render output: input buffer plus the task list in
/// display (reverse-insertion) order.
///
/// # FFI contract
/// - Read-only; never mutates session state.
/// - Returns an empty view when no session is open.
#[flutter_rust_bridge::frb(sync)]
pub fn task_list_view() -> TaskListView {
    let Some(session) = lock_session() else {
        return TaskListView {
            input: String::new(),
            tasks: Vec::new(),
        };
    };

    TaskListView {
        input: session.manager.input().to_owned(),
        tasks: session
            .manager
            .visible_order()
            .into_iter()
            .map(|task| TaskItemView {
                id: task.id.to_string(),
                text: task.text.clone(),
                done: task.done,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ping_and_version_are_stable() {
        assert_eq!(ping(), "pong");
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_relative_log_dir() {
        let error = init_logging("info".to_string(), "logs/dev".to_string());
        assert!(error.contains("absolute"));
    }

    // The session is process-global, so the whole intent contract is walked
    // in one test: pre-session envelopes first, then open, then the
    // input -> add -> toggle -> view flow.
    #[test]
    fn session_intents_end_to_end() {
        let no_session_add = add_pressed();
        assert!(!no_session_add.ok);
        assert!(!no_session_add.dismiss_keyboard);
        assert_eq!(no_session_add.task_id, None);
        assert_eq!(no_session_add.message, "no session open");

        let no_session_toggle = task_toggle_pressed("any-id".to_string());
        assert!(!no_session_toggle.ok);
        assert_eq!(no_session_toggle.done, None);

        let empty_view = task_list_view();
        assert_eq!(empty_view.input, "");
        assert!(empty_view.tasks.is_empty());

        // Dropped silently when no session exists.
        input_changed("before open".to_string());

        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().to_str().unwrap().to_string();
        assert_eq!(open_session(data_dir.clone()), "");
        assert_eq!(open_session(data_dir), "");

        let other_dir = tempfile::tempdir().unwrap();
        let switch_error = open_session(other_dir.path().to_str().unwrap().to_string());
        assert!(switch_error.contains("refusing to switch"));

        let view = task_list_view();
        assert_eq!(view.input, "");
        assert!(view.tasks.is_empty());

        input_changed("   ".to_string());
        let ignored = add_pressed();
        assert!(!ignored.ok);
        assert!(!ignored.dismiss_keyboard);
        assert_eq!(task_list_view().input, "   ");

        input_changed("Buy milk".to_string());
        let added_milk = add_pressed();
        assert!(added_milk.ok);
        assert!(added_milk.dismiss_keyboard);
        let milk_id = added_milk.task_id.expect("added task carries its id");

        input_changed("Walk dog".to_string());
        let added_dog = add_pressed();
        assert!(added_dog.ok);
        assert_ne!(added_dog.task_id.as_deref(), Some(milk_id.as_str()));

        let view = task_list_view();
        assert_eq!(view.input, "");
        let texts: Vec<&str> = view.tasks.iter().map(|task| task.text.as_str()).collect();
        assert_eq!(texts, ["Walk dog", "Buy milk"]);
        assert!(view.tasks.iter().all(|task| !task.done));

        let toggled = task_toggle_pressed(milk_id.clone());
        assert!(toggled.ok);
        assert_eq!(toggled.done, Some(true));

        let view = task_list_view();
        assert!(!view.tasks[0].done, "Walk dog stays open");
        assert!(view.tasks[1].done, "Buy milk is completed");

        let unknown = task_toggle_pressed("no-such-id".to_string());
        assert!(!unknown.ok);
        assert_eq!(unknown.done, None);
        assert_eq!(task_list_view().tasks.len(), 2);
    }
}
