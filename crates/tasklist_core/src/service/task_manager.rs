//! Task list manager: session state and mutation entry points.
//!
//! # Responsibility
//! - Own the in-memory task list and the transient input buffer.
//! - Expose the intent-level operations the presentation layer dispatches.
//! - Keep the persisted slot eventually consistent with in-memory state.
//!
//! # Invariants
//! - Task ids stay unique within the list.
//! - Stored order is creation order; `visible_order` never mutates it.
//! - Every successful mutation commits a full-list snapshot before the
//!   mutator returns; a failed commit is logged and dropped, the in-memory
//!   state stands.

use crate::model::task::{Task, TaskId};
use crate::repo::task_repo::TaskListRepository;
use log::warn;

/// Result of an `add_task` intent.
///
/// `Added` doubles as the signal for the host to dismiss the active
/// text-entry focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// A task was appended; carries its fresh id.
    Added(TaskId),
    /// Input buffer was empty after trimming; nothing changed.
    IgnoredEmptyInput,
}

/// Result of a `toggle_task` intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The task's completion flag was flipped to `done`.
    Toggled { done: bool },
    /// No task with the given id exists; nothing changed.
    UnknownId,
}

/// Single-owner state container for the task list session.
///
/// Callers are single-threaded (UI event dispatch), so every operation is
/// atomic with respect to in-memory state.
pub struct TaskListManager<R: TaskListRepository> {
    repo: R,
    tasks: Vec<Task>,
    input: String,
}

impl<R: TaskListRepository> TaskListManager<R> {
    /// Creates a manager with an empty list and empty input buffer.
    ///
    /// Call `load()` once at session start to restore persisted state.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            tasks: Vec::new(),
            input: String::new(),
        }
    }

    /// Restores the task list from the persistence slot.
    ///
    /// # Recovery policy
    /// - Absent slot leaves the list empty.
    /// - Read failure or invalid persisted data degrades to an empty list;
    ///   the failure is logged, never surfaced to the user.
    pub fn load(&mut self) {
        match self.repo.load() {
            Ok(tasks) => {
                self.tasks = tasks;
            }
            Err(err) => {
                warn!(
                    "event=task_list_load module=service status=error recovery=start_empty error={err}"
                );
                self.tasks.clear();
            }
        }
    }

    /// Replaces the input buffer unconditionally. Empty is allowed here;
    /// validation happens at `add_task`.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Current input buffer value, exposed for rendering.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Appends a task built from the input buffer.
    ///
    /// A buffer that trims to empty is silently ignored (no error, no
    /// signal). On success the stored text keeps the buffer's original
    /// whitespace, the buffer is cleared and the list is committed.
    pub fn add_task(&mut self) -> AddOutcome {
        if self.input.trim().is_empty() {
            return AddOutcome::IgnoredEmptyInput;
        }

        // Validation cannot fail past the trim check; a fresh id is never
        // empty. The buffer is only consumed once construction succeeded.
        let task = match Task::new(self.input.clone()) {
            Ok(task) => task,
            Err(err) => {
                warn!("event=task_add module=service status=error error={err}");
                return AddOutcome::IgnoredEmptyInput;
            }
        };

        self.input.clear();
        let id = task.id.clone();
        self.tasks.push(task);
        self.commit("task_add");
        AddOutcome::Added(id)
    }

    /// Flips the completion flag of the task with the given id.
    ///
    /// Unknown ids are a structural no-op: the list is unchanged and no
    /// commit is issued.
    pub fn toggle_task(&mut self, id: &TaskId) -> ToggleOutcome {
        let Some(task) = self.tasks.iter_mut().find(|task| &task.id == id) else {
            return ToggleOutcome::UnknownId;
        };

        task.toggle();
        let done = task.done;
        self.commit("task_toggle");
        ToggleOutcome::Toggled { done }
    }

    /// Task list in stored (creation) order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Task list in display order: most recently added first.
    ///
    /// Read-only projection; stored order is untouched.
    pub fn visible_order(&self) -> Vec<&Task> {
        self.tasks.iter().rev().collect()
    }

    /// Commit hook invoked synchronously after each successful mutation.
    ///
    /// Best-effort by contract: the snapshot write either lands or is
    /// logged and dropped. Last write wins; each commit carries the full
    /// current list.
    fn commit(&self, event: &str) {
        if let Err(err) = self.repo.save(&self.tasks) {
            warn!("event={event} module=service status=write_back_failed error={err}");
        }
    }
}
