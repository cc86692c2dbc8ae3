//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical to-do record shared by core, FFI and persistence.
//! - Provide lifecycle helpers for completion toggling.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `text` is non-empty after trimming and immutable after creation.
//! - `done` defaults to `false` for newly created tasks.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable opaque identifier for a task.
///
/// Serialized as a plain string so lists written by earlier app versions
/// (which used millisecond-timestamp ids) load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Generates a fresh collision-resistant id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Validation error for task construction and persisted-state checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Task text is empty or whitespace-only.
    EmptyText,
    /// Task id is an empty string.
    EmptyId,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text cannot be empty"),
            Self::EmptyId => write!(f, "task id cannot be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical to-do record.
///
/// Wire shape is exactly `{id, text, done}` to stay compatible with the
/// persisted slot format consumed by the UI host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable id used for toggle intents and list keying.
    pub id: TaskId,
    /// User-supplied text, stored untrimmed, immutable after creation.
    pub text: String,
    /// Completion state, the only mutable field.
    pub done: bool,
}

impl Task {
    /// Creates a new open task with a generated stable id.
    ///
    /// # Invariants
    /// - `text` must be non-empty after trimming; the stored text keeps the
    ///   caller's original whitespace.
    /// - `done` starts as `false`.
    pub fn new(text: impl Into<String>) -> Result<Self, TaskValidationError> {
        Self::with_id(TaskId::generate(), text)
    }

    /// Creates a task with a caller-provided stable id.
    ///
    /// Used by load paths where identity already exists in the stored slot.
    pub fn with_id(
        id: TaskId,
        text: impl Into<String>,
    ) -> Result<Self, TaskValidationError> {
        let task = Self {
            id,
            text: text.into(),
            done: false,
        };
        task.validate()?;
        Ok(task)
    }

    /// Re-checks model invariants; load paths call this on persisted records.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.as_str().is_empty() {
            return Err(TaskValidationError::EmptyId);
        }
        if self.text.trim().is_empty() {
            return Err(TaskValidationError::EmptyText);
        }
        Ok(())
    }

    /// Flips the completion flag. Calling twice restores the original value.
    pub fn toggle(&mut self) {
        self.done = !self.done;
    }
}
