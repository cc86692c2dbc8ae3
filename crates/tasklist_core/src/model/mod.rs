//! Domain model for the task list.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep one task shape shared by persistence, manager and FFI views.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`, unique within a list.
//! - No task carries empty text.

pub mod task;
