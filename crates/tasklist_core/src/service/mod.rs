//! Core use-case services.
//!
//! # Responsibility
//! - Own session state and orchestrate repository calls into use-case APIs.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod task_manager;
