//! FFI crate exposing the task list core to the mobile UI host.

pub mod api;
