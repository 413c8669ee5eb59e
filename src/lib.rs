//! cwm-relay - command relay for cwm shortcuts
//!
//! This library forwards one command read from a file next to the
//! executable to the cwm daemon over its Unix socket, and reports the
//! outcome through desktop dialogs and notifications.

pub mod cli;
pub mod common;
pub mod ipc;
pub mod notify;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use ipc::Reply;
