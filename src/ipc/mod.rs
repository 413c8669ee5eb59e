//! IPC with the cwm daemon
//!
//! Uses Unix domain sockets via the interprocess crate.

pub mod client;
pub mod protocol;
pub mod transport;

pub use client::DaemonClient;
pub use protocol::Reply;
