//! Error types for the relay
//!
//! Every variant is fatal for the invocation. The text shown to the user
//! comes from [`Error::dialog_message`], which carries remediation steps
//! for the daemon-related failures.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Shown when the socket file is absent
pub const DAEMON_NOT_RUNNING_MESSAGE: &str = "cwm daemon is not running.\n\n\
    Start it with:\n  cwm daemon start\n\n\
    Or enable auto-start:\n  cwm daemon install";

/// Shown when the socket exists but the exchange could not be started
pub const CONNECT_FAILED_MESSAGE: &str = "Failed to connect to cwm daemon.\n\n\
    Try restarting it:\n  cwm daemon stop\n  cwm daemon start";

/// Main error type for the relay
#[derive(Error, Debug)]
pub enum Error {
    // === Pre-relay Errors ===
    #[error("Failed to locate own executable: {0}")]
    Locate(#[source] io::Error),

    #[error("Command file not found: {}", .path.display())]
    CommandFileNotFound { path: PathBuf },

    #[error("Failed to read command file '{}': {error}", .path.display())]
    CommandFileRead {
        path: PathBuf,
        #[source]
        error: io::Error,
    },

    #[error("Command file is empty: {}", .path.display())]
    CommandFileEmpty { path: PathBuf },

    #[error("Command is {len} bytes, limit is {max}")]
    CommandTooLong { len: usize, max: usize },

    #[error("HOME is not set, cannot determine socket path")]
    Environment,

    // === Daemon/Connection Errors ===
    #[error("Daemon not running: no socket at {}", .0.display())]
    DaemonNotRunning(PathBuf),

    #[error("Failed to connect to daemon: {0}")]
    Connect(#[source] io::Error),

    #[error("Failed to send command to daemon: {0}")]
    Send(#[source] io::Error),

    // === Configuration Errors ===
    #[error("Failed to read config file '{path}': {error}")]
    Config { path: String, error: String },

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),
}

impl Error {
    /// Text for the blocking error dialog
    pub fn dialog_message(&self) -> &'static str {
        match self {
            Error::Locate(_) => "Failed to locate command file",
            Error::CommandFileNotFound { .. }
            | Error::CommandFileRead { .. }
            | Error::CommandFileEmpty { .. }
            | Error::CommandTooLong { .. } => "Failed to read command file",
            Error::Environment => "Failed to determine socket path",
            Error::DaemonNotRunning(_) => DAEMON_NOT_RUNNING_MESSAGE,
            Error::Connect(_) | Error::Send(_) => CONNECT_FAILED_MESSAGE,
            Error::Config { .. } | Error::ConfigParse(_) => "Failed to load cwm-relay configuration",
        }
    }

    /// Create a command file error, distinguishing a missing file
    pub fn command_file(path: PathBuf, error: io::Error) -> Self {
        if error.kind() == io::ErrorKind::NotFound {
            Self::CommandFileNotFound { path }
        } else {
            Self::CommandFileRead { path, error }
        }
    }
}
