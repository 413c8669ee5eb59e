//! Relay pipeline
//!
//! Locate the command file, read the command, find the socket, probe it,
//! relay the command and report the outcome. Each step short-circuits to
//! an error dialog; nothing is retried.

mod command_file;

pub use command_file::read_command;

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use crate::common::{config::Config, paths, Error, Result};
use crate::ipc::{DaemonClient, Reply};
use crate::notify::Notifier;

/// Command relayed and no error reported
pub const EXIT_SUCCESS: i32 = 0;

/// Any failure, including errors reported by the daemon
pub const EXIT_FAILURE: i32 = 1;

/// Process inputs the pipeline depends on
#[derive(Debug)]
pub struct Environment {
    /// Result of asking the OS for the running executable's path
    pub current_exe: io::Result<PathBuf>,
    /// Value of `HOME`
    pub home: Option<OsString>,
}

impl Environment {
    /// Capture the inputs of the current process
    pub fn from_process() -> Self {
        Self {
            current_exe: std::env::current_exe(),
            home: std::env::var_os("HOME"),
        }
    }
}

/// Relay the command once and classify the daemon's reply
pub async fn relay(env: Environment, config: &Config) -> Result<Reply> {
    let exe_dir = paths::executable_dir(env.current_exe)?;
    let command_path = paths::command_file_path(&exe_dir);
    tracing::debug!("Reading command from {}", command_path.display());

    let command = read_command(&command_path)?;

    let socket_path = paths::socket_path(env.home.as_deref())?;
    if !paths::socket_exists(&socket_path) {
        return Err(Error::DaemonNotRunning(socket_path));
    }

    let client = DaemonClient::connect(&socket_path).await?;
    let raw = client.relay(&command, config.timeouts.recv()).await?;

    Ok(Reply::interpret(&raw))
}

/// Present the outcome and return the process exit code
pub fn report<N: Notifier + ?Sized>(result: Result<Reply>, title: &str, notifier: &N) -> i32 {
    match result {
        Ok(Reply::Success) => EXIT_SUCCESS,
        Ok(Reply::Failure { message }) => {
            tracing::info!("Daemon reported an error: {}", message);
            notifier.notify(title, &message);
            EXIT_FAILURE
        }
        Err(e) => {
            tracing::warn!("{}", e);
            notifier.dialog(title, e.dialog_message());
            EXIT_FAILURE
        }
    }
}

/// Run the whole pipeline
pub async fn run<N: Notifier + ?Sized>(env: Environment, config: &Config, notifier: &N) -> i32 {
    let result = relay(env, config).await;
    report(result, &config.notify.title, notifier)
}
