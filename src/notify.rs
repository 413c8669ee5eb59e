//! User-facing dialogs and notifications
//!
//! The relay has no terminal, so failures surface through the desktop:
//! a blocking dialog for anything that stopped the command from reaching
//! the daemon, and a notification when the daemon itself reported an error.

use std::process::{Command, Stdio};

/// Presentation capability used by the pipeline
pub trait Notifier {
    /// Show a modal dialog and wait until it is dismissed
    fn dialog(&self, title: &str, message: &str);

    /// Post a notification without waiting for it
    fn notify(&self, title: &str, message: &str);
}

/// Notifier backed by the platform's presenters
///
/// macOS uses `osascript`; other systems use `zenity` for dialogs and
/// `notify-send` for notifications. Presenter failures are logged and
/// otherwise ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsNotifier;

impl Notifier for OsNotifier {
    fn dialog(&self, title: &str, message: &str) {
        let mut command = dialog_command(title, message);
        match command.status() {
            Ok(status) => tracing::debug!("Dialog closed with {}", status),
            Err(e) => tracing::warn!("Failed to show dialog: {}", e),
        }
    }

    fn notify(&self, title: &str, message: &str) {
        let mut command = notification_command(title, message);
        if let Err(e) = command.spawn() {
            tracing::warn!("Failed to post notification: {}", e);
        }
    }
}

/// Notifier that shows nothing (`notify.enabled = false`)
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn dialog(&self, title: &str, message: &str) {
        tracing::debug!("Suppressed dialog '{}': {}", title, message);
    }

    fn notify(&self, title: &str, message: &str) {
        tracing::debug!("Suppressed notification '{}': {}", title, message);
    }
}

#[cfg(target_os = "macos")]
fn dialog_command(title: &str, message: &str) -> Command {
    osascript(format!(
        "display dialog {} buttons {{\"OK\"}} default button \"OK\" with title {}",
        applescript_string(message),
        applescript_string(title)
    ))
}

#[cfg(target_os = "macos")]
fn notification_command(title: &str, message: &str) -> Command {
    osascript(format!(
        "display notification {} with title {}",
        applescript_string(message),
        applescript_string(title)
    ))
}

#[cfg(target_os = "macos")]
fn osascript(script: String) -> Command {
    let mut command = Command::new("osascript");
    command.arg("-e").arg(script);
    quiet(command)
}

#[cfg(not(target_os = "macos"))]
fn dialog_command(title: &str, message: &str) -> Command {
    let mut command = Command::new("zenity");
    command
        .arg("--error")
        .arg("--title")
        .arg(title)
        .arg("--text")
        .arg(message);
    quiet(command)
}

#[cfg(not(target_os = "macos"))]
fn notification_command(title: &str, message: &str) -> Command {
    let mut command = Command::new("notify-send");
    command.arg(title).arg(message);
    quiet(command)
}

fn quiet(mut command: Command) -> Command {
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    command
}

/// Quote `text` as an AppleScript string literal
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn applescript_string(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
