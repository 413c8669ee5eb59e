//! Request framing and reply interpretation
//!
//! Requests are the raw command followed by `\n`. Replies are JSON-RPC
//! style objects from the daemon, but nothing here trusts that: a reply
//! that does not decode falls back to a substring scan, and anything that
//! cannot be understood degrades to a generic message.

use serde::Deserialize;
use serde_json::Value;

/// Longest command payload, excluding the newline terminator
pub const MAX_COMMAND_LEN: usize = 4095;

/// Message used when a failure carries no readable message
pub const GENERIC_FAILURE: &str = "Command failed";

/// Marker the substring fallback looks for
const ERROR_MARKER: &str = "\"error\"";

/// Message field the substring fallback looks for
const MESSAGE_MARKER: &str = "\"message\"";

/// Frame a command for the wire
pub fn encode_request(command: &str) -> Vec<u8> {
    let mut payload = Vec::with_capacity(command.len() + 1);
    payload.extend_from_slice(command.as_bytes());
    payload.push(b'\n');
    payload
}

/// Outcome reported by the daemon
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// No error was reported (includes an empty reply)
    Success,
    /// The daemon rejected or failed the command
    Failure { message: String },
}

impl Reply {
    /// Classify a raw reply
    pub fn interpret(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Reply::Success;
        }

        match serde_json::from_str::<Envelope>(trimmed) {
            Ok(envelope) => envelope.into_reply(),
            Err(_) => Self::scan(trimmed),
        }
    }

    /// Substring classification for replies that are not a JSON object
    fn scan(text: &str) -> Self {
        if !text.contains(ERROR_MARKER) {
            return Reply::Success;
        }

        let message = scan_message(text)
            .map(str::to_string)
            .unwrap_or_else(|| GENERIC_FAILURE.to_string());
        Reply::Failure { message }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Reply::Success)
    }
}

/// Top-level reply object, covering both the JSON-RPC and the older
/// `{"success": .., "error": ".."}` shapes
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    error: Option<Value>,
    #[serde(default)]
    message: Option<Value>,
}

impl Envelope {
    fn into_reply(self) -> Reply {
        let has_error = matches!(&self.error, Some(v) if !v.is_null());
        if !has_error && self.success != Some(false) {
            return Reply::Success;
        }

        let nested = match &self.error {
            Some(Value::Object(fields)) => fields.get("message").and_then(non_empty_str),
            _ => None,
        };
        let top_level = self.message.as_ref().and_then(non_empty_str);
        let bare = self.error.as_ref().and_then(non_empty_str);

        let message = nested
            .or(top_level)
            .or(bare)
            .unwrap_or(GENERIC_FAILURE)
            .to_string();
        Reply::Failure { message }
    }
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}

/// Pull the text after `"message"`, past the `:`, skipping spaces and
/// quotes, up to the next quote
fn scan_message(text: &str) -> Option<&str> {
    let after_marker = &text[text.find(MESSAGE_MARKER)? + MESSAGE_MARKER.len()..];
    let after_colon = &after_marker[after_marker.find(':')? + 1..];
    let value = after_colon.trim_start_matches([' ', '"']);
    let end = value.find('"')?;
    Some(&value[..end])
}
