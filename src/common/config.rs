//! Configuration file handling

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use super::paths::config_path;
use super::Result;

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Timeout settings
    #[serde(default)]
    pub timeouts: Timeouts,

    /// Dialog and notification settings
    #[serde(default)]
    pub notify: NotifyConfig,
}

/// Timeout settings
#[derive(Debug, Deserialize)]
pub struct Timeouts {
    /// How long to wait for the daemon's reply after sending
    #[serde(default = "default_recv_millis")]
    pub recv_millis: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            recv_millis: default_recv_millis(),
        }
    }
}

impl Timeouts {
    pub fn recv(&self) -> Duration {
        Duration::from_millis(self.recv_millis)
    }
}

fn default_recv_millis() -> u64 {
    2_000
}

/// Dialog and notification settings
#[derive(Debug, Deserialize)]
pub struct NotifyConfig {
    /// Title used for dialogs and notifications
    #[serde(default = "default_title")]
    pub title: String,

    /// Set to false to only report through the exit code
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            enabled: default_enabled(),
        }
    }
}

fn default_title() -> String {
    "cwm Error".to_string()
}

fn default_enabled() -> bool {
    true
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file, defaulting if it is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| super::Error::Config {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        let config: Self =
            toml::from_str(&content).map_err(|e| super::Error::ConfigParse(e.to_string()))?;
        config.validate()
    }

    /// Reject values that would silently change the relay's outcome
    fn validate(self) -> Result<Self> {
        if self.timeouts.recv_millis == 0 {
            return Err(super::Error::ConfigParse(
                "timeouts.recv_millis must be greater than 0".to_string(),
            ));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.timeouts.recv(), Duration::from_secs(2));
        assert_eq!(config.notify.title, "cwm Error");
        assert!(config.notify.enabled);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.timeouts.recv_millis, 2_000);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[notify]\nenabled = false\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(!config.notify.enabled);
        assert_eq!(config.notify.title, "cwm Error");
        assert_eq!(config.timeouts.recv_millis, 2_000);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[timeouts]\nrecv_millis = \"soon\"\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(Error::ConfigParse(_))
        ));
    }

    #[test]
    fn test_zero_recv_timeout_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[timeouts]\nrecv_millis = 0\n").unwrap();

        match Config::load_from(&path) {
            Err(Error::ConfigParse(msg)) => assert!(msg.contains("recv_millis")),
            other => panic!("expected ConfigParse, got {:?}", other),
        }
    }
}
