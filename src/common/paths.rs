//! Command file, socket and configuration paths
//!
//! The command file sits next to the (symlink-resolved) executable. The
//! daemon socket lives at `$HOME/.cwm/cwm.sock`; neither location can be
//! changed by flags or the config file.

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

use super::{Error, Result};

/// Name of the file holding the command, next to the executable
pub const COMMAND_FILE_NAME: &str = "cwm_command.txt";

/// Directory under `$HOME` holding the daemon socket
const SOCKET_DIR: &str = ".cwm";

/// Socket file name inside [`SOCKET_DIR`]
const SOCKET_FILE: &str = "cwm.sock";

/// Name used for the configuration directory
const APP_NAME: &str = "cwm-relay";

/// Get the directory containing the running executable
///
/// `current_exe` is the raw result of `std::env::current_exe()`. Symlinks
/// are resolved when possible; if canonicalization fails the raw path is
/// used as-is.
pub fn executable_dir(current_exe: io::Result<PathBuf>) -> Result<PathBuf> {
    let exe = current_exe.map_err(Error::Locate)?;
    let resolved = exe.canonicalize().unwrap_or(exe);

    match resolved.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => Ok(dir.to_path_buf()),
        _ => Err(Error::Locate(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("executable path has no parent: {}", resolved.display()),
        ))),
    }
}

/// Get the command file path inside the executable's directory
pub fn command_file_path(exe_dir: &Path) -> PathBuf {
    exe_dir.join(COMMAND_FILE_NAME)
}

/// Get the daemon socket path from the value of `HOME`
pub fn socket_path(home: Option<&OsStr>) -> Result<PathBuf> {
    match home {
        Some(home) if !home.is_empty() => {
            Ok(PathBuf::from(home).join(SOCKET_DIR).join(SOCKET_FILE))
        }
        _ => Err(Error::Environment),
    }
}

/// Check if the daemon socket exists
///
/// A stale socket left behind by a crashed daemon also passes; this only
/// separates "never started" from real connection failures.
pub fn socket_exists(path: &Path) -> bool {
    path.exists()
}

/// Get the configuration directory path
///
/// Uses the directories crate for platform-appropriate locations:
/// - Linux: `~/.config/cwm-relay/`
/// - macOS: `~/Library/Application Support/cwm-relay/`
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_path_from_home() {
        let path = socket_path(Some(OsStr::new("/home/alice"))).unwrap();
        assert_eq!(path, PathBuf::from("/home/alice/.cwm/cwm.sock"));
    }

    #[test]
    fn test_socket_path_requires_home() {
        assert!(matches!(socket_path(None), Err(Error::Environment)));
        assert!(matches!(
            socket_path(Some(OsStr::new(""))),
            Err(Error::Environment)
        ));
    }

    #[test]
    fn test_executable_dir_reports_locate_error() {
        let err = executable_dir(Err(io::Error::new(io::ErrorKind::Other, "no exe"))).unwrap_err();
        assert!(matches!(err, Error::Locate(_)));
    }

    #[test]
    fn test_executable_dir_falls_back_to_raw_path() {
        // Does not exist, so canonicalize fails and the raw path is kept
        let dir = executable_dir(Ok(PathBuf::from("/no/such/dir/Shortcut"))).unwrap();
        assert_eq!(dir, PathBuf::from("/no/such/dir"));
    }

    #[cfg(unix)]
    #[test]
    fn test_executable_dir_follows_symlinks() {
        let real = tempfile::tempdir().unwrap();
        let links = tempfile::tempdir().unwrap();
        let exe = real.path().join("stub");
        std::fs::write(&exe, b"").unwrap();
        let link = links.path().join("stub");
        std::os::unix::fs::symlink(&exe, &link).unwrap();

        let dir = executable_dir(Ok(link)).unwrap();
        assert_eq!(dir, real.path().canonicalize().unwrap());
    }

    #[test]
    fn test_command_file_path() {
        assert_eq!(
            command_file_path(Path::new("/Apps/Focus.app/Contents/MacOS")),
            PathBuf::from("/Apps/Focus.app/Contents/MacOS/cwm_command.txt")
        );
    }

    #[test]
    fn test_config_dir_is_valid() {
        let dir = config_dir();
        assert!(dir.is_some());
    }
}
