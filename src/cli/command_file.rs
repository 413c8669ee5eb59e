//! Reading the command file

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use crate::common::{Error, Result};
use crate::ipc::protocol::MAX_COMMAND_LEN;

/// Read the command from the first line of `path`
///
/// Trailing `\r`/`\n` characters are stripped; any other whitespace is
/// kept. A blank first line yields an empty command, a file with no
/// bytes at all is an error.
pub fn read_command(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| Error::command_file(path.to_path_buf(), e))?;

    // Room for a full-length command plus "\r\n"
    let mut reader = BufReader::new(file).take(MAX_COMMAND_LEN as u64 + 2);
    let mut line = Vec::new();
    let read = reader
        .read_until(b'\n', &mut line)
        .map_err(|e| Error::command_file(path.to_path_buf(), e))?;

    if read == 0 {
        return Err(Error::CommandFileEmpty {
            path: path.to_path_buf(),
        });
    }

    while matches!(line.last(), Some(b'\n' | b'\r')) {
        line.pop();
    }

    if line.len() > MAX_COMMAND_LEN {
        return Err(Error::CommandTooLong {
            len: line.len(),
            max: MAX_COMMAND_LEN,
        });
    }

    String::from_utf8(line).map_err(|e| Error::CommandFileRead {
        path: path.to_path_buf(),
        error: io::Error::new(io::ErrorKind::InvalidData, e),
    })
}
