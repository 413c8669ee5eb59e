//! Unix socket transport
//!
//! One newline-terminated write, one bounded read. There is no length
//! prefix and no framing beyond the trailing newline.

use std::io;
use std::path::Path;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use interprocess::local_socket::tokio::prelude::*;
use interprocess::local_socket::{GenericFilePath, ToFsName};

/// Re-export Stream for use in other modules
pub use interprocess::local_socket::tokio::Stream;

/// Maximum number of reply bytes consumed from the daemon
pub const MAX_RESPONSE_LEN: usize = 4095;

/// Connect to the daemon's socket at `path`
pub async fn connect(path: &Path) -> io::Result<Stream> {
    let name = path.to_fs_name::<GenericFilePath>()?;
    Stream::connect(name).await
}

/// Write `payload` in a single buffered operation
pub async fn send_message<W: AsyncWriteExt + Unpin>(writer: &mut W, payload: &[u8]) -> io::Result<()> {
    writer.write_all(payload).await?;
    writer.flush().await?;
    Ok(())
}

/// Perform exactly one read of at most [`MAX_RESPONSE_LEN`] bytes
///
/// A timeout, a read error and end-of-stream all yield an empty string:
/// once the command has been sent, missing data is not a failure.
pub async fn recv_once<R: AsyncReadExt + Unpin>(reader: &mut R, timeout: Duration) -> String {
    let mut buf = vec![0u8; MAX_RESPONSE_LEN];

    match tokio::time::timeout(timeout, reader.read(&mut buf)).await {
        Ok(Ok(n)) if n > 0 => String::from_utf8_lossy(&buf[..n]).into_owned(),
        Ok(Ok(_)) => String::new(),
        Ok(Err(e)) => {
            tracing::debug!("Receive failed, treating reply as empty: {}", e);
            String::new()
        }
        Err(_) => {
            tracing::debug!("No reply within {:?}, treating reply as empty", timeout);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[tokio::test]
    async fn test_send_message_writes_payload() {
        let mut output = Vec::new();
        send_message(&mut output, b"focus:Safari\n").await.unwrap();
        assert_eq!(output, b"focus:Safari\n");
    }

    #[tokio::test]
    async fn test_recv_once_reads_reply() {
        let mut reader = Cursor::new(b"{\"result\":{}}\n".to_vec());
        let reply = recv_once(&mut reader, Duration::from_secs(1)).await;
        assert_eq!(reply, "{\"result\":{}}\n");
    }

    #[tokio::test]
    async fn test_recv_once_caps_reply_length() {
        let mut reader = Cursor::new(vec![b'x'; MAX_RESPONSE_LEN + 100]);
        let reply = recv_once(&mut reader, Duration::from_secs(1)).await;
        assert_eq!(reply.len(), MAX_RESPONSE_LEN);
    }

    #[tokio::test]
    async fn test_recv_once_empty_stream() {
        let mut reader = Cursor::new(Vec::new());
        assert_eq!(recv_once(&mut reader, Duration::from_secs(1)).await, "");
    }

    #[tokio::test]
    async fn test_recv_once_times_out_to_empty() {
        // The writer half stays open, so the read never completes
        let (mut reader, _writer) = tokio::io::duplex(64);
        let reply = recv_once(&mut reader, Duration::from_millis(50)).await;
        assert_eq!(reply, "");
    }
}
