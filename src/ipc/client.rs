//! Client side of the relay exchange

use std::path::Path;
use std::time::Duration;

use crate::common::{Error, Result};

use super::protocol::{encode_request, MAX_COMMAND_LEN};
use super::transport::{self, Stream};

/// A single-use connection to the cwm daemon
///
/// The stream is owned by the client and closed when the client is
/// dropped, which [`DaemonClient::relay`] guarantees by consuming `self`.
pub struct DaemonClient {
    stream: Stream,
}

impl DaemonClient {
    /// Connect to the daemon listening at `socket_path`
    pub async fn connect(socket_path: &Path) -> Result<Self> {
        let stream = transport::connect(socket_path)
            .await
            .map_err(Error::Connect)?;
        tracing::debug!("Connected to daemon at {}", socket_path.display());

        Ok(Self { stream })
    }

    /// Send `command` and return whatever the daemon answers within
    /// `recv_timeout`
    ///
    /// An empty string means the daemon sent nothing in time.
    pub async fn relay(mut self, command: &str, recv_timeout: Duration) -> Result<String> {
        if command.len() > MAX_COMMAND_LEN {
            return Err(Error::CommandTooLong {
                len: command.len(),
                max: MAX_COMMAND_LEN,
            });
        }

        transport::send_message(&mut self.stream, &encode_request(command))
            .await
            .map_err(Error::Send)?;

        let reply = transport::recv_once(&mut self.stream, recv_timeout).await;
        tracing::debug!("Daemon replied with {} bytes", reply.len());

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;
    use tokio::net::UnixListener;

    #[tokio::test]
    async fn test_relay_rejects_overlong_command_without_sending() {
        let dir = tempfile::tempdir().unwrap();
        let socket = dir.path().join("cwm.sock");
        let listener = UnixListener::bind(&socket).unwrap();

        let client = DaemonClient::connect(&socket).await.unwrap();
        let (mut server, _) = listener.accept().await.unwrap();

        let command = "a".repeat(MAX_COMMAND_LEN + 1);
        let err = client
            .relay(&command, Duration::from_millis(100))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::CommandTooLong { len, max } if len == MAX_COMMAND_LEN + 1 && max == MAX_COMMAND_LEN
        ));

        // The client is gone and nothing reached the socket
        let mut received = Vec::new();
        server.read_to_end(&mut received).await.unwrap();
        assert!(received.is_empty());
    }
}
