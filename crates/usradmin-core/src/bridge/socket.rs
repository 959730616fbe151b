//! Newline-delimited JSON transport to an embedding parent over a Unix socket.
//!
//! The parent listens; the panel connects. Each line the parent writes becomes
//! an [`InboundEnvelope`] whose origin is the socket path. Outbound messages
//! are written back one JSON object per line.

use std::path::{Path, PathBuf};

use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::unix::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::UnixStream;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::channel::{EmbeddingChannel, InboundEnvelope, ParentEnd};
use super::messages::OutboundMessage;
use crate::error::BridgeError;

/// Longest inbound line accepted before the connection is dropped
const MAX_LINE_BYTES: u64 = 64 * 1024;

/// Origin string reported for messages arriving over `socket_path`
pub fn socket_origin(socket_path: &Path) -> String {
    socket_path.display().to_string()
}

/// Connect to the parent at `socket_path` and pump messages in both directions.
///
/// Fails only if the connection cannot be established. Once connected, read or
/// write errors end the corresponding pump and are logged.
pub async fn connect(socket_path: &Path) -> Result<EmbeddingChannel, BridgeError> {
    let stream = UnixStream::connect(socket_path).await?;
    info!(path = %socket_path.display(), "connected to embedding parent");

    let (panel, parent) = EmbeddingChannel::pair();
    let ParentEnd {
        inbound_tx,
        outbound_rx,
    } = parent;

    let (read_half, write_half) = stream.into_split();
    let origin = socket_origin(socket_path);
    tokio::spawn(read_lines(read_half, origin, inbound_tx));
    tokio::spawn(write_lines(write_half, outbound_rx, socket_path.to_path_buf()));

    Ok(panel)
}

async fn read_lines(read_half: OwnedReadHalf, origin: String, inbound_tx: mpsc::Sender<InboundEnvelope>) {
    let mut reader = BufReader::new(read_half);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = (&mut reader)
            .take(MAX_LINE_BYTES + 1)
            .read_until(b'\n', &mut buf)
            .await;

        match read {
            Ok(0) => {
                info!("embedding parent closed the connection");
                break;
            }
            Ok(_) => {
                if buf.last() != Some(&b'\n') && buf.len() as u64 > MAX_LINE_BYTES {
                    warn!(limit = MAX_LINE_BYTES, "inbound line too long, dropping connection");
                    break;
                }
                let line = String::from_utf8_lossy(&buf);
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if inbound_tx
                    .send(InboundEnvelope::new(origin.clone(), line))
                    .await
                    .is_err()
                {
                    debug!("inbound consumer dropped");
                    break;
                }
            }
            Err(e) => {
                warn!(error = %e, "failed to read from embedding parent");
                break;
            }
        }
    }
}

async fn write_lines(
    mut write_half: OwnedWriteHalf,
    mut outbound_rx: mpsc::UnboundedReceiver<OutboundMessage>,
    socket_path: PathBuf,
) {
    while let Some(message) = outbound_rx.recv().await {
        let mut line = match message.to_json() {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "failed to encode outbound message");
                continue;
            }
        };
        line.push('\n');

        if let Err(e) = write_half.write_all(line.as_bytes()).await {
            warn!(path = %socket_path.display(), error = %e, "failed to write to embedding parent");
            break;
        }
    }
}
