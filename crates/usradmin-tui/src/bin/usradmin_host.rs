//! Development stand-in for an embedding parent.
//!
//! Listens on a Unix socket, prints every message the panel posts, and answers
//! `APP_LOADED` with an `AUTH_TOKEN`.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::UnixListener;
use usradmin_core::bridge::{InboundMessage, OutboundMessage};

#[derive(Parser, Debug)]
#[command(name = "usradmin-host")]
#[command(about = "Host a usradmin panel over a Unix socket")]
struct Args {
    /// Socket path to listen on. A stale file at this path is removed.
    socket: PathBuf,

    /// Credential sent in reply to APP_LOADED. May be empty.
    #[arg(long, default_value = "host-token")]
    token: String,

    /// Wait this long before answering APP_LOADED
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Never send a credential, so the panel falls back after its timeout
    #[arg(long)]
    no_token: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.socket.exists() {
        std::fs::remove_file(&args.socket)
            .with_context(|| format!("Failed to remove stale socket: {}", args.socket.display()))?;
    }
    let listener = UnixListener::bind(&args.socket)
        .with_context(|| format!("Failed to bind socket: {}", args.socket.display()))?;
    println!("listening on {}", args.socket.display());

    let (stream, _) = listener.accept().await.context("Failed to accept panel connection")?;
    println!("panel connected");

    let (read_half, mut write_half) = stream.into_split();
    let mut lines = BufReader::new(read_half).lines();

    while let Some(line) = lines.next_line().await? {
        let message = match serde_json::from_str::<OutboundMessage>(&line) {
            Ok(message) => message,
            Err(e) => {
                println!("<- unrecognized: {} ({})", line, e);
                continue;
            }
        };
        println!("<- {}", line);

        match message {
            OutboundMessage::AppLoaded if !args.no_token => {
                if args.delay_ms > 0 {
                    tokio::time::sleep(Duration::from_millis(args.delay_ms)).await;
                }
                let reply = serde_json::to_string(&InboundMessage::auth_token(args.token.clone()))?;
                write_half.write_all(reply.as_bytes()).await?;
                write_half.write_all(b"\n").await?;
                println!("-> {}", reply);
            }
            OutboundMessage::AppLoaded => {}
            OutboundMessage::UserDeleted { payload } => {
                println!("   user {} deleted", payload.user_id);
            }
        }
    }

    println!("panel disconnected");
    let _ = std::fs::remove_file(&args.socket);
    Ok(())
}
