mod input;
mod render;
mod runtime;
mod ui;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use usradmin_core::bridge::socket;
use usradmin_core::config::CoreConfig;
use usradmin_core::session::SessionGate;
use usradmin_core::store::InMemoryProfileStore;
use usradmin_core::tracing_setup::init_tracing;
use usradmin_core::CoreRuntime;

use crate::runtime::run_app;
use ui::App;

/// Terminal admin panel for user profiles
#[derive(Parser, Debug)]
#[command(name = "usradmin-tui")]
#[command(about = "Browse, search and delete user profiles")]
struct Args {
    /// JSON config file (camelCase keys)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Unix socket of an embedding parent. Without it the panel runs standalone.
    #[arg(long)]
    parent_socket: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Restore the terminal before the panic message is printed
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen);
        eprintln!("\n\n=== PANIC ===");
        eprintln!("{}", panic_info);
        eprintln!("=============\n");
        original_hook(panic_info);
    }));

    init_tracing();

    let config = match &args.config {
        Some(path) => CoreConfig::load(path)?,
        None => CoreConfig::default(),
    };

    let embedding = match &args.parent_socket {
        Some(path) => Some(
            socket::connect(path)
                .await
                .with_context(|| format!("Failed to connect to parent socket: {}", path.display()))?,
        ),
        None => None,
    };
    let embedded = embedding.is_some();
    info!(embedded, "starting usradmin");

    let session = SessionGate::new();
    let store = Arc::new(InMemoryProfileStore::from_config(session.clone(), &config));
    let mut core_runtime = CoreRuntime::new(config, session, store, embedding);
    let core_events = core_runtime
        .take_events_rx()
        .ok_or_else(|| anyhow::anyhow!("Core runtime already has an active event receiver"))?;

    let mut app = App::new(core_runtime.handle(), embedded);
    let mut terminal = ui::init_terminal()?;
    core_runtime.start();

    let result = run_app(&mut terminal, &mut app, core_events).await;

    core_runtime.shutdown();

    ui::restore_terminal()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}
