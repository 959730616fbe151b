use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

use usradmin_core::events::CoreEvent;

use crate::input::handle_key;
use crate::render::render;
use crate::ui::{App, Tui};

const TICK_INTERVAL: Duration = Duration::from_millis(50);

pub(crate) async fn run_app(
    terminal: &mut Tui,
    app: &mut App,
    mut core_events: mpsc::UnboundedReceiver<CoreEvent>,
) -> Result<()> {
    let mut event_stream = EventStream::new();
    let mut tick_interval = tokio::time::interval(TICK_INTERVAL);

    while app.running {
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                            if app.pending_quit {
                                app.quit();
                            } else {
                                // Footer shows the warning until the next key
                                app.pending_quit = true;
                            }
                        } else {
                            app.pending_quit = false;
                            handle_key(app, key);
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => {
                        info!("terminal event stream ended");
                        app.quit();
                    }
                }
            }

            Some(event) = core_events.recv() => {
                debug!(?event, "core event");
                app.handle_core_event(event);
            }

            _ = tick_interval.tick() => {
                app.tick();
            }
        }
    }

    Ok(())
}
