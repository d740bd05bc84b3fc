//! Interactive chat loop.
//!
//! The loop owns the [`App`] and the terminal. Terminal events and request
//! completions both arrive over channels; each is turned into an
//! [`AppAction`], applied, and any resulting [`AppCommand`] is spawned as a
//! Tokio task that reports back through the [`AppActionDispatcher`]. Nothing
//! in the loop waits on the network, so the interface stays responsive while
//! requests are in flight.

mod keybindings;
mod lifecycle;

use std::{error::Error, sync::Arc, time::Duration};

use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::api::TutorBackend;
use crate::core::app::requests::execute;
use crate::core::app::{apply_action, App, AppAction, AppActionDispatcher, AppCommand};
use crate::core::config::data::Config;
use crate::ui::renderer::{chat_viewport, ui};
use crate::utils::logging::LoggingState;

use lifecycle::{restore_terminal, setup_terminal, ChatTerminal};

const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug)]
enum UiEvent {
    Crossterm(Event),
}

fn spawn_event_reader(event_tx: mpsc::UnboundedSender<UiEvent>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            if let Ok(true) = event::poll(EVENT_POLL_INTERVAL) {
                match event::read() {
                    Ok(ev) => {
                        if event_tx.send(UiEvent::Crossterm(ev)).is_err() {
                            break;
                        }
                    }
                    Err(_) => continue,
                }
            } else {
                tokio::task::yield_now().await;
            }
        }
    })
}

fn spawn_request(
    backend: Arc<dyn TutorBackend>,
    dispatcher: AppActionDispatcher,
    command: AppCommand,
) {
    debug!(?command, "spawning backend request");
    tokio::spawn(async move {
        let completion = execute(backend.as_ref(), command).await;
        dispatcher.dispatch(completion);
    });
}

/// Record where the chat pane will be drawn so scrolling can be bounded
/// before the next frame.
fn update_chat_viewport(app: &mut App, terminal: &ChatTerminal) {
    if let Ok(size) = terminal.size() {
        app.ui.chat_viewport = chat_viewport(Rect::new(0, 0, size.width, size.height));
    }
}

/// Rows PageUp/PageDown move.
fn page_height(app: &App) -> u16 {
    app.ui.chat_viewport.height.max(1)
}

fn actions_for_event(app: &App, event: Event, page: u16) -> Vec<AppAction> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            keybindings::action_for_key(app, &key, page)
                .into_iter()
                .collect()
        }
        Event::Paste(text) => keybindings::actions_for_paste(&text),
        _ => Vec::new(),
    }
}

pub async fn run_chat(
    config: Config,
    backend: Arc<dyn TutorBackend>,
    logging: LoggingState,
) -> Result<(), Box<dyn Error>> {
    let mut app = App::new(&config, logging);

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<AppAction>();
    let dispatcher = AppActionDispatcher::new(action_tx);

    let mut terminal = setup_terminal()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<UiEvent>();
    let event_reader = spawn_event_reader(event_tx);

    info!("interactive session started");
    for command in app.startup_commands() {
        spawn_request(backend.clone(), dispatcher.clone(), command);
    }

    let result: Result<(), Box<dyn Error>> = loop {
        update_chat_viewport(&mut app, &terminal);
        if let Err(err) = terminal.draw(|f| ui(f, &app)) {
            break Err(err.into());
        }
        if app.ui.exit_requested {
            break Ok(());
        }

        let actions = tokio::select! {
            Some(UiEvent::Crossterm(ev)) = event_rx.recv() => {
                actions_for_event(&app, ev, page_height(&app))
            }
            Some(action) = action_rx.recv() => vec![action],
            else => break Ok(()),
        };

        for action in actions {
            if let Some(command) = apply_action(&mut app, action) {
                spawn_request(backend.clone(), dispatcher.clone(), command);
            }
        }
    };

    event_reader.abort();
    restore_terminal(&mut terminal)?;
    info!("interactive session ended");
    result
}
