//! TUI-less "ask" command

use std::error::Error;

use crate::api::TutorBackend;
use crate::core::app::requests::run_until_idle;
use crate::core::app::{App, AppAction, ChatEntry, StatusKind};
use crate::core::config::data::Config;
use crate::core::message::Role;
use crate::utils::logging::LoggingState;

/// Session settings given on the command line; unset ones fall back to the
/// configured defaults.
#[derive(Debug, Default)]
pub struct AskOptions {
    pub language: Option<String>,
    pub orchestration: Option<String>,
    pub mode: Option<String>,
}

fn failure(app: &App, fallback: &str) -> Box<dyn Error> {
    match &app.ui.status {
        Some(status) if status.kind == StatusKind::Error => status.text.clone().into(),
        _ => fallback.into(),
    }
}

/// Start a fresh session, send `message`, and return the tutor's reply.
pub async fn run_ask(
    config: &Config,
    backend: &dyn TutorBackend,
    logging: LoggingState,
    options: AskOptions,
    message: &str,
) -> Result<String, Box<dyn Error>> {
    if message.trim().is_empty() {
        return Err("Usage: tutorchat ask [--language L] [--orchestration O] [--mode M] <MESSAGE>".into());
    }

    let mut app = App::new(config, logging);
    if let Some(language) = &options.language {
        app.form.language.select_or_insert(language);
    }
    if let Some(orchestration) = &options.orchestration {
        app.form.orchestration.select_or_insert(orchestration);
    }
    if let Some(mode) = &options.mode {
        app.form.mode.select_or_insert(mode);
    }

    run_until_idle(&mut app, backend, AppAction::StartSession).await;
    if app.session.active_conversation_id.is_none() {
        return Err(failure(&app, "Could not start session"));
    }

    app.ui.input = message.to_string();
    run_until_idle(&mut app, backend, AppAction::SubmitMessage).await;

    match app.ui.chat.entries().last() {
        Some(ChatEntry::Message(reply)) if reply.role == Role::Assistant => Ok(reply.content.clone()),
        _ => Err(failure(&app, "No reply received")),
    }
}
