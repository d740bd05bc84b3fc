//! Key handling for the interactive client.
//!
//! Keys resolve to [`AppAction`]s according to the current screen and which
//! region has focus; the event loop applies whatever comes back.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::app::{App, AppAction, Focus, Screen};

/// Map a key press to an action. `page` is the number of rows PageUp and
/// PageDown scroll by.
pub fn action_for_key(app: &App, key: &KeyEvent, page: u16) -> Option<AppAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => return Some(AppAction::Quit),
        KeyCode::Tab => return Some(AppAction::ToggleFocus),
        KeyCode::F(5) => return Some(AppAction::RefreshConversations),
        _ => {}
    }

    match (app.ui.focus, app.ui.screen) {
        (Focus::Sidebar, _) => sidebar_action(key),
        (Focus::Main, Screen::Config) => config_action(app, key),
        (Focus::Main, Screen::Chat) => chat_action(key, page),
    }
}

fn sidebar_action(key: &KeyEvent) -> Option<AppAction> {
    match key.code {
        KeyCode::Up => Some(AppAction::SidebarUp),
        KeyCode::Down => Some(AppAction::SidebarDown),
        KeyCode::Enter => Some(AppAction::OpenSelectedConversation),
        KeyCode::Esc => Some(AppAction::ToggleFocus),
        _ => None,
    }
}

fn config_action(app: &App, key: &KeyEvent) -> Option<AppAction> {
    match key.code {
        KeyCode::Up => Some(AppAction::FormValuePrevious),
        KeyCode::Down => Some(AppAction::FormValueNext),
        KeyCode::Left => Some(AppAction::FormFieldPrevious),
        KeyCode::Right => Some(AppAction::FormFieldNext),
        KeyCode::Enter => Some(AppAction::StartSession),
        // Back to the conversation in progress, if any
        KeyCode::Esc if app.session.active_conversation_id.is_some() => Some(AppAction::ShowChat),
        _ => None,
    }
}

fn chat_action(key: &KeyEvent, page: u16) -> Option<AppAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Enter => Some(AppAction::SubmitMessage),
        KeyCode::Esc => Some(AppAction::ShowConfig),
        KeyCode::Backspace => Some(AppAction::Backspace),
        KeyCode::Char('u') if ctrl => Some(AppAction::ClearInput),
        KeyCode::Char(ch) if !ctrl && !alt => Some(AppAction::InsertChar { ch }),
        KeyCode::Up => Some(AppAction::ScrollUp { lines: 1 }),
        KeyCode::Down => Some(AppAction::ScrollDown { lines: 1 }),
        KeyCode::PageUp => Some(AppAction::ScrollUp { lines: page }),
        KeyCode::PageDown => Some(AppAction::ScrollDown { lines: page }),
        _ => None,
    }
}

/// Pasted text becomes ordinary input; the single-line box has no room for
/// newlines.
pub fn actions_for_paste(text: &str) -> Vec<AppAction> {
    text.chars()
        .map(|ch| match ch {
            '\r' | '\n' | '\t' => ' ',
            other => other,
        })
        .map(|ch| AppAction::InsertChar { ch })
        .collect()
}
