mod conversations;
mod input;
mod messaging;
mod navigation;

use tokio::sync::mpsc;

use super::App;
use crate::api::{
    ApiError, ConfigureRequest, ConversationRecord, ConversationSummary, SendMessageRequest,
};

pub enum AppAction {
    ShowConfig,
    ShowChat,
    StartSession,
    SessionConfigured {
        request_id: u64,
        request: ConfigureRequest,
        result: Result<String, ApiError>,
    },
    SubmitMessage,
    MessageReplied {
        request_id: u64,
        generation: u64,
        result: Result<String, ApiError>,
    },
    RefreshConversations,
    ConversationsLoaded {
        request_id: u64,
        result: Result<Vec<ConversationSummary>, ApiError>,
    },
    SelectConversation {
        id: String,
    },
    OpenSelectedConversation,
    ConversationLoaded {
        request_id: u64,
        id: String,
        result: Result<ConversationRecord, ApiError>,
    },
    SidebarUp,
    SidebarDown,
    FormFieldNext,
    FormFieldPrevious,
    FormValueNext,
    FormValuePrevious,
    ToggleFocus,
    InsertChar {
        ch: char,
    },
    Backspace,
    ClearInput,
    ScrollUp {
        lines: u16,
    },
    ScrollDown {
        lines: u16,
    },
    Quit,
}

/// A backend request the controller wants performed. Its result comes back
/// as the matching `AppAction` variant carrying the same `request_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    Configure {
        request_id: u64,
        request: ConfigureRequest,
    },
    SendMessage {
        request_id: u64,
        generation: u64,
        request: SendMessageRequest,
    },
    ListConversations {
        request_id: u64,
    },
    LoadConversation {
        request_id: u64,
        id: String,
    },
}

#[derive(Clone)]
pub struct AppActionDispatcher {
    tx: mpsc::UnboundedSender<AppAction>,
}

impl AppActionDispatcher {
    pub fn new(tx: mpsc::UnboundedSender<AppAction>) -> Self {
        Self { tx }
    }

    pub fn dispatch(&self, action: AppAction) {
        let _ = self.tx.send(action);
    }
}

pub fn apply_action(app: &mut App, action: AppAction) -> Option<AppCommand> {
    match action {
        AppAction::ShowConfig
        | AppAction::ShowChat
        | AppAction::StartSession
        | AppAction::SessionConfigured { .. }
        | AppAction::SelectConversation { .. }
        | AppAction::OpenSelectedConversation
        | AppAction::ConversationLoaded { .. } => navigation::handle_navigation_action(app, action),

        AppAction::SubmitMessage | AppAction::MessageReplied { .. } => {
            messaging::handle_messaging_action(app, action)
        }

        AppAction::RefreshConversations
        | AppAction::ConversationsLoaded { .. }
        | AppAction::SidebarUp
        | AppAction::SidebarDown => conversations::handle_conversation_list_action(app, action),

        AppAction::FormFieldNext
        | AppAction::FormFieldPrevious
        | AppAction::FormValueNext
        | AppAction::FormValuePrevious
        | AppAction::ToggleFocus
        | AppAction::InsertChar { .. }
        | AppAction::Backspace
        | AppAction::ClearInput
        | AppAction::ScrollUp { .. }
        | AppAction::ScrollDown { .. }
        | AppAction::Quit => input::handle_input_action(app, action),
    }
}
