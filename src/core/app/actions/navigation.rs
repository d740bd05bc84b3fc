use tracing::{debug, warn};

use super::{App, AppAction, AppCommand};
use crate::api::{ApiError, ConfigureRequest, ConversationRecord};
use crate::core::app::ui_state::{Focus, Screen};
use crate::core::constants::chat_title_for;

pub(super) fn handle_navigation_action(app: &mut App, action: AppAction) -> Option<AppCommand> {
    match action {
        AppAction::ShowConfig => {
            app.show_config();
            None
        }
        AppAction::ShowChat => {
            app.show_chat();
            None
        }
        AppAction::StartSession => app.start_session(),
        AppAction::SessionConfigured {
            request_id,
            request,
            result,
        } => app.session_configured(request_id, request, result),
        AppAction::SelectConversation { id } => Some(app.load_conversation(id)),
        AppAction::OpenSelectedConversation => {
            let id = app.ui.conversations.selected_id()?.to_string();
            Some(app.load_conversation(id))
        }
        AppAction::ConversationLoaded {
            request_id,
            id,
            result,
        } => app.conversation_loaded(request_id, id, result),
        _ => unreachable!("non-navigation action routed to navigation handler"),
    }
}

impl App {
    pub fn show_config(&mut self) {
        self.ui.screen = Screen::Config;
        self.ui.focus = Focus::Main;
    }

    pub fn show_chat(&mut self) {
        self.ui.screen = Screen::Chat;
        self.ui.focus = Focus::Main;
    }

    /// Ask the backend for a new conversation with the form's current
    /// choices. Nothing changes locally until the response arrives.
    pub fn start_session(&mut self) -> Option<AppCommand> {
        let Some(request) = self.form.selection() else {
            self.ui
                .set_error("Choose a language, an orchestration type and a mode first");
            return None;
        };
        let request_id = self.session.begin_navigation();
        self.ui
            .set_info(format!("Starting {} session...", request.language));
        Some(AppCommand::Configure {
            request_id,
            request,
        })
    }

    pub(crate) fn session_configured(
        &mut self,
        request_id: u64,
        request: ConfigureRequest,
        result: Result<String, ApiError>,
    ) -> Option<AppCommand> {
        if !self.session.finish_navigation(request_id) {
            debug!(request_id, "discarding superseded configure response");
            return None;
        }

        match result {
            Ok(conversation_id) => {
                self.ui.chat_title = chat_title_for(&request.language);
                self.ui.chat.clear();
                self.ui.scroll_to_bottom();
                self.ui.clear_status();
                self.show_chat();
                if let Err(err) = self
                    .session
                    .logging
                    .log_header(&self.ui.chat_title, &conversation_id)
                {
                    warn!("transcript write failed: {err}");
                }
                self.session.active_conversation_id = Some(conversation_id);
                Some(self.load_conversations())
            }
            Err(err) => {
                self.ui.set_error(format!("Could not start session: {err}"));
                None
            }
        }
    }

    /// Fetch a stored conversation; it becomes active once it arrives.
    pub fn load_conversation(&mut self, id: impl Into<String>) -> AppCommand {
        let id = id.into();
        let request_id = self.session.begin_navigation();
        self.ui.set_info("Loading conversation...");
        AppCommand::LoadConversation { request_id, id }
    }

    pub(crate) fn conversation_loaded(
        &mut self,
        request_id: u64,
        id: String,
        result: Result<ConversationRecord, ApiError>,
    ) -> Option<AppCommand> {
        if !self.session.finish_navigation(request_id) {
            debug!(request_id, %id, "discarding superseded conversation load");
            return None;
        }

        match result {
            Ok(record) => {
                self.ui.chat_title = chat_title_for(&record.config.language);
                if let Err(err) = self.session.logging.log_header(&self.ui.chat_title, &id) {
                    warn!("transcript write failed: {err}");
                }
                for message in &record.messages {
                    if let Err(err) = self.session.logging.log_message(message) {
                        warn!("transcript write failed: {err}");
                    }
                }
                self.ui.chat.replace(record.messages);
                self.ui.scroll_to_bottom();
                self.ui.clear_status();
                self.session.active_conversation_id = Some(id);
                self.show_chat();
                Some(self.load_conversations())
            }
            Err(err) => {
                self.ui
                    .set_error(format!("Could not load conversation: {err}"));
                None
            }
        }
    }
}
