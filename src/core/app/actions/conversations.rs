use tracing::debug;

use super::{App, AppAction, AppCommand};
use crate::api::{ApiError, ConversationSummary};
use crate::core::app::ui_state::ConversationEntry;

pub(super) fn handle_conversation_list_action(
    app: &mut App,
    action: AppAction,
) -> Option<AppCommand> {
    match action {
        AppAction::RefreshConversations => Some(app.load_conversations()),
        AppAction::ConversationsLoaded { request_id, result } => {
            app.conversations_loaded(request_id, result);
            None
        }
        AppAction::SidebarUp => {
            app.ui.conversations.move_up();
            None
        }
        AppAction::SidebarDown => {
            app.ui.conversations.move_down();
            None
        }
        _ => unreachable!("non-list action routed to conversation list handler"),
    }
}

impl App {
    /// Refresh the conversation list from the backend.
    pub fn load_conversations(&mut self) -> AppCommand {
        AppCommand::ListConversations {
            request_id: self.session.begin_listing(),
        }
    }

    pub(crate) fn conversations_loaded(
        &mut self,
        request_id: u64,
        result: Result<Vec<ConversationSummary>, ApiError>,
    ) {
        if !self.session.finish_listing(request_id) {
            debug!(request_id, "discarding superseded conversation listing");
            return;
        }

        match result {
            Ok(summaries) => {
                debug!(count = summaries.len(), "conversation list refreshed");
                let active = self.session.active_conversation_id.as_deref();
                self.ui.conversations.replace(summaries, active);
            }
            Err(err) => self
                .ui
                .set_error(format!("Could not load conversations: {err}")),
        }
    }

    /// Rows of the conversation list with the active one marked.
    pub fn conversation_entries(&self) -> Vec<ConversationEntry> {
        self.ui
            .conversations
            .entries(self.session.active_conversation_id.as_deref())
    }
}
