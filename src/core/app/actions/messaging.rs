use tracing::{debug, warn};

use super::{App, AppAction, AppCommand};
use crate::api::{ApiError, SendMessageRequest};
use crate::core::message::Message;

pub(super) fn handle_messaging_action(app: &mut App, action: AppAction) -> Option<AppCommand> {
    match action {
        AppAction::SubmitMessage => app.send_message(),
        AppAction::MessageReplied {
            request_id,
            generation,
            result,
        } => {
            app.message_replied(request_id, generation, result);
            None
        }
        _ => unreachable!("non-messaging action routed to messaging handler"),
    }
}

impl App {
    /// Send the chat input to the active conversation.
    ///
    /// The user's message and a loading indicator are shown before the
    /// request is handed out. Blank input does nothing at all, and nothing is
    /// sent while a session start or conversation load is still pending,
    /// since the server switches its active conversation when that lands.
    pub fn send_message(&mut self) -> Option<AppCommand> {
        let text = self.ui.input.trim().to_string();
        if text.is_empty() {
            return None;
        }
        if self.session.is_navigating() {
            self.ui
                .set_info("Loading conversation... send again once it opens");
            return None;
        }
        if self.session.active_conversation_id.is_none() {
            self.ui
                .set_error("Start or load a conversation before sending messages");
            return None;
        }

        self.ui.input.clear();
        self.append_message(Message::user(text.clone()));

        let request_id = self.session.next_request_id();
        self.ui.chat.push_loading(request_id);
        self.ui.scroll_to_bottom();

        Some(AppCommand::SendMessage {
            request_id,
            generation: self.ui.chat.generation(),
            request: SendMessageRequest { message: text },
        })
    }

    pub(crate) fn message_replied(
        &mut self,
        request_id: u64,
        generation: u64,
        result: Result<String, ApiError>,
    ) {
        self.ui.chat.remove_loading(request_id);

        if generation != self.ui.chat.generation() {
            debug!(request_id, "dropping reply for a conversation no longer shown");
            return;
        }

        match result {
            Ok(reply) => {
                self.append_message(Message::assistant(reply));
                self.ui.scroll_to_bottom();
            }
            Err(err) => self.ui.set_error(format!("Message failed: {err}")),
        }
    }

    fn append_message(&mut self, message: Message) {
        if let Err(err) = self.session.logging.log_message(&message) {
            warn!("transcript write failed: {err}");
        }
        self.ui.chat.push_message(message);
    }
}
