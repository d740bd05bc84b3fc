//! Running controller commands against a backend.

use std::collections::VecDeque;

use super::actions::{apply_action, AppAction, AppCommand};
use super::App;
use crate::api::TutorBackend;

/// Perform one request and wrap its outcome as the matching completion
/// action.
pub async fn execute(backend: &dyn TutorBackend, command: AppCommand) -> AppAction {
    match command {
        AppCommand::Configure {
            request_id,
            request,
        } => {
            let result = backend.configure(&request).await;
            AppAction::SessionConfigured {
                request_id,
                request,
                result,
            }
        }
        AppCommand::SendMessage {
            request_id,
            generation,
            request,
        } => AppAction::MessageReplied {
            request_id,
            generation,
            result: backend.send_message(&request).await,
        },
        AppCommand::ListConversations { request_id } => AppAction::ConversationsLoaded {
            request_id,
            result: backend.conversations().await,
        },
        AppCommand::LoadConversation { request_id, id } => {
            let result = backend.load_conversation(&id).await;
            AppAction::ConversationLoaded {
                request_id,
                id,
                result,
            }
        }
    }
}

/// Apply `action` and then every command it leads to, one request at a
/// time, until the controller has nothing left to ask for.
pub async fn run_until_idle(app: &mut App, backend: &dyn TutorBackend, action: AppAction) {
    let mut queue: VecDeque<AppCommand> = apply_action(app, action).into_iter().collect();
    while let Some(command) = queue.pop_front() {
        let completion = execute(backend, command).await;
        queue.extend(apply_action(app, completion));
    }
}
