//! The chat client controller.
//!
//! [`App`] is the whole client-side view model: session state, screen and
//! pane contents, and the configuration form. It never performs I/O itself.
//! Every user intent arrives as an [`AppAction`]; handlers update the model
//! and may hand back one [`AppCommand`] describing a backend request. The
//! caller runs the request (see [`requests`]) and feeds the result back in as
//! another action.

use crate::core::config::data::Config;
use crate::utils::logging::LoggingState;

pub mod actions;
pub mod form;
pub mod requests;
pub mod session;
pub mod ui_state;

pub use actions::{apply_action, AppAction, AppActionDispatcher, AppCommand};
pub use form::{ConfigForm, FormField};
pub use session::SessionContext;
pub use ui_state::{
    ChatEntry, ChatPane, ConversationEntry, ConversationList, Focus, Screen, StatusKind,
    StatusMessage, UiState,
};

pub struct App {
    pub session: SessionContext,
    pub ui: UiState,
    pub form: ConfigForm,
}

impl App {
    pub fn new(config: &Config, logging: LoggingState) -> Self {
        Self {
            session: SessionContext::new(logging),
            ui: UiState::new(),
            form: ConfigForm::from_config(config),
        }
    }

    /// Commands to issue as soon as the client starts.
    pub fn startup_commands(&mut self) -> Vec<AppCommand> {
        vec![self.load_conversations()]
    }
}
