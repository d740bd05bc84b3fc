use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{
    ApiError, ConfigureRequest, ConversationConfig, ConversationRecord, ConversationSummary,
    SendMessageRequest, TutorBackend,
};
use crate::core::app::App;
use crate::core::config::data::Config;
use crate::core::message::Message;
use crate::utils::logging::LoggingState;

pub fn create_test_app() -> App {
    App::new(&Config::default(), LoggingState::disabled())
}

pub fn create_test_summary(id: &str, language: &str, orchestration: &str) -> ConversationSummary {
    ConversationSummary {
        id: id.to_string(),
        config: ConversationConfig {
            language: language.to_string(),
            orchestration_type: orchestration.to_string(),
            mode: "adaptive".to_string(),
        },
        message_count: None,
        update_time: None,
    }
}

#[derive(Default)]
struct MockState {
    conversations: Vec<(ConversationSummary, Vec<Message>)>,
    active: Option<String>,
    next_id: u32,
    failures: HashMap<&'static str, ApiError>,
    calls: Vec<String>,
}

/// In-memory stand-in for the tutoring backend.
///
/// Keeps conversations like the real server does, answers every message with
/// `"Tutor reply to: <message>"`, and can be told to fail the next call to an
/// endpoint.
#[derive(Default)]
pub struct MockBackend {
    state: Mutex<MockState>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_conversation(
        self,
        id: &str,
        language: &str,
        orchestration: &str,
        messages: Vec<Message>,
    ) -> Self {
        self.state
            .lock()
            .unwrap()
            .conversations
            .push((create_test_summary(id, language, orchestration), messages));
        self
    }

    /// Fail the next call to `endpoint` ("configure", "send_message",
    /// "conversations" or "load_conversation").
    pub fn fail_next(&self, endpoint: &'static str, error: ApiError) {
        self.state.lock().unwrap().failures.insert(endpoint, error);
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    fn begin(&self, endpoint: &'static str, detail: String) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(if detail.is_empty() {
            endpoint.to_string()
        } else {
            format!("{endpoint} {detail}")
        });
        match state.failures.remove(endpoint) {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl TutorBackend for MockBackend {
    async fn configure(&self, request: &ConfigureRequest) -> Result<String, ApiError> {
        self.begin("configure", request.language.clone())?;
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = format!("c{}", state.next_id);
        let summary = ConversationSummary {
            id: id.clone(),
            config: ConversationConfig {
                language: request.language.clone(),
                orchestration_type: request.orchestration_type.clone(),
                mode: request.mode.clone(),
            },
            message_count: Some(0),
            update_time: None,
        };
        state.conversations.push((summary, Vec::new()));
        state.active = Some(id.clone());
        Ok(id)
    }

    async fn send_message(&self, request: &SendMessageRequest) -> Result<String, ApiError> {
        self.begin("send_message", request.message.clone())?;
        let mut state = self.state.lock().unwrap();
        let Some(active) = state.active.clone() else {
            return Err(ApiError::Rejected(
                "No active conversation. Please start a new session.".to_string(),
            ));
        };
        let reply = format!("Tutor reply to: {}", request.message);
        if let Some((_, messages)) = state
            .conversations
            .iter_mut()
            .find(|(summary, _)| summary.id == active)
        {
            messages.push(Message::user(request.message.clone()));
            messages.push(Message::assistant(reply.clone()));
        }
        Ok(reply)
    }

    async fn conversations(&self) -> Result<Vec<ConversationSummary>, ApiError> {
        self.begin("conversations", String::new())?;
        let state = self.state.lock().unwrap();
        Ok(state
            .conversations
            .iter()
            .map(|(summary, _)| summary.clone())
            .collect())
    }

    async fn load_conversation(&self, id: &str) -> Result<ConversationRecord, ApiError> {
        self.begin("load_conversation", id.to_string())?;
        let mut state = self.state.lock().unwrap();
        let record = state
            .conversations
            .iter()
            .find(|(summary, _)| summary.id == id)
            .map(|(summary, messages)| ConversationRecord {
                id: Some(summary.id.clone()),
                config: summary.config.clone(),
                messages: messages.clone(),
                update_time: None,
            })
            .ok_or_else(|| ApiError::Rejected("Conversation not found".to_string()))?;
        state.active = Some(id.to_string());
        Ok(record)
    }
}
