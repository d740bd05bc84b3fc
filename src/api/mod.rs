//! Payloads exchanged with the tutoring backend.
//!
//! Every mutating endpoint answers with a `success` flag and either its
//! payload or an `error` string; [`accept`] folds that envelope into a
//! `Result`. The conversation listing is a bare JSON array.

pub mod client;

use std::error::Error as StdError;
use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::message::Message;

pub use client::HttpBackend;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigureRequest {
    pub language: String,
    pub orchestration_type: String,
    pub mode: String,
}

#[derive(Debug, Deserialize)]
pub struct ConfigureResponse {
    pub success: bool,
    pub conversation_id: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendMessageRequest {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct SendMessageResponse {
    pub success: bool,
    pub response: Option<String>,
    pub error: Option<String>,
}

/// Tutoring parameters a conversation was started with.
///
/// Only `language` is guaranteed by every endpoint; the listing adds
/// `orchestration_type` and stored records carry `mode` as well.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationConfig {
    pub language: String,
    #[serde(default)]
    pub orchestration_type: String,
    #[serde(default)]
    pub mode: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConversationSummary {
    pub id: String,
    pub config: ConversationConfig,
    #[serde(default)]
    pub message_count: Option<usize>,
    #[serde(default)]
    pub update_time: Option<String>,
}

impl ConversationSummary {
    /// Label shown in the conversation list.
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.config.language, self.config.orchestration_type
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConversationRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub config: ConversationConfig,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub update_time: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoadConversationResponse {
    pub success: bool,
    pub data: Option<ConversationRecord>,
    pub error: Option<String>,
}

/// Failures surfaced by [`TutorBackend`] calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (connection refused, timeout).
    Transport(String),
    /// Non-success status whose body was not a recognizable envelope.
    Status { status: u16, body: String },
    /// Success status with a body that did not decode.
    Decode(String),
    /// The backend answered `success: false`.
    Rejected(String),
    InvalidUrl(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(message) => write!(f, "Request failed: {message}"),
            ApiError::Status { status, body } if body.is_empty() => {
                write!(f, "Server returned status {status}")
            }
            ApiError::Status { status, body } => {
                write!(f, "Server returned status {status}: {body}")
            }
            ApiError::Decode(message) => write!(f, "Malformed response: {message}"),
            ApiError::Rejected(message) => write!(f, "Server rejected the request: {message}"),
            ApiError::InvalidUrl(message) => write!(f, "Invalid server URL: {message}"),
        }
    }
}

impl StdError for ApiError {}

/// Fold a `{success, <payload>, error}` envelope into a `Result`.
pub fn accept<T>(success: bool, payload: Option<T>, error: Option<String>) -> Result<T, ApiError> {
    if !success {
        return Err(ApiError::Rejected(
            error.unwrap_or_else(|| "no reason given".to_string()),
        ));
    }
    payload.ok_or_else(|| ApiError::Decode("success response is missing its payload".to_string()))
}

impl ConfigureResponse {
    pub fn into_result(self) -> Result<String, ApiError> {
        accept(self.success, self.conversation_id, self.error)
    }
}

impl SendMessageResponse {
    pub fn into_result(self) -> Result<String, ApiError> {
        accept(self.success, self.response, self.error)
    }
}

impl LoadConversationResponse {
    pub fn into_result(self) -> Result<ConversationRecord, ApiError> {
        accept(self.success, self.data, self.error)
    }
}

/// The four endpoints the client consumes.
///
/// The active conversation for `send_message` is tracked server-side through
/// the session cookie, so it is not part of the request.
#[async_trait]
pub trait TutorBackend: Send + Sync {
    async fn configure(&self, request: &ConfigureRequest) -> Result<String, ApiError>;

    async fn send_message(&self, request: &SendMessageRequest) -> Result<String, ApiError>;

    async fn conversations(&self) -> Result<Vec<ConversationSummary>, ApiError>;

    async fn load_conversation(&self, id: &str) -> Result<ConversationRecord, ApiError>;
}
