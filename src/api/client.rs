use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{
    ApiError, ConfigureRequest, ConfigureResponse, ConversationRecord, ConversationSummary,
    LoadConversationResponse, SendMessageRequest, SendMessageResponse, TutorBackend,
};
use crate::utils::url::construct_api_url;

/// Longest slice of an unparseable error body kept in [`ApiError::Status`].
const ERROR_BODY_PREVIEW: usize = 200;

/// [`TutorBackend`] over HTTP.
///
/// The backend remembers the active conversation in its session cookie, so
/// the client keeps a cookie store for its whole lifetime.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        construct_api_url(&self.base_url, path)
    }

    fn conversation_url(&self, id: &str) -> Result<Url, ApiError> {
        let base = self.endpoint("api/load_conversation");
        let mut url = Url::parse(&base).map_err(|err| ApiError::InvalidUrl(format!("{base}: {err}")))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(base.clone()))?
            .push(id);
        Ok(url)
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    if err.is_builder() {
        ApiError::InvalidUrl(err.to_string())
    } else {
        ApiError::Transport(err.to_string())
    }
}

/// Decode a JSON body, preferring the server's own envelope even on error
/// statuses (the backend sends `{success: false, error}` with 4xx/5xx).
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await.map_err(transport)?;
    match serde_json::from_str::<T>(&body) {
        Ok(value) => Ok(value),
        Err(err) if status.is_success() => Err(ApiError::Decode(err.to_string())),
        Err(_) => Err(ApiError::Status {
            status: status.as_u16(),
            body: body.trim().chars().take(ERROR_BODY_PREVIEW).collect(),
        }),
    }
}

#[async_trait]
impl TutorBackend for HttpBackend {
    async fn configure(&self, request: &ConfigureRequest) -> Result<String, ApiError> {
        debug!(
            language = %request.language,
            orchestration = %request.orchestration_type,
            mode = %request.mode,
            "configure"
        );
        let response = self
            .client
            .post(self.endpoint("api/configure"))
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        read_json::<ConfigureResponse>(response).await?.into_result()
    }

    async fn send_message(&self, request: &SendMessageRequest) -> Result<String, ApiError> {
        debug!(chars = request.message.len(), "send_message");
        let response = self
            .client
            .post(self.endpoint("api/send_message"))
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        read_json::<SendMessageResponse>(response).await?.into_result()
    }

    async fn conversations(&self) -> Result<Vec<ConversationSummary>, ApiError> {
        let response = self
            .client
            .get(self.endpoint("api/conversations"))
            .send()
            .await
            .map_err(transport)?;
        let status = response.status();
        let list = read_json::<Vec<ConversationSummary>>(response).await?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: String::new(),
            });
        }
        debug!(count = list.len(), "conversations");
        Ok(list)
    }

    async fn load_conversation(&self, id: &str) -> Result<ConversationRecord, ApiError> {
        debug!(%id, "load_conversation");
        let response = self
            .client
            .get(self.conversation_url(id)?)
            .send()
            .await
            .map_err(transport)?;
        read_json::<LoadConversationResponse>(response)
            .await?
            .into_result()
    }
}
