use async_trait::async_trait;
use serde::Serialize;

use crate::domain::GenerationError;

/// OpenAI-style chat-completion request body.
///
/// Only the model and the messages are sent; sampling parameters are left to
/// the gateway defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Status and body of one gateway round trip, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one chat-completion request to the gateway.
///
/// Implementors own the HTTP details (endpoint, headers, TLS). A response with
/// any status is `Ok`; `Err` is reserved for requests that never produced one.
#[async_trait]
pub trait CompletionTransport: Send + Sync {
    async fn send(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<TransportResponse, GenerationError>;
}
