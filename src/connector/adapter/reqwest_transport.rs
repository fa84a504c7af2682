use async_trait::async_trait;
use tracing::debug;

use crate::application::{ChatCompletionRequest, CompletionTransport, TransportResponse};
use crate::domain::GenerationError;

const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// HTTP transport for OpenAI-compatible chat-completion gateways.
///
/// Sends a bearer-authenticated JSON POST to `{base_url}/v1/chat/completions`
/// and hands back the status and body untouched. No timeout is configured on
/// the default client; pass a preconfigured one to [`ReqwestTransport::with_client`]
/// if one is wanted.
pub struct ReqwestTransport {
    client: reqwest::Client,
    /// Full endpoint URL (base + CHAT_COMPLETIONS_PATH).
    url: String,
}

impl ReqwestTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), CHAT_COMPLETIONS_PATH);
        Self { client, url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CompletionTransport for ReqwestTransport {
    async fn send(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<TransportResponse, GenerationError> {
        debug!("POST {} (model {})", self.url, request.model);

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| GenerationError::transport(format!("request failed: {e}")))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::transport(format!("failed to read response body: {e}")))?;

        Ok(TransportResponse::new(status, body))
    }
}
