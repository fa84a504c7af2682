use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::application::{
    ChatCompletionRequest, ChatMessage, CompletionTransport, ContentGenerator, TransportResponse,
};
use crate::domain::{
    parse_generation_result, GenerationError, GenerationRequest, GenerationResult, PromptBuilder,
};

use super::gateway_config::{GatewayConfig, API_KEY_VAR};

/// Minimal subset of the chat-completion response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// A [`ContentGenerator`] backed by a hosted chat-completion gateway.
///
/// Each call renders the prompt, performs exactly one round trip through the
/// [`CompletionTransport`], classifies the status and decodes the first
/// choice's text into a validated [`GenerationResult`]. There are no retries
/// and no internal timeout; callers own both.
pub struct CompletionGatewayClient {
    config: GatewayConfig,
    transport: Arc<dyn CompletionTransport>,
}

impl CompletionGatewayClient {
    pub fn new(config: GatewayConfig, transport: Arc<dyn CompletionTransport>) -> Self {
        Self { config, transport }
    }

    fn build_request(&self, request: &GenerationRequest) -> ChatCompletionRequest {
        let prompt = PromptBuilder::build(request);
        ChatCompletionRequest {
            model: self.config.model().to_string(),
            messages: vec![ChatMessage::system(prompt.system), ChatMessage::user(prompt.user)],
        }
    }

    /// Maps a non-2xx status to its failure kind. 429 and 402 never look at the body.
    fn classify_status(response: &TransportResponse) -> Result<(), GenerationError> {
        if response.is_success() {
            return Ok(());
        }
        match response.status {
            429 => {
                warn!("AI gateway rate limited the request");
                Err(GenerationError::RateLimited)
            }
            402 => {
                warn!("AI gateway reports credits exhausted");
                Err(GenerationError::QuotaExhausted)
            }
            status => {
                error!(status, body = %response.body, "AI gateway error");
                Err(GenerationError::upstream(status, response.body.clone()))
            }
        }
    }

    /// Pulls the first choice's message text out of the response envelope.
    fn extract_content(body: &str) -> Result<String, GenerationError> {
        let api_response: ApiResponse = serde_json::from_str(body).map_err(|e| {
            error!(error = %e, body, "Failed to deserialize AI gateway response");
            GenerationError::malformed_with_raw("failed to parse response", e.to_string(), body)
        })?;

        api_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| {
                error!("No content received from AI");
                GenerationError::malformed("no content received")
            })
    }
}

#[async_trait]
impl ContentGenerator for CompletionGatewayClient {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, GenerationError> {
        let api_key = self.config.api_key().ok_or_else(|| {
            error!("{} is not configured", API_KEY_VAR);
            GenerationError::configuration(format!("{API_KEY_VAR} is not configured"))
        })?;

        info!(
            topic = request.topic(),
            platform = request.platform().as_str(),
            tone = request.tone().as_str(),
            "Generating content"
        );

        let chat_request = self.build_request(request);
        let response = self
            .transport
            .send(api_key, &chat_request)
            .await
            .inspect_err(|e| error!("AI gateway request failed: {:?}", e))?;

        Self::classify_status(&response)?;

        let content = Self::extract_content(&response.body)?;
        info!(raw = %content, "Raw AI response");

        let result = parse_generation_result(&content).inspect_err(|e| {
            if let GenerationError::MalformedResponse { reason, detail, .. } = e {
                error!(
                    reason = %reason,
                    detail = detail.as_deref().unwrap_or(""),
                    raw = %content,
                    "Failed to parse AI response"
                );
            }
        })?;

        info!("Successfully generated content");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::*;
    use crate::domain::models::fixtures::complete_result;
    use crate::domain::{Platform, Tone};

    /// Transport that answers every call with a canned response and records requests.
    struct FakeTransport {
        response: TransportResponse,
        calls: AtomicUsize,
        last_request: Mutex<Option<(String, ChatCompletionRequest)>>,
    }

    impl FakeTransport {
        fn new(status: u16, body: impl Into<String>) -> Arc<Self> {
            Arc::new(Self {
                response: TransportResponse::new(status, body),
                calls: AtomicUsize::new(0),
                last_request: Mutex::new(None),
            })
        }

        fn with_content(content: &str) -> Arc<Self> {
            let body = serde_json::json!({
                "choices": [{ "message": { "role": "assistant", "content": content } }]
            });
            Self::new(200, body.to_string())
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CompletionTransport for FakeTransport {
        async fn send(
            &self,
            api_key: &str,
            request: &ChatCompletionRequest,
        ) -> Result<TransportResponse, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some((api_key.to_string(), request.clone()));
            Ok(self.response.clone())
        }
    }

    fn client(transport: Arc<FakeTransport>) -> CompletionGatewayClient {
        CompletionGatewayClient::new(GatewayConfig::new(Some("test-key".to_string())), transport)
    }

    fn request() -> GenerationRequest {
        GenerationRequest::new("home espresso", Platform::Instagram, Tone::Luxury).unwrap()
    }

    fn complete_json() -> String {
        serde_json::to_string(&complete_result()).unwrap()
    }

    #[tokio::test]
    async fn missing_credential_makes_no_network_call() {
        let transport = FakeTransport::with_content(&complete_json());
        let client = CompletionGatewayClient::new(GatewayConfig::new(None), transport.clone());

        let err = client.generate(&request()).await.unwrap_err();
        assert!(err.is_configuration_error());
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn sends_system_then_user_message_with_model() {
        let transport = FakeTransport::with_content(&complete_json());
        client(transport.clone()).generate(&request()).await.unwrap();

        assert_eq!(transport.calls(), 1);
        let (key, sent) = transport.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(key, "test-key");
        assert_eq!(sent.model, "google/gemini-2.5-flash");
        assert_eq!(sent.messages.len(), 2);
        assert_eq!(sent.messages[0].role, "system");
        assert_eq!(sent.messages[1].role, "user");
        assert!(sent.messages[1].content.contains("Topic: home espresso"));

        let wire = serde_json::to_value(&sent).unwrap();
        let keys: Vec<&String> = wire.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 2, "only model and messages are sent");
    }

    #[tokio::test]
    async fn status_429_is_rate_limited() {
        let transport = FakeTransport::new(429, "this is not json and is never parsed");
        let err = client(transport).generate(&request()).await.unwrap_err();
        assert!(err.is_rate_limited());
    }

    #[tokio::test]
    async fn status_402_is_quota_exhausted() {
        let transport = FakeTransport::new(402, "{}");
        let err = client(transport).generate(&request()).await.unwrap_err();
        assert!(err.is_quota_exhausted());
    }

    #[tokio::test]
    async fn other_status_keeps_code_and_body() {
        let transport = FakeTransport::new(503, "upstream overloaded");
        let err = client(transport).generate(&request()).await.unwrap_err();
        match err {
            GenerationError::UpstreamError { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "upstream overloaded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn fenced_content_parses_like_clean_content() {
        let clean = client(FakeTransport::with_content(&complete_json()))
            .generate(&request())
            .await
            .unwrap();
        let fenced = client(FakeTransport::with_content(&format!(
            "```json\n{}\n```",
            complete_json()
        )))
        .generate(&request())
        .await
        .unwrap();
        assert_eq!(clean, fenced);
    }

    #[tokio::test]
    async fn non_json_content_is_malformed_with_raw_text() {
        let transport = FakeTransport::with_content("not json at all");
        let err = client(transport).generate(&request()).await.unwrap_err();
        assert!(err.is_malformed());
        assert_eq!(err.raw_text(), Some("not json at all"));
    }

    #[tokio::test]
    async fn missing_hashtags_is_malformed() {
        let mut value = serde_json::to_value(complete_result()).unwrap();
        value.as_object_mut().unwrap().remove("hashtags");
        let transport = FakeTransport::with_content(&value.to_string());
        let err = client(transport).generate(&request()).await.unwrap_err();
        assert!(err.is_malformed());
    }

    #[tokio::test]
    async fn empty_or_absent_content_is_malformed() {
        for body in [
            r#"{"choices":[]}"#,
            r#"{"choices":[{"message":{"content":""}}]}"#,
            r#"{"choices":[{"message":{"content":null}}]}"#,
            r#"{}"#,
        ] {
            let err = client(FakeTransport::new(200, body))
                .generate(&request())
                .await
                .unwrap_err();
            assert!(err.is_malformed(), "body {body} should be malformed");
            assert!(err.to_string().contains("no content received"));
        }
    }

    #[tokio::test]
    async fn non_json_envelope_is_malformed() {
        let err = client(FakeTransport::new(200, "<html>gateway</html>"))
            .generate(&request())
            .await
            .unwrap_err();
        assert!(err.is_malformed());
    }
}
