use std::fmt;

/// Default target: the hosted AI gateway.
pub const DEFAULT_BASE_URL: &str = "https://ai.gateway.lovable.dev";
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";
pub const API_KEY_VAR: &str = "AI_GATEWAY_API_KEY";
pub const BASE_URL_VAR: &str = "AI_GATEWAY_BASE_URL";
pub const MODEL_VAR: &str = "AI_GATEWAY_MODEL";

/// Settings for the chat-completion gateway.
///
/// Built explicitly and handed to [`super::CompletionGatewayClient`] at
/// construction. A missing API key is not an error here; the client reports it
/// as a configuration failure on first use.
#[derive(Clone)]
pub struct GatewayConfig {
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl GatewayConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Construct from environment variables:
    ///
    /// | Variable              | Default                          |
    /// |-----------------------|----------------------------------|
    /// | `AI_GATEWAY_API_KEY`  | none (required for generation)   |
    /// | `AI_GATEWAY_BASE_URL` | `https://ai.gateway.lovable.dev` |
    /// | `AI_GATEWAY_MODEL`    | `google/gemini-2.5-flash`        |
    pub fn from_env() -> Self {
        let base = std::env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var(MODEL_VAR).unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::new(std::env::var(API_KEY_VAR).ok())
            .with_base_url(base)
            .with_model(model)
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_key_counts_as_missing() {
        assert!(GatewayConfig::new(Some("   ".to_string())).api_key().is_none());
        assert!(GatewayConfig::new(None).api_key().is_none());
        assert_eq!(GatewayConfig::new(Some("k".to_string())).api_key(), Some("k"));
    }

    #[test]
    fn debug_redacts_key() {
        let config = GatewayConfig::new(Some("sk-secret".to_string()));
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
