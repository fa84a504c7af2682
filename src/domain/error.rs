use thiserror::Error;

pub const RATE_LIMITED_MESSAGE: &str = "Rate limit exceeded. Please try again in a moment.";
pub const QUOTA_EXHAUSTED_MESSAGE: &str = "AI credits exhausted. Please add more credits.";

/// Every way a generation request can fail.
///
/// The `Display` text of each variant is short and safe to show to an end user.
/// Diagnostic payloads (`body`, `raw`, `detail`) are carried for logging only.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("{}", RATE_LIMITED_MESSAGE)]
    RateLimited,

    #[error("{}", QUOTA_EXHAUSTED_MESSAGE)]
    QuotaExhausted,

    #[error("AI gateway error: {status}")]
    UpstreamError { status: u16, body: String },

    #[error("AI gateway unreachable")]
    Transport(String),

    #[error("Malformed AI response: {reason}")]
    MalformedResponse {
        reason: String,
        detail: Option<String>,
        raw: Option<String>,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Generation limit reached ({limit} generations)")]
    UsageLimitReached { limit: u64 },

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl GenerationError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::ConfigurationError(msg.into())
    }

    pub fn upstream(status: u16, body: impl Into<String>) -> Self {
        Self::UpstreamError {
            status,
            body: body.into(),
        }
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// A malformed-response failure with no parse detail, e.g. empty content.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
            detail: None,
            raw: None,
        }
    }

    /// A malformed-response failure retaining the decoder error and the model text.
    pub fn malformed_with_raw(
        reason: impl Into<String>,
        detail: impl Into<String>,
        raw: impl Into<String>,
    ) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
            detail: Some(detail.into()),
            raw: Some(raw.into()),
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::StorageError(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited)
    }

    pub fn is_quota_exhausted(&self) -> bool {
        matches!(self, Self::QuotaExhausted)
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedResponse { .. })
    }

    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::ConfigurationError(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// The raw model text retained for diagnostics, if any.
    pub fn raw_text(&self) -> Option<&str> {
        match self {
            Self::MalformedResponse { raw, .. } => raw.as_deref(),
            _ => None,
        }
    }

    /// HTTP status the inbound interface answers with for this failure.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::RateLimited => 429,
            Self::QuotaExhausted => 402,
            Self::InvalidInput(_) => 400,
            Self::UsageLimitReached { .. } => 403,
            Self::NotFound(_) => 404,
            Self::ConfigurationError(_)
            | Self::UpstreamError { .. }
            | Self::Transport(_)
            | Self::MalformedResponse { .. }
            | Self::StorageError(_) => 500,
        }
    }

    /// Short human-readable message for the end user.
    ///
    /// Configuration failures never name the missing credential.
    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError(_) => "Content generation is not configured.".to_string(),
            Self::MalformedResponse { .. } => "Failed to parse AI response".to_string(),
            Self::StorageError(_) => "Something went wrong. Please try again.".to_string(),
            Self::InvalidInput(msg) | Self::NotFound(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}
