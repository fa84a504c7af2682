pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    ChatCompletionRequest, ChatMessage, CompletionTransport, ContentGenerator,
    DeleteGenerationUseCase, GenerateContentUseCase, GenerationRepository, ListHistoryUseCase, TransportResponse,
    UsageRepository,
};

pub use cli::{Commands, OutputFormat};

pub use connector::{
    CompletionGatewayClient, GatewayConfig, InMemoryGenerationRepository,
    InMemoryUsageRepository, JsonFileRepository, ReqwestTransport,
};

pub use domain::{
    parse_generation_result, strip_code_fence, Generation, GenerationError, GenerationRequest,
    GenerationResult, Platform, PostingPlanEntry, Prompt, PromptBuilder, Tone,
};
