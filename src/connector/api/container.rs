use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::application::{
    CompletionTransport, ContentGenerator, DeleteGenerationUseCase, GenerateContentUseCase,
    GenerationRepository, ListHistoryUseCase, UsageRepository,
};
use crate::connector::http::HttpState;
use crate::{
    CompletionGatewayClient, GatewayConfig, InMemoryGenerationRepository, InMemoryUsageRepository,
    JsonFileRepository, ReqwestTransport,
};

pub const STORE_FILE_NAME: &str = "viralhook.json";

pub struct ContainerConfig {
    pub data_dir: String,
    /// Keep history and the usage counter in memory instead of `data_dir`.
    pub memory_storage: bool,
    /// Refuse new generations once this many have been made. `None` is unlimited.
    pub usage_limit: Option<u64>,
    pub gateway: GatewayConfig,
}

pub struct Container {
    generator: Arc<dyn ContentGenerator>,
    history: Arc<dyn GenerationRepository>,
    usage: Arc<dyn UsageRepository>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let transport = Arc::new(ReqwestTransport::new(config.gateway.base_url()));
        Self::with_transport(config, transport)
    }

    /// Wires everything around a caller-supplied transport.
    pub fn with_transport(config: ContainerConfig, transport: Arc<dyn CompletionTransport>) -> Self {
        debug!("Gateway: {:?}", config.gateway);
        let generator: Arc<dyn ContentGenerator> = Arc::new(CompletionGatewayClient::new(
            config.gateway.clone(),
            transport,
        ));

        let (history, usage): (Arc<dyn GenerationRepository>, Arc<dyn UsageRepository>) =
            if config.memory_storage {
                debug!("Using in-memory history storage");
                (
                    Arc::new(InMemoryGenerationRepository::new()),
                    Arc::new(InMemoryUsageRepository::new()),
                )
            } else {
                let path = PathBuf::from(&config.data_dir).join(STORE_FILE_NAME);
                debug!("Using history store at {}", path.display());
                let store = Arc::new(JsonFileRepository::new(path));
                (store.clone(), store)
            };

        Self {
            generator,
            history,
            usage,
            config,
        }
    }

    pub fn generate_use_case(&self) -> GenerateContentUseCase {
        GenerateContentUseCase::new(self.generator.clone())
            .with_history(self.history.clone())
            .with_usage(self.usage.clone(), self.config.usage_limit)
    }

    pub fn history_use_case(&self) -> ListHistoryUseCase {
        ListHistoryUseCase::new(self.history.clone())
    }

    pub fn delete_use_case(&self) -> DeleteGenerationUseCase {
        DeleteGenerationUseCase::new(self.history.clone())
    }

    pub fn http_state(&self) -> HttpState {
        HttpState {
            generate: Arc::new(self.generate_use_case()),
            history: Arc::new(self.history_use_case()),
            delete: Arc::new(self.delete_use_case()),
        }
    }

    pub fn data_dir(&self) -> &str {
        &self.config.data_dir
    }
}
