use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{GenerateController, HistoryController};

pub struct Router<'a> {
    generate_controller: GenerateController<'a>,
    history_controller: HistoryController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            generate_controller: GenerateController::new(container),
            history_controller: HistoryController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Generate {
                topic,
                platform,
                tone,
                format,
            } => {
                self.generate_controller
                    .generate(topic, platform, tone, format)
                    .await
            }
            Commands::History { limit, format } => {
                self.history_controller.history(limit, format).await
            }
            Commands::Show { id, format } => self.history_controller.show(&id, format).await,
            Commands::Delete { id } => self.history_controller.delete(&id).await,
            Commands::Serve { .. } => unreachable!("Serve command is handled separately in main"),
        }
    }
}
