use anyhow::Result;

use crate::cli::OutputFormat;
use crate::Generation;

use super::super::Container;

/// Number of hooks previewed per history entry.
const HOOK_PREVIEW: usize = 3;

pub struct HistoryController<'a> {
    container: &'a Container,
}

impl<'a> HistoryController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn history(&self, limit: Option<usize>, format: OutputFormat) -> Result<String> {
        let use_case = self.container.history_use_case();
        let generations = use_case.execute(limit).await?;

        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&generations)?),
            OutputFormat::Text => Ok(self.format_history(&generations)),
        }
    }

    pub async fn show(&self, id: &str, format: OutputFormat) -> Result<String> {
        let generation = self.container.history_use_case().get(id).await?;

        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&generation)?),
            OutputFormat::Text => Ok(generation.result().to_text_export(
                generation.topic(),
                generation.platform().label(),
                generation.tone().as_str(),
            )),
        }
    }

    pub async fn delete(&self, id: &str) -> Result<String> {
        self.container.delete_use_case().execute(id).await?;
        Ok("Generation removed from history.".to_string())
    }

    fn format_history(&self, generations: &[Generation]) -> String {
        if generations.is_empty() {
            return "No generations yet.".to_string();
        }

        let mut output = format!("{} generations:\n\n", generations.len());
        for generation in generations {
            output.push_str(&format!(
                "  {} ({})\n    Platform: {}, Tone: {}, Created: {}\n",
                generation.topic(),
                generation.id(),
                generation.platform().label(),
                generation.tone(),
                generation.created_at()
            ));
            for hook in generation.result().hooks().iter().take(HOOK_PREVIEW) {
                output.push_str(&format!("    | {}\n", hook));
            }
            output.push('\n');
        }
        output
    }
}
