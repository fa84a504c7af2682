use anyhow::Result;

use crate::cli::OutputFormat;
use crate::{GenerationRequest, GenerationResult, Platform, Tone};

use super::super::Container;

pub struct GenerateController<'a> {
    container: &'a Container,
}

impl<'a> GenerateController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn generate(
        &self,
        topic: String,
        platform: String,
        tone: String,
        format: OutputFormat,
    ) -> Result<String> {
        let request = GenerationRequest::new(&topic, Platform::parse(&platform), Tone::parse(&tone))?;

        let use_case = self.container.generate_use_case();
        let result = use_case.execute(request.clone()).await?;

        self.format_result(&request, &result, format)
    }

    fn format_result(
        &self,
        request: &GenerationRequest,
        result: &GenerationResult,
        format: OutputFormat,
    ) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Text => Ok(result.to_text_export(
                request.topic(),
                request.platform().label(),
                request.tone().as_str(),
            )),
        }
    }
}
