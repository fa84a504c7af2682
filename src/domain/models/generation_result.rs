use serde::{Deserialize, Serialize};

use crate::domain::GenerationError;

pub const HOOK_COUNT: usize = 30;
pub const CAPTION_COUNT: usize = 5;
pub const HASHTAG_COUNT: usize = 15;
pub const CTA_COUNT: usize = 3;
pub const POSTING_PLAN_DAYS: usize = 7;

/// One day of the posting plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingPlanEntry {
    pub day: String,
    pub idea: String,
}

/// The marketing assets produced by one successful generation.
///
/// Field names on the wire match what the model is asked to emit
/// (`postingPlan` is camelCase). Decoding only guarantees the five-field
/// shape; call [`GenerationResult::validate`] to enforce the cardinalities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    hooks: Vec<String>,
    captions: Vec<String>,
    hashtags: Vec<String>,
    ctas: Vec<String>,
    posting_plan: Vec<PostingPlanEntry>,
}

impl GenerationResult {
    pub fn new(
        hooks: Vec<String>,
        captions: Vec<String>,
        hashtags: Vec<String>,
        ctas: Vec<String>,
        posting_plan: Vec<PostingPlanEntry>,
    ) -> Self {
        Self {
            hooks,
            captions,
            hashtags,
            ctas,
            posting_plan,
        }
    }

    pub fn hooks(&self) -> &[String] {
        &self.hooks
    }

    pub fn captions(&self) -> &[String] {
        &self.captions
    }

    pub fn hashtags(&self) -> &[String] {
        &self.hashtags
    }

    pub fn ctas(&self) -> &[String] {
        &self.ctas
    }

    pub fn posting_plan(&self) -> &[PostingPlanEntry] {
        &self.posting_plan
    }

    /// Checks the exact cardinalities and the `#` prefix on every hashtag.
    pub fn validate(&self) -> Result<(), GenerationError> {
        check_count("hooks", self.hooks.len(), HOOK_COUNT)?;
        check_count("captions", self.captions.len(), CAPTION_COUNT)?;
        check_count("hashtags", self.hashtags.len(), HASHTAG_COUNT)?;
        check_count("ctas", self.ctas.len(), CTA_COUNT)?;
        check_count("postingPlan", self.posting_plan.len(), POSTING_PLAN_DAYS)?;

        if let Some(bad) = self.hashtags.iter().find(|t| !t.starts_with('#')) {
            return Err(GenerationError::malformed(format!(
                "hashtag without leading '#': {bad}"
            )));
        }

        Ok(())
    }

    /// Renders the plain-text report offered for download from the results page.
    pub fn to_text_export(&self, topic: &str, platform: &str, tone: &str) -> String {
        let plan = self
            .posting_plan
            .iter()
            .map(|p| format!("{}: {}", p.day, p.idea))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "VIRALHOOK AI - Generated Content\n\
             ================================\n\
             Topic: {topic}\n\
             Platform: {platform}\n\
             Tone: {tone}\n\
             \n\
             HOOKS ({HOOK_COUNT} Scroll-Stopping Openers)\n\
             ----------------------------------\n\
             {hooks}\n\
             \n\
             CAPTIONS ({CAPTION_COUNT} High-Converting)\n\
             ----------------------------\n\
             {captions}\n\
             \n\
             HASHTAGS ({HASHTAG_COUNT} Trending)\n\
             ----------------------\n\
             {hashtags}\n\
             \n\
             CALL-TO-ACTIONS ({CTA_COUNT} Strong CTAs)\n\
             -------------------------------\n\
             {ctas}\n\
             \n\
             {POSTING_PLAN_DAYS}-DAY POSTING PLAN\n\
             ------------------\n\
             {plan}\n",
            hooks = numbered(&self.hooks, "\n"),
            captions = numbered(&self.captions, "\n\n"),
            hashtags = self.hashtags.join(" "),
            ctas = numbered(&self.ctas, "\n"),
        )
    }
}

fn numbered(items: &[String], sep: &str) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join(sep)
}

fn check_count(field: &str, actual: usize, expected: usize) -> Result<(), GenerationError> {
    if actual != expected {
        return Err(GenerationError::malformed(format!(
            "expected {expected} {field}, got {actual}"
        )));
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// A result with exactly the requested cardinalities.
    pub fn complete_result() -> GenerationResult {
        GenerationResult::new(
            (1..=HOOK_COUNT).map(|i| format!("Hook number {i}")).collect(),
            (1..=CAPTION_COUNT).map(|i| format!("Caption {i}")).collect(),
            (1..=HASHTAG_COUNT).map(|i| format!("#tag{i}")).collect(),
            (1..=CTA_COUNT).map(|i| format!("CTA {i}")).collect(),
            (1..=POSTING_PLAN_DAYS)
                .map(|i| PostingPlanEntry {
                    day: format!("Day {i}"),
                    idea: format!("Idea {i}"),
                })
                .collect(),
        )
    }
}
