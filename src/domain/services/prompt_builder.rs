use crate::domain::{
    GenerationRequest, CAPTION_COUNT, CTA_COUNT, HASHTAG_COUNT, HOOK_COUNT, POSTING_PLAN_DAYS,
};

/// Maximum words per hook requested of the model.
pub const MAX_HOOK_WORDS: usize = 12;

const SYSTEM_PROMPT: &str = "\
You are a viral short-form content strategist. Your job is to generate highly engaging, \
scroll-stopping content optimized for maximum reach and engagement.";

/// The two instruction blocks sent to the chat-completion gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Renders the system and user instructions for a generation request.
///
/// Pure: the same request always yields byte-identical text. Platform and tone
/// are interpolated as their wire strings, including values outside the known set.
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn build(request: &GenerationRequest) -> Prompt {
        Prompt {
            system: Self::system_prompt().to_string(),
            user: Self::user_prompt(
                request.topic(),
                request.platform().as_str(),
                request.tone().as_str(),
            ),
        }
    }

    pub fn system_prompt() -> &'static str {
        SYSTEM_PROMPT
    }

    pub fn user_prompt(topic: &str, platform: &str, tone: &str) -> String {
        format!(
            r##"Generate content for:
Platform: {platform}
Topic: {topic}
Tone: {tone}

Output in this exact JSON format:
{{
  "hooks": ["hook1", "hook2", ...],
  "captions": ["caption1", "caption2", ...],
  "hashtags": ["#hashtag1", "#hashtag2", ...],
  "ctas": ["cta1", "cta2", ...],
  "postingPlan": [
    {{"day": "Day 1", "idea": "content idea"}},
    ...
  ]
}}

Requirements:
1. Generate exactly {HOOK_COUNT} scroll-stopping hooks (max {MAX_HOOK_WORDS} words each, no emojis, must create curiosity or strong emotion)
2. Generate exactly {CAPTION_COUNT} high-converting captions (optimized for the platform's algorithm)
3. Generate exactly {HASHTAG_COUNT} relevant trending hashtags, each starting with # (include mix of popular and niche tags)
4. Generate exactly {CTA_COUNT} strong CTA lines that drive engagement
5. Generate a {POSTING_PLAN_DAYS}-day posting plan with exactly {POSTING_PLAN_DAYS} entries and a unique content idea for each day

Rules:
- Hooks must create curiosity, shock, or emotional response
- All content must be optimized for short-form video growth on {platform}
- Use simple, creator-friendly language that feels native to {platform}
- Make content feel authentic, not salesy
- Match the selected tone ({tone}) throughout

Return ONLY the JSON object, no other text."##
        )
    }
}
