use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::GenerationError;

/// Short-form video platform the content is written for.
///
/// Values outside the known set are kept verbatim so they can still be
/// interpolated into the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Platform {
    #[default]
    Instagram,
    YouTube,
    TikTok,
    Other(String),
}

impl Platform {
    pub fn as_str(&self) -> &str {
        match self {
            Platform::Instagram => "instagram",
            Platform::YouTube => "youtube",
            Platform::TikTok => "tiktok",
            Platform::Other(s) => s.as_str(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Platform::Instagram => "Instagram Reels",
            Platform::YouTube => "YouTube Shorts",
            Platform::TikTok => "TikTok",
            Platform::Other(s) => s.as_str(),
        }
    }

    /// Maps exact wire strings to known platforms; anything else, including a
    /// differently cased name, is kept verbatim.
    pub fn parse(s: &str) -> Self {
        match s {
            "instagram" => Platform::Instagram,
            "youtube" => Platform::YouTube,
            "tiktok" => Platform::TikTok,
            _ => Platform::Other(s.to_string()),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Platform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Platform {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Platform::parse(&s))
    }
}

/// Voice the generated content should be written in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    #[default]
    Viral,
    Funny,
    Educational,
    Luxury,
    Motivational,
    Other(String),
}

impl Tone {
    pub fn as_str(&self) -> &str {
        match self {
            Tone::Viral => "viral",
            Tone::Funny => "funny",
            Tone::Educational => "educational",
            Tone::Luxury => "luxury",
            Tone::Motivational => "motivational",
            Tone::Other(s) => s.as_str(),
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "viral" => Tone::Viral,
            "funny" => Tone::Funny,
            "educational" => Tone::Educational,
            "luxury" => Tone::Luxury,
            "motivational" => Tone::Motivational,
            _ => Tone::Other(s.to_string()),
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Tone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Tone {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Tone::parse(&s))
    }
}

/// One user action on the dashboard: what to write about, where, and how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    topic: String,
    #[serde(default)]
    platform: Platform,
    #[serde(default)]
    tone: Tone,
}

impl GenerationRequest {
    /// Builds a request with the topic trimmed. Fails on a blank topic.
    pub fn new(
        topic: impl AsRef<str>,
        platform: Platform,
        tone: Tone,
    ) -> Result<Self, GenerationError> {
        let topic = topic.as_ref().trim();
        if topic.is_empty() {
            return Err(GenerationError::invalid_input(
                "Please enter a content topic or niche.",
            ));
        }
        Ok(Self {
            topic: topic.to_string(),
            platform,
            tone,
        })
    }

    /// Re-checks a request that arrived through deserialization.
    pub fn validated(self) -> Result<Self, GenerationError> {
        Self::new(&self.topic, self.platform, self.tone)
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    pub fn tone(&self) -> &Tone {
        &self.tone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_is_trimmed() {
        let req = GenerationRequest::new("  home workouts \n", Platform::TikTok, Tone::Funny)
            .expect("valid request");
        assert_eq!(req.topic(), "home workouts");
    }

    #[test]
    fn blank_topic_is_rejected() {
        let err = GenerationRequest::new("   ", Platform::Instagram, Tone::Viral).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidInput(_)));
    }

    #[test]
    fn unknown_enum_values_are_preserved() {
        let json = r#"{"topic":"coffee","platform":"Snapchat Spotlight","tone":"sarcastic"}"#;
        let req: GenerationRequest = serde_json::from_str(json).expect("deserialize");
        assert_eq!(req.platform(), &Platform::Other("Snapchat Spotlight".to_string()));
        assert_eq!(req.platform().as_str(), "Snapchat Spotlight");
        assert_eq!(req.tone().as_str(), "sarcastic");
        assert_eq!(req.tone(), &Tone::Other("sarcastic".to_string()));
    }

    #[test]
    fn only_exact_wire_strings_are_known() {
        assert_eq!(Platform::parse("youtube"), Platform::YouTube);
        assert_eq!(Tone::parse("luxury"), Tone::Luxury);
        assert_eq!(Platform::parse("TikTok"), Platform::Other("TikTok".to_string()));
        assert_eq!(Tone::parse("LUXURY"), Tone::Other("LUXURY".to_string()));
        assert_eq!(Platform::YouTube.label(), "YouTube Shorts");
    }

    #[test]
    fn mixed_case_values_round_trip_verbatim() {
        let json = r#"{"topic":"coffee","platform":"TikTok","tone":"Funny"}"#;
        let req: GenerationRequest = serde_json::from_str(json).expect("deserialize");
        assert_eq!(req.platform().as_str(), "TikTok");
        assert_eq!(req.tone().as_str(), "Funny");

        let back = serde_json::to_value(&req).unwrap();
        assert_eq!(back["platform"], "TikTok");
        assert_eq!(back["tone"], "Funny");
    }

    #[test]
    fn platform_and_tone_default_when_absent() {
        let req: GenerationRequest = serde_json::from_str(r#"{"topic":"coffee"}"#).unwrap();
        assert_eq!(req.platform(), &Platform::Instagram);
        assert_eq!(req.tone(), &Tone::Viral);
    }
}
