use tracing::debug;

use crate::domain::{GenerationError, GenerationResult};

const FENCE: &str = "```";
const JSON_FENCE: &str = "```json";

/// Removes a markdown code fence wrapped around model output.
///
/// Only a leading ```` ```json ```` or ```` ``` ```` and a trailing ```` ``` ````
/// are stripped; the text is trimmed before and after. Unfenced text is only trimmed.
pub fn strip_code_fence(text: &str) -> &str {
    let mut cleaned = text.trim();
    if let Some(rest) = cleaned.strip_prefix(JSON_FENCE) {
        cleaned = rest;
    } else if let Some(rest) = cleaned.strip_prefix(FENCE) {
        cleaned = rest;
    }
    if let Some(rest) = cleaned.strip_suffix(FENCE) {
        cleaned = rest;
    }
    cleaned.trim()
}

/// Decodes model output into a validated [`GenerationResult`].
///
/// Syntax errors, missing fields, wrong element types and cardinality
/// violations all come back as `MalformedResponse`; the raw text is kept on
/// decode failures.
pub fn parse_generation_result(content: &str) -> Result<GenerationResult, GenerationError> {
    let cleaned = strip_code_fence(content);

    let result: GenerationResult = serde_json::from_str(cleaned).map_err(|e| {
        GenerationError::malformed_with_raw("failed to parse response", e.to_string(), content)
    })?;

    result.validate()?;

    debug!(
        hooks = result.hooks().len(),
        hashtags = result.hashtags().len(),
        "Parsed generation result"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::fixtures::complete_result;

    fn complete_json() -> String {
        serde_json::to_string_pretty(&complete_result()).unwrap()
    }

    #[test]
    fn strip_is_noop_on_clean_input() {
        assert_eq!(strip_code_fence("{\"a\":1}"), "{\"a\":1}");
    }

    #[test]
    fn strip_removes_tagged_fence() {
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn strip_removes_untagged_fence() {
        assert_eq!(strip_code_fence("  ```\n{\"a\":1}\n```  \n"), "{\"a\":1}");
    }

    #[test]
    fn strip_leaves_inner_backticks_alone() {
        let text = r#"{"hooks":["use ``` wisely"]}"#;
        assert_eq!(strip_code_fence(text), text);
    }

    #[test]
    fn fenced_and_unfenced_parse_identically() {
        let clean = complete_json();
        let fenced = format!("```json\n{clean}\n```");
        let bare_fence = format!("```\n{clean}\n```");

        let a = parse_generation_result(&clean).expect("clean parses");
        let b = parse_generation_result(&fenced).expect("fenced parses");
        let c = parse_generation_result(&bare_fence).expect("bare fence parses");
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn non_json_is_malformed_and_keeps_raw_text() {
        let err = parse_generation_result("not json at all").unwrap_err();
        assert!(err.is_malformed());
        assert_eq!(err.raw_text(), Some("not json at all"));
    }

    #[test]
    fn missing_hashtags_field_is_malformed() {
        let mut value = serde_json::to_value(complete_result()).unwrap();
        value.as_object_mut().unwrap().remove("hashtags");
        let err = parse_generation_result(&value.to_string()).unwrap_err();
        assert!(err.is_malformed());
        assert!(err.raw_text().is_some());
    }

    #[test]
    fn wrong_element_type_is_malformed() {
        let mut value = serde_json::to_value(complete_result()).unwrap();
        value["ctas"] = serde_json::json!([1, 2, 3]);
        assert!(parse_generation_result(&value.to_string()).unwrap_err().is_malformed());
    }

    #[test]
    fn wrong_cardinality_is_malformed() {
        let mut value = serde_json::to_value(complete_result()).unwrap();
        value["postingPlan"].as_array_mut().unwrap().pop();
        let err = parse_generation_result(&value.to_string()).unwrap_err();
        assert!(err.to_string().contains("postingPlan"));
    }
}
