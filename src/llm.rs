//! The two outbound LLM call contracts.
//!
//! A structured call constrains the model to a JSON object matching a typed
//! schema; a text call passes the raw reply through untouched. Failures are
//! never retried here: a bad classification or a dead generation call is
//! fatal to the single request it belongs to (the pipeline decides what
//! that means).

use crate::llm_providers::LLMProvider;
use crate::log_debug;
use anyhow::{Result, anyhow};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

/// Generates a structured message and deserializes it into `T`.
///
/// The user prompt is extended with a JSON-only instruction; the reply is
/// parsed directly first, then through progressively more permissive
/// cleanup. A reply that survives none of it is an error - structured
/// output is a hard contract, unlike generation output.
pub async fn get_structured_message<T>(
    provider: &dyn LLMProvider,
    system_prompt: &str,
    user_prompt: &str,
) -> Result<T>
where
    T: DeserializeOwned + JsonSchema,
{
    let enhanced_prompt = format!(
        "{user_prompt}\n\nRespond with a valid JSON object and nothing else. No explanations or text outside the JSON."
    );

    let response_text = provider
        .generate_message(system_prompt, &enhanced_prompt)
        .await?;
    log_debug!(
        "Received structured response ({} chars)",
        response_text.len()
    );

    match parse_json_response(&response_text) {
        Ok(message) => Ok(message),
        Err(e) => {
            log_debug!("JSON parse error: {} text: {}", e, response_text);
            Err(anyhow!("JSON parse error: {}", e))
        }
    }
}

/// Generates a free-form text message and returns the raw reply
pub async fn get_text_message(
    provider: &dyn LLMProvider,
    system_prompt: &str,
    user_prompt: &str,
) -> Result<String> {
    let response_text = provider.generate_message(system_prompt, user_prompt).await?;
    log_debug!("Received text response ({} chars)", response_text.len());
    Ok(response_text)
}

/// Parse a provider's response that should be pure JSON
fn parse_json_response<T: DeserializeOwned>(text: &str) -> Result<T> {
    match serde_json::from_str::<T>(text) {
        Ok(message) => Ok(message),
        Err(e) => {
            // Fallback to a more robust extraction if direct parsing fails
            log_debug!(
                "Direct JSON parse failed: {}. Attempting fallback extraction.",
                e
            );
            extract_and_parse_json(text)
        }
    }
}

/// Extracts and parses JSON from a potentially non-JSON response
fn extract_and_parse_json<T: DeserializeOwned>(text: &str) -> Result<T> {
    let cleaned_json = clean_json_from_llm(text);
    serde_json::from_str(&cleaned_json).map_err(|e| anyhow!("JSON parse error: {}", e))
}

fn clean_json_from_llm(json_str: &str) -> String {
    // Remove potential leading/trailing whitespace and invisible characters
    let trimmed = json_str
        .trim_start_matches(|c: char| c.is_whitespace() || !c.is_ascii())
        .trim_end_matches(|c: char| c.is_whitespace() || !c.is_ascii());

    // If wrapped in code block, remove the markers
    let without_codeblock = if trimmed.starts_with("```") && trimmed.ends_with("```") {
        let start = trimmed.find('{').unwrap_or(0);
        let end = trimmed.rfind('}').map_or(trimmed.len(), |i| i + 1);
        &trimmed[start..end]
    } else {
        trimmed
    };

    // Find the first '{' and last '}' to extract the JSON object
    let start = without_codeblock.find('{').unwrap_or(0);
    let end = without_codeblock
        .rfind('}')
        .map_or(without_codeblock.len(), |i| i + 1);

    without_codeblock[start..end].trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn test_parse_direct_json() {
        let parsed: Sample = parse_json_response(r#"{"name": "a", "count": 2}"#)
            .expect("direct JSON should parse");
        assert_eq!(
            parsed,
            Sample {
                name: "a".to_string(),
                count: 2
            }
        );
    }

    #[test]
    fn test_parse_json_in_code_fence() {
        let text = "```json\n{\"name\": \"a\", \"count\": 2}\n```";
        let parsed: Sample = parse_json_response(text).expect("fenced JSON should parse");
        assert_eq!(parsed.name, "a");
    }

    #[test]
    fn test_parse_json_with_surrounding_prose() {
        let text = "Here is the object you asked for:\n{\"name\": \"a\", \"count\": 2}\nHope it helps!";
        let parsed: Sample = parse_json_response(text).expect("embedded JSON should parse");
        assert_eq!(parsed.count, 2);
    }

    #[test]
    fn test_parse_garbage_fails() {
        let result: Result<Sample> = parse_json_response("no json here at all");
        assert!(result.is_err());
    }

    #[test]
    fn test_clean_json_strips_fence_and_prose() {
        let cleaned = clean_json_from_llm("```json\n{\"k\": 1}\n```");
        assert_eq!(cleaned, "{\"k\": 1}");
    }
}
