use super::{LLMProvider, LLMProviderConfig, ProviderMetadata};
use crate::log_debug;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

/// Represents the OpenAI LLM provider
pub struct OpenAIProvider {
    config: LLMProviderConfig,
    client: Client,
}

impl OpenAIProvider {
    /// Creates a new instance of `OpenAIProvider` with the given configuration
    pub fn new(config: LLMProviderConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl LLMProvider for OpenAIProvider {
    /// Generates a message using the OpenAI chat completions API
    async fn generate_message(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let model = if self.config.model.is_empty() {
            get_metadata().default_model
        } else {
            &self.config.model
        };

        let mut request_body = json!({
            "model": model,
            "messages": [
                {"role": "system", "content": system_prompt},
                {"role": "user", "content": user_prompt}
            ],
            "max_tokens": 8192
        });

        // Additional generation parameters ride along at the top level
        for (key, value) in &self.config.additional_params {
            if let Ok(num_val) = value.parse::<f64>() {
                request_body[key] = json!(num_val);
            } else {
                request_body[key] = json!(value);
            }
        }

        // Same JSON hint the Gemini provider applies for structured calls
        if user_prompt.contains("JSON") {
            request_body["response_format"] = json!({"type": "json_object"});
        }

        log_debug!("Calling OpenAI model {}", model);
        let response = self
            .client
            .post("https://api.openai.com/v1/chat/completions")
            .header("Content-Type", "application/json")
            .bearer_auth(&self.config.api_key)
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await?;
            return Err(anyhow::anyhow!(
                "OpenAI API request failed with status {}: {}",
                status,
                text
            ));
        }

        let response_body: serde_json::Value = response.json().await?;

        let content = response_body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("Failed to extract content from OpenAI API response"))?;

        Ok(content.to_string())
    }
}

pub(super) fn get_metadata() -> ProviderMetadata {
    ProviderMetadata {
        name: "OpenAI",
        default_model: "gpt-4.1-mini",
        default_token_limit: 128_000,
        requires_api_key: true,
    }
}
