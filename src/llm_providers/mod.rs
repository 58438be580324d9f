//! LLM provider abstraction.
//!
//! Single source of truth for supported providers, their defaults, and the
//! call contract the rest of the crate programs against. The service only
//! ever needs "prompt in, raw text out"; everything provider-specific stays
//! behind [`LLMProvider`].

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

mod gemini;
mod openai;

pub use gemini::GeminiProvider;
pub use openai::OpenAIProvider;

/// Call contract for an LLM backend: one prompt pair in, raw text out.
///
/// Implementations must be safe to share across concurrent requests; they
/// hold no per-request state.
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Generates a completion for the given system and user prompts
    async fn generate_message(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;
}

/// Supported LLM providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LLMProviderType {
    #[default]
    Gemini,
    OpenAI,
}

impl LLMProviderType {
    /// All available providers
    pub const ALL: &'static [LLMProviderType] =
        &[LLMProviderType::Gemini, LLMProviderType::OpenAI];

    /// Provider name as used in config files and the CLI
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::OpenAI => "openai",
        }
    }

    /// Environment variable holding the API key for this provider
    pub const fn api_key_env(&self) -> &'static str {
        match self {
            Self::Gemini => "GOOGLE_API_KEY",
            Self::OpenAI => "OPENAI_API_KEY",
        }
    }

    /// Get all provider names as strings
    pub fn all_names() -> Vec<&'static str> {
        Self::ALL.iter().map(Self::name).collect()
    }
}

impl FromStr for LLMProviderType {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        // "google" is accepted as an alias since the API key and billing
        // surface carry that name
        let normalized = if lower == "google" { "gemini" } else { &lower };

        Self::ALL
            .iter()
            .find(|p| p.name() == normalized)
            .copied()
            .ok_or_else(|| ProviderError::Unknown(s.to_string()))
    }
}

impl fmt::Display for LLMProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Provider configuration error
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Unknown provider: {0}. Supported: gemini, openai")]
    Unknown(String),
    #[error("API key required for provider: {0}")]
    MissingApiKey(String),
}

/// Configuration handed to a provider at construction time
#[derive(Debug, Clone, Default)]
pub struct LLMProviderConfig {
    /// API key for the provider
    pub api_key: String,
    /// Model to use; empty means the provider default
    pub model: String,
    /// Additional generation parameters (temperature, top_p, ...)
    pub additional_params: HashMap<String, String>,
}

/// Static metadata about a provider
pub struct ProviderMetadata {
    pub name: &'static str,
    pub default_model: &'static str,
    pub default_token_limit: usize,
    pub requires_api_key: bool,
}

/// Returns metadata for the given provider type
pub fn get_provider_metadata(provider_type: LLMProviderType) -> ProviderMetadata {
    match provider_type {
        LLMProviderType::Gemini => gemini::get_metadata(),
        LLMProviderType::OpenAI => openai::get_metadata(),
    }
}

/// Creates a provider instance from its configuration
pub fn create_provider(
    provider_type: LLMProviderType,
    config: LLMProviderConfig,
) -> Result<Arc<dyn LLMProvider>> {
    let metadata = get_provider_metadata(provider_type);
    if metadata.requires_api_key && config.api_key.is_empty() {
        return Err(ProviderError::MissingApiKey(provider_type.to_string()).into());
    }

    let provider: Arc<dyn LLMProvider> = match provider_type {
        LLMProviderType::Gemini => Arc::new(GeminiProvider::new(config)),
        LLMProviderType::OpenAI => Arc::new(OpenAIProvider::new(config)),
    };
    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_from_str() {
        assert_eq!(
            "gemini".parse::<LLMProviderType>().ok(),
            Some(LLMProviderType::Gemini)
        );
        assert_eq!(
            "OpenAI".parse::<LLMProviderType>().ok(),
            Some(LLMProviderType::OpenAI)
        );
        // Alias used by the API key / billing surface
        assert_eq!(
            "google".parse::<LLMProviderType>().ok(),
            Some(LLMProviderType::Gemini)
        );
        assert!("invalid".parse::<LLMProviderType>().is_err());
    }

    #[test]
    fn test_provider_metadata() {
        let gemini = get_provider_metadata(LLMProviderType::Gemini);
        assert_eq!(gemini.name, "Gemini");
        assert!(gemini.requires_api_key);

        let openai = get_provider_metadata(LLMProviderType::OpenAI);
        assert_eq!(openai.name, "OpenAI");
        assert!(openai.default_token_limit > 0);
    }

    #[test]
    fn test_create_provider_requires_api_key() {
        let result = create_provider(LLMProviderType::Gemini, LLMProviderConfig::default());
        assert!(result.is_err(), "providers without an API key must fail");
    }

    #[test]
    fn test_api_key_env_names() {
        assert_eq!(LLMProviderType::Gemini.api_key_env(), "GOOGLE_API_KEY");
        assert_eq!(LLMProviderType::OpenAI.api_key_env(), "OPENAI_API_KEY");
    }
}
