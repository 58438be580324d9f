use std::sync::Arc;

use super::error::PipelineError;
use super::extract;
use super::prompt::{
    WEBDEV_SYSTEM_PROMPT, create_component_user_prompt, create_explain_user_prompt,
    create_markup_user_prompt, create_triage_system_prompt,
};
use super::types::{GenerationResult, SiteClassification};
use crate::config::Config;
use crate::llm;
use crate::llm_providers::{LLMProvider, LLMProviderConfig, LLMProviderType, create_provider};
use crate::log_debug;
use anyhow::Result;

/// Service for turning website requests into generated code with AI assistance.
///
/// Holds two provider handles built from the same configuration: triage runs
/// deterministic (temperature 0.0), generation runs creative (0.7). The
/// service keeps no per-request state and is safe to share across concurrent
/// requests behind an `Arc`.
pub struct SiteService {
    config: Config,
    triage_provider: Arc<dyn LLMProvider>,
    generation_provider: Arc<dyn LLMProvider>,
}

impl SiteService {
    /// Create a new `SiteService` from the given configuration.
    ///
    /// Fails when the configured default provider is unknown or its API key
    /// is missing. Configuration is explicit here on purpose: there is no
    /// ambient/global credential lookup anywhere below this point.
    pub fn new(config: Config) -> Result<Self> {
        let provider_type: LLMProviderType = config.default_provider.parse()?;

        let base = config
            .get_provider_config(&config.default_provider)
            .cloned()
            .unwrap_or_default();

        let triage_provider = create_provider(
            provider_type,
            provider_config_with_temperature(&base, "0.0"),
        )?;
        let generation_provider = create_provider(
            provider_type,
            provider_config_with_temperature(&base, "0.7"),
        )?;

        Ok(Self {
            config,
            triage_provider,
            generation_provider,
        })
    }

    /// Create a service with explicit provider handles.
    ///
    /// This is the injection point used by tests to stand stub providers in
    /// for the real LLM.
    pub fn with_providers(
        config: Config,
        triage_provider: Arc<dyn LLMProvider>,
        generation_provider: Arc<dyn LLMProvider>,
    ) -> Self {
        Self {
            config,
            triage_provider,
            generation_provider,
        }
    }

    /// The configuration this service was built from
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Classify a request: one structured LLM call, never retried.
    ///
    /// Any failure - transport or schema - surfaces as
    /// [`PipelineError::Classification`].
    pub async fn classify(&self, request: &str) -> Result<SiteClassification, PipelineError> {
        let system_prompt =
            create_triage_system_prompt().map_err(PipelineError::Classification)?;

        llm::get_structured_message(self.triage_provider.as_ref(), &system_prompt, request)
            .await
            .map_err(PipelineError::Classification)
    }

    /// Generate a full HTML/CSS/JS site.
    ///
    /// Only the LLM call itself can fail; malformed output degrades through
    /// the extraction fallbacks and still produces a result.
    pub async fn generate_markup(
        &self,
        request: &str,
        classification: &SiteClassification,
    ) -> Result<GenerationResult, PipelineError> {
        let user_prompt = create_markup_user_prompt(request, classification);
        let raw = llm::get_text_message(
            self.generation_provider.as_ref(),
            WEBDEV_SYSTEM_PROMPT,
            &user_prompt,
        )
        .await
        .map_err(PipelineError::Generation)?;

        log_debug!("Markup generation reply: {} chars", raw.len());
        Ok(extract::extract_markup(&raw))
    }

    /// Generate a React component plus styling.
    ///
    /// Same failure contract as [`Self::generate_markup`].
    pub async fn generate_component(
        &self,
        request: &str,
        classification: &SiteClassification,
    ) -> Result<GenerationResult, PipelineError> {
        let user_prompt = create_component_user_prompt(request, classification);
        let raw = llm::get_text_message(
            self.generation_provider.as_ref(),
            WEBDEV_SYSTEM_PROMPT,
            &user_prompt,
        )
        .await
        .map_err(PipelineError::Generation)?;

        log_debug!("Component generation reply: {} chars", raw.len());
        Ok(extract::extract_component(&raw))
    }

    /// Answer a web development question as free-form text
    pub async fn explain_concept(&self, request: &str) -> Result<String, PipelineError> {
        let user_prompt = create_explain_user_prompt(request);
        llm::get_text_message(
            self.generation_provider.as_ref(),
            WEBDEV_SYSTEM_PROMPT,
            &user_prompt,
        )
        .await
        .map_err(PipelineError::Generation)
    }
}

/// Base provider config with a default temperature; explicit configuration
/// keeps precedence
fn provider_config_with_temperature(
    base: &crate::config::ProviderConfig,
    temperature: &str,
) -> LLMProviderConfig {
    let mut additional_params = base.additional_params.clone();
    additional_params
        .entry("temperature".to_string())
        .or_insert_with(|| temperature.to_string());

    LLMProviderConfig {
        api_key: base.api_key.clone(),
        model: base.model.clone(),
        additional_params,
    }
}
