use crate::llm_providers::{LLMProviderType, get_provider_metadata};
use crate::log_debug;

use anyhow::{Context, Result, anyhow};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration structure for the Site Forge service
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Config {
    /// Default LLM provider
    pub default_provider: String,
    /// Provider-specific configurations
    pub providers: HashMap<String, ProviderConfig>,
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// Provider-specific configuration structure
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct ProviderConfig {
    /// API key for the provider
    #[serde(default)]
    pub api_key: String,
    /// Model to be used with the provider; empty means the provider default
    #[serde(default)]
    pub model: String,
    /// Additional parameters for the provider (temperature, top_p, ...)
    #[serde(default)]
    pub additional_params: HashMap<String, String>,
}

/// HTTP server configuration
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ServerConfig {
    /// Address to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    5000
}

impl Config {
    /// Load the configuration from the personal config file, falling back
    /// to defaults, then fill missing API keys from the environment
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        let mut config = if config_path.exists() {
            let config_content = fs::read_to_string(&config_path)?;
            toml::from_str(&config_content)?
        } else {
            Self::default()
        };

        config.apply_env_api_keys();
        log_debug!("Configuration loaded: {:?}", config);
        Ok(config)
    }

    /// Load the configuration from an explicit file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        let mut config: Self = toml::from_str(&config_content)
            .with_context(|| format!("Invalid config file '{}'", path.display()))?;

        config.apply_env_api_keys();
        log_debug!("Configuration loaded from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Save the configuration to the personal config file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        let config_content = toml::to_string(self)?;
        fs::write(config_path, config_content)?;
        log_debug!("Configuration saved: {:?}", self);
        Ok(())
    }

    /// Get the path to the configuration file
    fn get_config_path() -> Result<PathBuf> {
        let mut path =
            config_dir().ok_or_else(|| anyhow!("Unable to determine config directory"))?;
        path.push("site-forge");
        std::fs::create_dir_all(&path)?;
        path.push("config.toml");
        Ok(path)
    }

    /// Fill empty API keys from each provider's environment variable
    fn apply_env_api_keys(&mut self) {
        for provider_type in LLMProviderType::ALL {
            let entry = self
                .providers
                .entry(provider_type.name().to_string())
                .or_default();
            if entry.api_key.is_empty()
                && let Ok(key) = std::env::var(provider_type.api_key_env())
            {
                entry.api_key = key;
            }
        }
    }

    /// Check the environment for necessary prerequisites
    pub fn check_environment(&self) -> Result<()> {
        let provider_type: LLMProviderType = self.default_provider.parse()?;

        let metadata = get_provider_metadata(provider_type);
        if metadata.requires_api_key {
            let has_key = self
                .get_provider_config(&self.default_provider)
                .is_some_and(|p| !p.api_key.is_empty());
            if !has_key {
                return Err(anyhow!(
                    "API key required for provider '{}'. Set it in the config file or via {}.",
                    provider_type,
                    provider_type.api_key_env()
                ));
            }
        }

        Ok(())
    }

    /// Update the configuration with new values
    pub fn update(
        &mut self,
        provider: Option<String>,
        api_key: Option<String>,
        model: Option<String>,
        additional_params: Option<HashMap<String, String>>,
    ) -> Result<()> {
        if let Some(provider) = provider {
            self.default_provider.clone_from(&provider);
            self.providers.entry(provider).or_default();
        }

        let provider_config = self
            .providers
            .get_mut(&self.default_provider)
            .context("Could not get default provider")?;

        if let Some(key) = api_key {
            provider_config.api_key = key;
        }
        if let Some(model) = model {
            provider_config.model = model;
        }
        if let Some(params) = additional_params {
            provider_config.additional_params.extend(params);
        }

        log_debug!("Configuration updated: {:?}", self);
        Ok(())
    }

    /// Get the configuration for a specific provider
    pub fn get_provider_config(&self, provider: &str) -> Option<&ProviderConfig> {
        // "google" is accepted as an alias for gemini
        let provider_to_lookup = if provider.eq_ignore_ascii_case("google") {
            "gemini"
        } else {
            provider
        };

        self.providers
            .get(provider_to_lookup)
            .or_else(|| self.providers.get(&provider_to_lookup.to_lowercase()))
    }
}

impl Default for Config {
    fn default() -> Self {
        let mut providers = HashMap::new();
        for name in LLMProviderType::all_names() {
            providers.insert(name.to_string(), ProviderConfig::default());
        }

        Self {
            // The service was built around Gemini first; it stays the default
            default_provider: LLMProviderType::Gemini.name().to_string(),
            providers,
            server: ServerConfig::default(),
        }
    }
}
