//! Configuration management for promo
//!
//! Repository-level settings loaded from `.promo/config.toml`: model
//! selection, generation limits, and the environment variable holding the
//! API key.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{PromoError, Result};

/// Repository-level promo configuration
///
/// Loaded from `.promo/config.toml` under the given root.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromoConfig {
    /// Model selection
    #[serde(default)]
    pub models: ModelConfig,

    /// Generation limits
    #[serde(default)]
    pub generation: GenerationConfig,
}

/// Model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Default model to use
    #[serde(default = "default_model")]
    pub default: String,

    /// Environment variable containing the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

/// Generation limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Maximum tokens per generator response
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
}

// Default value providers
fn default_model() -> String {
    "sonnet".to_string()
}

fn default_api_key_env() -> String {
    "ANTHROPIC_API_KEY".to_string()
}

fn default_max_tokens() -> usize {
    1024
}

impl PromoConfig {
    /// Load configuration from `.promo/config.toml` or use defaults
    pub fn load_or_default(root: &Path) -> Result<Self> {
        let config_path = root.join(".promo/config.toml");

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config = toml::from_str(&content)
                .map_err(|e| PromoError::Config(format!("Failed to parse config file: {}", e)))?;
            tracing::debug!("Loaded configuration from {:?}", config_path);
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Write default configuration to `.promo/config.toml`
    pub fn write_default(root: &Path) -> Result<()> {
        let config_dir = root.join(".promo");
        std::fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join("config.toml");
        let config = Self::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| PromoError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            default: default_model(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_tokens: default_max_tokens(),
        }
    }
}
