//! Engine and transport configuration.
//!
//! Every struct deserializes with `#[serde(default)]` so a partial TOML file
//! only overrides what it names.

pub mod defaults;

mod category_config;
mod scoring_config;
mod server_config;
mod vectorizer_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use category_config::CategoryConfig;
pub use scoring_config::ScoringConfig;
pub use server_config::ServerConfig;
pub use vectorizer_config::VectorizerConfig;

use crate::errors::ConfigError;

/// Top-level configuration for the whole system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerityConfig {
    pub dataset_path: String,
    pub model_path: String,
    pub query_cache_size: u64,
    pub vectorizer: VectorizerConfig,
    pub scoring: ScoringConfig,
    pub categories: CategoryConfig,
    pub server: ServerConfig,
}

impl Default for VerityConfig {
    fn default() -> Self {
        Self {
            dataset_path: defaults::DEFAULT_DATASET_PATH.to_string(),
            model_path: defaults::DEFAULT_MODEL_PATH.to_string(),
            query_cache_size: defaults::DEFAULT_QUERY_CACHE_SIZE,
            vectorizer: VectorizerConfig::default(),
            scoring: ScoringConfig::default(),
            categories: CategoryConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl VerityConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}
