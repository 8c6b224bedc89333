//! kanadex configuration module.
//!
//! Provides configuration file support via `kanadex.toml`, environment
//! variables, and runtime overrides.
//!
//! # Priority (highest to lowest)
//!
//! 1. Runtime overrides (`Index::with_config`)
//! 2. Environment variables (`KANADEX_*`)
//! 3. Configuration file (`kanadex.toml`)
//! 4. Default values

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Invalid configuration value.
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue {
        /// Configuration key that failed validation.
        key: String,
        /// Validation error message.
        message: String,
    },
}

/// Search configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Default result limit when `search` is called without one.
    pub default_limit: usize,
    /// Hard cap on results for limit-carrying searches; uncapped
    /// searches return every match.
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: 10,
            max_results: 10_000,
        }
    }
}

/// Normalization configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Enable romaji to hiragana transliteration of query strings.
    pub romaji: bool,
    /// Memoize normalized forms. Disable only on memory-constrained
    /// hosts; every string then renormalizes on each use.
    pub cache: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            romaji: true,
            cache: true,
        }
    }
}

/// Main kanadex configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IndexConfig {
    /// Search configuration.
    pub search: SearchConfig,
    /// Normalization configuration.
    pub normalize: NormalizeConfig,
}

impl IndexConfig {
    /// Loads configuration from default sources.
    ///
    /// Priority: defaults < file < environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration parsing fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path("kanadex.toml")
    }

    /// Loads configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration parsing fails.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("KANADEX_").split("_").lowercase(false));

        figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Creates a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::string(toml_str));

        figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Serializes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                key: "search.default_limit".to_string(),
                message: "value must be >= 1".to_string(),
            });
        }

        if self.search.max_results == 0 {
            return Err(ConfigError::InvalidValue {
                key: "search.max_results".to_string(),
                message: "value must be >= 1".to_string(),
            });
        }

        if self.search.default_limit > self.search.max_results {
            return Err(ConfigError::InvalidValue {
                key: "search.default_limit".to_string(),
                message: format!(
                    "value {} exceeds search.max_results ({})",
                    self.search.default_limit, self.search.max_results
                ),
            });
        }

        Ok(())
    }
}
