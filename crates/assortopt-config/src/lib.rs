//! Configuration system for assortopt.
//!
//! Load optimizer configuration from TOML or YAML to pick the search
//! strategy, cardinality cap, and local-search seed without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use assortopt_config::{OptimizerConfig, SeedPolicyConfig, StrategyType};
//!
//! let config = OptimizerConfig::from_toml_str(r#"
//!     strategy = "local_search"
//!     cardinality_cap = 4
//!
//!     [local_search]
//!     seed = "empty"
//!     step_limit = 500
//! "#).unwrap();
//!
//! assert_eq!(config.strategy, StrategyType::LocalSearch);
//! assert_eq!(config.cardinality_cap, Some(4));
//! assert_eq!(config.local_search.seed, SeedPolicyConfig::Empty);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use assortopt_config::OptimizerConfig;
//!
//! let config = OptimizerConfig::load("assortopt.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Catalog size up to which `adaptive` runs exact search.
pub const DEFAULT_EXACT_ITEM_LIMIT: usize = 16;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main optimizer configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct OptimizerConfig {
    /// Which optimizer answers `optimize` calls.
    #[serde(default)]
    pub strategy: StrategyType,

    /// Maximum number of items per assortment (None = catalog size).
    #[serde(default)]
    pub cardinality_cap: Option<usize>,

    /// Random seed for the bandit environment's purchase sampler.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Exact search configuration.
    #[serde(default)]
    pub exact: ExactSearchConfig,

    /// Local search configuration.
    #[serde(default)]
    pub local_search: LocalSearchConfig,
}

impl OptimizerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings no catalog could satisfy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cardinality_cap == Some(0) {
            return Err(ConfigError::Invalid(
                "cardinality_cap must be at least 1".to_string(),
            ));
        }
        if self.local_search.step_limit == Some(0) {
            return Err(ConfigError::Invalid(
                "local_search.step_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets the strategy.
    pub fn with_strategy(mut self, strategy: StrategyType) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the cardinality cap.
    pub fn with_cardinality_cap(mut self, cap: usize) -> Self {
        self.cardinality_cap = Some(cap);
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Enables or disables parallel exact search.
    pub fn with_parallel_exact(mut self, parallel: bool) -> Self {
        self.exact.parallel = parallel;
        self
    }

    /// Sets the local search seed policy.
    pub fn with_seed_policy(mut self, seed: SeedPolicyConfig) -> Self {
        self.local_search.seed = seed;
        self
    }
}

/// Optimizer selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyType {
    /// Enumerate every feasible assortment.
    Exact,

    /// Steepest-ascent add/remove/swap search.
    LocalSearch,

    /// Exact up to `exact.item_limit` items, local search beyond.
    #[default]
    Adaptive,
}

/// Exact search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ExactSearchConfig {
    /// Evaluate candidates on the rayon thread pool.
    #[serde(default)]
    pub parallel: bool,

    /// Largest catalog the adaptive strategy searches exhaustively.
    #[serde(default = "default_exact_item_limit")]
    pub item_limit: usize,
}

fn default_exact_item_limit() -> usize {
    DEFAULT_EXACT_ITEM_LIMIT
}

impl Default for ExactSearchConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            item_limit: DEFAULT_EXACT_ITEM_LIMIT,
        }
    }
}

/// Local search configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LocalSearchConfig {
    /// Starting assortment.
    #[serde(default)]
    pub seed: SeedPolicyConfig,

    /// Maximum number of steps (None = run to a local optimum).
    #[serde(default)]
    pub step_limit: Option<u64>,
}

/// Local search starting point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedPolicyConfig {
    /// The single item with the highest stand-alone expected revenue.
    #[default]
    BestSingleton,

    /// The no-purchase baseline; the first steps are greedy adds.
    Empty,
}

#[cfg(test)]
mod tests;
