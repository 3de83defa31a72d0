//! Ordering configuration loaded with Figment
//!
//! Sources are merged in precedence order (later sources override earlier ones):
//!
//! 1. Built-in defaults ([`DEFAULT_GAP`], [`REBALANCE_THRESHOLD`], [`MIN_GAP`])
//! 2. An optional configuration file (`.toml`, `.yaml`/`.yml` or `.json`)
//! 3. Environment variables prefixed with `KANBAN_ORDERING_`
//!    (e.g. `KANBAN_ORDERING_GAP=500`, `KANBAN_ORDERING_REBALANCE_THRESHOLD=0.01`)
//!
//! ## Example TOML Configuration
//!
//! ```toml
//! gap = 1000.0
//! rebalance_threshold = 0.001
//! min_gap = 0.000001
//! ```

use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};

/// Uniform spacing used for appends and for rebalanced columns
pub const DEFAULT_GAP: f64 = 1000.0;

/// A neighbour gap at or below this value forces a rebalance
pub const REBALANCE_THRESHOLD: f64 = 0.001;

/// Precision floor for positions; the rebalance threshold must stay above it
pub const MIN_GAP: f64 = 0.000001;

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "KANBAN_ORDERING_";

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Configuration file format not supported
    #[error("unsupported configuration file format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// Configuration parsing failed
    #[error("failed to parse configuration: {source}")]
    Parse {
        #[source]
        source: Box<figment::Error>,
    },

    /// Configuration validation failed
    #[error("configuration validation failed: {message}")]
    Validation { message: String },
}

impl ConfigError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        ConfigError::Parse {
            source: Box::new(error),
        }
    }
}

/// Numeric policy of the ordering engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderingConfig {
    /// Spacing between neighbours after an append or a rebalance
    pub gap: f64,
    /// Gaps at or below this value are considered exhausted
    pub rebalance_threshold: f64,
    /// Smallest gap that still reliably separates two doubles
    pub min_gap: f64,
}

impl Default for OrderingConfig {
    fn default() -> Self {
        Self {
            gap: DEFAULT_GAP,
            rebalance_threshold: REBALANCE_THRESHOLD,
            min_gap: MIN_GAP,
        }
    }
}

impl OrderingConfig {
    /// Set the uniform spacing
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Set the rebalance threshold
    pub fn with_rebalance_threshold(mut self, threshold: f64) -> Self {
        self.rebalance_threshold = threshold;
        self
    }

    /// Load configuration from defaults, an optional file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config: OrderingConfig = Self::figment(path)?.extract()?;
        config.validate()?;
        debug!(
            gap = config.gap,
            rebalance_threshold = config.rebalance_threshold,
            min_gap = config.min_gap,
            "loaded ordering configuration"
        );
        Ok(config)
    }

    /// Build the figment with all sources in precedence order
    pub fn figment(path: Option<&Path>) -> Result<Figment, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(OrderingConfig::default()));

        if let Some(path) = path {
            figment = figment.merge(Self::file_provider(path)?);
        }

        trace!(prefix = ENV_PREFIX, "merging environment overrides");
        Ok(figment.merge(Env::prefixed(ENV_PREFIX)))
    }

    fn file_provider(path: &Path) -> Result<Figment, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        trace!("loading config file: {}", path.display());
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("toml") => Ok(Figment::from(Toml::file(path))),
            Some("yaml") | Some("yml") => Ok(Figment::from(Yaml::file(path))),
            Some("json") => Ok(Figment::from(Json::file(path))),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Check that the numeric policy is usable.
    ///
    /// `min_gap < rebalance_threshold < gap`, all finite and positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("gap", self.gap),
            ("rebalance_threshold", self.rebalance_threshold),
            ("min_gap", self.min_gap),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::validation(format!(
                    "{name} must be a finite positive number, got {value}"
                )));
            }
        }

        if self.rebalance_threshold <= self.min_gap {
            return Err(ConfigError::validation(format!(
                "rebalance_threshold ({}) must be greater than min_gap ({})",
                self.rebalance_threshold, self.min_gap
            )));
        }

        if self.rebalance_threshold >= self.gap {
            return Err(ConfigError::validation(format!(
                "rebalance_threshold ({}) must be smaller than gap ({})",
                self.rebalance_threshold, self.gap
            )));
        }

        Ok(())
    }
}
