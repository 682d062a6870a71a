//! Simulation configuration
//!
//! Parameters for the choice models and the per-run settings (model name,
//! control country, RNG seed). Both deserialize from JSON with defaults for
//! every omitted field.
//!
//! # Example
//!
//! ```
//! use choice_model_core_rs::config::SimulationConfig;
//!
//! let config = SimulationConfig::from_json(
//!     r#"{"model": "us_centric", "control_country": "SE", "rng_seed": 42}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.model, "us_centric");
//! assert_eq!(config.control_country.as_deref(), Some("SE"));
//! ```

use crate::dispatcher::{ChoiceModel, ChoiceModelError};
use crate::weighting::DEFAULT_ALPHA;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default target country for the country-centric model
pub const DEFAULT_COUNTRY: &str = "US";

/// Errors raised while loading or validating configuration
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("alpha must be a finite non-negative number, got {0}")]
    InvalidAlpha(f64),

    #[error("non_country_chance must lie in [0, 1], got {0}")]
    InvalidNonCountryChance(f64),

    #[error("target country code must not be empty")]
    EmptyCountry,

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Tunable constants shared by the rank-aware models
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChoiceModelParams {
    /// Exponential decay rate over rank
    pub alpha: f64,
    /// Country whose tracks are boosted (or suppressed when inverted)
    pub country: String,
    /// Weight multiplier for the disfavoured class, in [0, 1]
    pub non_country_chance: f64,
    /// Favour tracks from outside `country` instead
    pub invert: bool,
}

impl Default for ChoiceModelParams {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            country: DEFAULT_COUNTRY.to_string(),
            non_country_chance: 0.0,
            invert: false,
        }
    }
}

impl ChoiceModelParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_alpha(self.alpha)?;
        check_non_country_chance(self.non_country_chance)?;
        if self.country.is_empty() {
            return Err(ConfigError::EmptyCountry);
        }
        Ok(())
    }
}

/// α must be finite and non-negative
pub(crate) fn check_alpha(alpha: f64) -> Result<(), ConfigError> {
    if alpha.is_finite() && alpha >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidAlpha(alpha))
    }
}

pub(crate) fn check_non_country_chance(chance: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&chance) {
        Ok(())
    } else {
        Err(ConfigError::InvalidNonCountryChance(chance))
    }
}

/// Settings for one acceptance run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Registered choice model name (see [`ChoiceModel::names`])
    pub model: String,
    /// Users from this country are frozen and never accept anything
    #[serde(default)]
    pub control_country: Option<String>,
    /// Seed for deterministic sampling
    #[serde(default)]
    pub rng_seed: u64,
}

impl SimulationConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            control_country: None,
            rng_seed: 0,
        }
    }

    pub fn with_control_country(mut self, country: impl Into<String>) -> Self {
        self.control_country = Some(country.into());
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Parse and validate a JSON configuration.
    ///
    /// Fails on malformed JSON and on a model name that is not registered.
    pub fn from_json(json: &str) -> Result<Self, ChoiceModelError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the model name resolves to a registered model.
    pub fn validate(&self) -> Result<(), ChoiceModelError> {
        self.choice_model().map(|_| ())
    }

    /// Resolve the configured model name.
    pub fn choice_model(&self) -> Result<ChoiceModel, ChoiceModelError> {
        ChoiceModel::from_name(&self.model)
    }
}
