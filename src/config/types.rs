//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::policies::{LoanPolicy, DEFAULT_FINE_PER_DAY_UNITS, DEFAULT_LOAN_PERIOD_DAYS};
use crate::domain::value_objects::Money;

use super::loader::{self, ConfigError, ConfigWarning};

/// Lending rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LendingConfig {
    #[serde(default = "default_loan_period_days")]
    pub loan_period_days: u32,

    /// Fine per overdue day, in whole currency units
    #[serde(default = "default_fine_per_day")]
    pub fine_per_day: u64,
}

impl Default for LendingConfig {
    fn default() -> Self {
        Self {
            loan_period_days: default_loan_period_days(),
            fine_per_day: default_fine_per_day(),
        }
    }
}

fn default_loan_period_days() -> u32 {
    DEFAULT_LOAN_PERIOD_DAYS
}

fn default_fine_per_day() -> u64 {
    DEFAULT_FINE_PER_DAY_UNITS
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,

    /// Prefix printed before amounts
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
            currency: default_currency(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_currency() -> String {
    "Rs.".to_string()
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub lending: LendingConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (LIBRIS_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Reject values the lending engine cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lending.loan_period_days == 0 {
            return Err(ConfigError::Invalid {
                key: "lending.loan_period_days".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Loan policy described by the `[lending]` section
    pub fn loan_policy(&self) -> LoanPolicy {
        LoanPolicy::new(
            self.lending.loan_period_days,
            Money::from_units(self.lending.fine_per_day),
        )
    }
}
