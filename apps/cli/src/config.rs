//! # Configuration
//!
//! Loaded once at startup from environment variables, with defaults.
//!
//! ## Variables
//! ```text
//! STOCKROOM_INVENTORY        inventory.csv   path of the inventory file
//! STOCKROOM_GST_RATE         0.05            tax rate as a fraction
//! STOCKROOM_CURRENCY_SYMBOL  $               printed before amounts
//! RUST_LOG                   warn            log filter (see lib.rs)
//! ```
//!
//! The values are fixed for the life of the process.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockroom_core::validation::parse_tax_rate;
use stockroom_core::TaxRate;

pub const INVENTORY_VAR: &str = "STOCKROOM_INVENTORY";
pub const GST_RATE_VAR: &str = "STOCKROOM_GST_RATE";
pub const CURRENCY_SYMBOL_VAR: &str = "STOCKROOM_CURRENCY_SYMBOL";

const DEFAULT_INVENTORY_PATH: &str = "inventory.csv";
const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Inventory file, read at startup and written on save.
    pub inventory_path: PathBuf,

    /// GST applied to order subtotals.
    pub tax_rate: TaxRate,

    /// Currency symbol (for display)
    pub currency_symbol: String,
}

impl AppConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which returns the value of a
    /// variable or `None` when it is unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let inventory_path = match lookup(INVENTORY_VAR) {
            Some(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: INVENTORY_VAR,
                    reason: "path is empty".to_string(),
                })
            }
            Some(path) => PathBuf::from(path),
            None => PathBuf::from(DEFAULT_INVENTORY_PATH),
        };

        let tax_rate = match lookup(GST_RATE_VAR) {
            Some(value) => parse_tax_rate(&value).map_err(|err| ConfigError::InvalidValue {
                var: GST_RATE_VAR,
                reason: err.to_string(),
            })?,
            None => TaxRate::default(),
        };

        let currency_symbol =
            lookup(CURRENCY_SYMBOL_VAR).unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string());

        Ok(AppConfig {
            inventory_path,
            tax_rate,
            currency_symbol,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            inventory_path: PathBuf::from(DEFAULT_INVENTORY_PATH),
            tax_rate: TaxRate::default(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },
}
