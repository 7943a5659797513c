//! # Configuration State
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources (later overrides earlier)
//! 1. Defaults (this file)
//! 2. Config file (`--config courtside.toml`)
//! 3. Environment variables (`COURTSIDE_*`)
//! 4. Command line flags (`--catalog`, `--json`, applied in `run`)
//!
//! ## File Format
//! ```toml
//! store_name = "Courtside Tennis"
//! currency_symbol = "$"
//! catalog_path = "catalog.toml"
//! output = "table"   # table | json
//! ```
//!
//! Configuration is read-only once the session starts, so no lock is needed.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use courtside_core::Money;

use crate::error::{ConfigError, ConfigResult};

/// How command responses are written to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text tables
    #[default]
    Table,

    /// One JSON object per line
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" | "text" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::Invalid(format!(
                "Unknown output format: '{}'. Valid options: table, json",
                other
            ))),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Store name, shown in the session banner
    pub store_name: String,

    /// Currency symbol used in listings
    pub currency_symbol: String,

    /// Catalog file; the built-in seed catalog is used when unset
    pub catalog_path: Option<PathBuf>,

    /// Output format for command responses
    pub output: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            store_name: "Courtside Tennis".to_string(),
            currency_symbol: "$".to_string(),
            catalog_path: None,
            output: OutputFormat::Table,
        }
    }
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// A path given explicitly must exist.
    pub fn load(config_path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => {
                debug!("No config file given, using defaults");
                Self::default()
            }
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<&Path>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML config file.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.store_name.trim().is_empty() {
            return Err(ConfigError::Invalid("store_name must not be empty".into()));
        }

        if self.currency_symbol.is_empty() {
            return Err(ConfigError::Invalid(
                "currency_symbol must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Applies `COURTSIDE_*` environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup (the environment in production).
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("COURTSIDE_STORE_NAME") {
            debug!(store_name = %name, "Overriding store name from environment");
            self.store_name = name;
        }

        if let Some(symbol) = lookup("COURTSIDE_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        if let Some(path) = lookup("COURTSIDE_CATALOG") {
            debug!(catalog = %path, "Overriding catalog path from environment");
            self.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(output) = lookup("COURTSIDE_OUTPUT") {
            match output.parse() {
                Ok(parsed) => self.output = parsed,
                Err(e) => warn!("Ignoring COURTSIDE_OUTPUT: {}", e),
            }
        }
    }

    /// Formats an amount with the configured currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use courtside_core::Money;
    /// use courtside_lib::state::AppConfig;
    ///
    /// let config = AppConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(15099)), "$150.99");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        format!("{}{}{}", sign, self.currency_symbol, amount.abs().as_decimal())
    }
}
