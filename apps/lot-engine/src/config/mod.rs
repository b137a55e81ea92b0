//! Configuration module for the lot engine.
//!
//! Loads YAML configuration with environment variable interpolation and
//! validation. The instrument table can be extended or overridden from the
//! config file without touching calculator logic.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lot_engine::config::{Config, load_config};
//!
//! // Load from default path (config.yaml); missing file means defaults.
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("custom/config.yaml"))?;
//! ```

mod instruments;
mod observability;
mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use instruments::build_registry;
pub use observability::LoggingConfig;
pub use server::ServerConfig;

use crate::domain::instrument::Instrument;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Instrument definitions merged over the builtin registry.
    #[serde(default)]
    pub instruments: Vec<Instrument>,
}

/// Load configuration from a YAML file with environment variable
/// interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "config.yaml";
///   a missing default file yields the default configuration, a missing
///   explicit path is an error.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the file cannot be read, parsed, or
/// validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let resolved = path.unwrap_or("config.yaml");

    if path.is_none() && !std::path::Path::new(resolved).exists() {
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(resolved).map_err(|e| ConfigError::ReadError {
        path: resolved.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a [`ConfigError`] if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax. Unset variables
/// without a default interpolate to the empty string.
#[allow(clippy::expect_used)] // regex pattern is a compile-time constant
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    let mut result = input.to_string();
    for cap in re.captures_iter(input) {
        let (Some(full_match), Some(var_match)) = (cap.get(0), cap.get(1)) else {
            continue;
        };
        let default_value = cap.get(2).map(|m| m.as_str());

        let value = match std::env::var(var_match.as_str()) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.map_or_else(String::new, str::to_string),
        };

        result = result.replace(full_match.as_str(), &value);
    }

    result
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.http_port == 0 {
        return Err(ConfigError::ValidationError(
            "server.http_port must be non-zero".to_string(),
        ));
    }

    for instrument in &config.instruments {
        instrument
            .validate()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn loads_server_and_logging_sections() {
        let yaml = r"
server:
  http_port: 9090
  bind_address: 127.0.0.1
logging:
  level: debug
";
        let config = load_config_from_string(yaml).unwrap();
        assert_eq!(config.server.http_port, 9090);
        assert_eq!(config.server.bind_address, "127.0.0.1");
        assert_eq!(config.logging.level, "debug");
        assert!(config.instruments.is_empty());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config = load_config_from_string("server:\n  http_port: 8081\n").unwrap();
        assert_eq!(config.server.bind_address, "0.0.0.0");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn interpolates_env_var_defaults() {
        let yaml = "logging:\n  level: ${LOT_ENGINE_TEST_UNSET_LEVEL:-warn}\n";
        let config = load_config_from_string(yaml).unwrap();
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn zero_port_is_rejected() {
        let result = load_config_from_string("server:\n  http_port: 0\n");
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn configured_instruments_are_validated() {
        let yaml = r"
instruments:
  - id: BADINST
    name: Bad Instrument
    symbol: BAD/INST
    contract_size: 100
    min_lot_size: 0.01
    max_lot_size: 100
    lot_step: 0
    pip_value_per_lot: 10
    pip_scale: POINT
    reference_price: 100
";
        let result = load_config_from_string(yaml);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn parses_instrument_definitions() {
        let yaml = r"
instruments:
  - id: USDJPY
    name: US Dollar vs Japanese Yen
    symbol: USD/JPY
    contract_size: 100000
    min_lot_size: 0.01
    max_lot_size: 100
    lot_step: 0.01
    pip_value_per_lot: 10
    pip_scale: TEN_THOUSANDTH
    reference_price: 1.0545
";
        let config = load_config_from_string(yaml).unwrap();
        assert_eq!(config.instruments.len(), 1);
        assert_eq!(config.instruments[0].id, "USDJPY");
        assert_eq!(config.instruments[0].contract_size, dec!(100000));
    }
}
