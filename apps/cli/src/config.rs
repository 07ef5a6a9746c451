//! # Configuration
//!
//! Read once at startup from `STOCKROOM_*` environment variables, falling
//! back to defaults. Read-only afterwards.

use std::env;

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Shown in the menu header as `"<store_name> Menu"`.
    pub store_name: String,

    /// Default tracing filter when `RUST_LOG` is not set.
    pub log_filter: String,

    /// Load the demo inventory at startup.
    pub demo_inventory: bool,
}

impl Default for CliConfig {
    /// ## Default Values
    /// - Store name: "Store"
    /// - Log filter: "warn"
    /// - Demo inventory: loaded
    fn default() -> Self {
        CliConfig {
            store_name: "Store".to_string(),
            log_filter: "warn".to_string(),
            demo_inventory: true,
        }
    }
}

impl CliConfig {
    /// Loads configuration from the process environment.
    ///
    /// ## Environment Variables
    /// - `STOCKROOM_STORE_NAME`: menu header name
    /// - `STOCKROOM_LOG`: default log filter (e.g. "info", "stockroom_cli=debug")
    /// - `STOCKROOM_DEMO_INVENTORY`: "true" or "false"
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = CliConfig::default();

        if let Some(store_name) = lookup("STOCKROOM_STORE_NAME") {
            let store_name = store_name.trim();
            if !store_name.is_empty() {
                config.store_name = store_name.to_string();
            }
        }

        if let Some(log_filter) = lookup("STOCKROOM_LOG") {
            config.log_filter = log_filter;
        }

        if let Some(demo) = lookup("STOCKROOM_DEMO_INVENTORY") {
            config.demo_inventory = demo
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("STOCKROOM_DEMO_INVENTORY".to_string()))?;
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<CliConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.store_name, "Store");
        assert!(config.demo_inventory);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("STOCKROOM_STORE_NAME", "Best Buy"),
            ("STOCKROOM_LOG", "debug"),
            ("STOCKROOM_DEMO_INVENTORY", "false"),
        ])
        .unwrap();
        assert_eq!(config.store_name, "Best Buy");
        assert_eq!(config.log_filter, "debug");
        assert!(!config.demo_inventory);
    }

    #[test]
    fn test_blank_store_name_keeps_default() {
        let config = load(&[("STOCKROOM_STORE_NAME", "   ")]).unwrap();
        assert_eq!(config.store_name, "Store");
    }

    #[test]
    fn test_invalid_bool() {
        let err = load(&[("STOCKROOM_DEMO_INVENTORY", "maybe")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for STOCKROOM_DEMO_INVENTORY");
    }
}
