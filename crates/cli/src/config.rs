//! Console configuration, read from environment variables.

use bankdesk_accounts::{RegistryConfig, RegistryConfigError};
use bankdesk_observability::{LogFormat, ParseLogFormatError};
use thiserror::Error;

pub const ENV_LOG_FORMAT: &str = "BANKDESK_LOG_FORMAT";
pub const ENV_ID_PREFIX: &str = "BANKDESK_ID_PREFIX";
pub const ENV_FIRST_ACCOUNT_NUMBER: &str = "BANKDESK_FIRST_ACCOUNT_NUMBER";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("BANKDESK_LOG_FORMAT: {0}")]
    LogFormat(#[from] ParseLogFormatError),

    #[error("BANKDESK_FIRST_ACCOUNT_NUMBER: '{0}' is not a non-negative integer")]
    FirstAccountNumber(String),

    #[error("account numbering: {0}")]
    Registry(#[from] RegistryConfigError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub log_format: LogFormat,
    pub registry: RegistryConfig,
}

impl CliConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Unset keys fall back to
    /// their defaults; the resulting numbering is validated before returning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            config.log_format = raw.parse()?;
        }

        if let Some(raw) = lookup(ENV_ID_PREFIX) {
            config.registry.id_prefix = raw.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_FIRST_ACCOUNT_NUMBER) {
            config.registry.first_number = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::FirstAccountNumber(raw.clone()))?;
        }

        config.registry.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = CliConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.registry, RegistryConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = CliConfig::from_lookup(lookup_from(&[
            (ENV_LOG_FORMAT, "json"),
            (ENV_ID_PREFIX, "SAV"),
            (ENV_FIRST_ACCOUNT_NUMBER, "5000"),
        ]))
        .unwrap();
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.registry.id_prefix, "SAV");
        assert_eq!(config.registry.first_number, 5000);
    }

    #[test]
    fn invalid_values_are_reported() {
        let err = CliConfig::from_lookup(lookup_from(&[(ENV_FIRST_ACCOUNT_NUMBER, "-3")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::FirstAccountNumber("-3".to_string()));

        let err = CliConfig::from_lookup(lookup_from(&[(ENV_ID_PREFIX, "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::Registry(RegistryConfigError::EmptyPrefix));

        let err = CliConfig::from_lookup(lookup_from(&[(ENV_LOG_FORMAT, "xml")])).unwrap_err();
        assert!(matches!(err, ConfigError::LogFormat(_)));
    }

    #[test]
    fn first_number_without_headroom_is_rejected() {
        let max = u64::MAX.to_string();
        let lookup = lookup_from(&[(ENV_FIRST_ACCOUNT_NUMBER, max.as_str())]);
        let err = CliConfig::from_lookup(lookup).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Registry(RegistryConfigError::FirstNumberTooLarge(u64::MAX))
        );

        let highest = RegistryConfig::MAX_FIRST_NUMBER.to_string();
        let lookup = lookup_from(&[(ENV_FIRST_ACCOUNT_NUMBER, highest.as_str())]);
        let config = CliConfig::from_lookup(lookup).unwrap();
        assert_eq!(config.registry.first_number, RegistryConfig::MAX_FIRST_NUMBER);
    }

    #[test]
    fn from_env_reads_process_environment() {
        // Only this test touches these variables.
        unsafe {
            std::env::set_var(ENV_ID_PREFIX, "ENV");
            std::env::set_var(ENV_FIRST_ACCOUNT_NUMBER, "77");
            std::env::set_var(ENV_LOG_FORMAT, "json");
        }

        let config = CliConfig::from_env();

        unsafe {
            std::env::remove_var(ENV_ID_PREFIX);
            std::env::remove_var(ENV_FIRST_ACCOUNT_NUMBER);
            std::env::remove_var(ENV_LOG_FORMAT);
        }

        let config = config.unwrap();
        assert_eq!(config.registry.id_prefix, "ENV");
        assert_eq!(config.registry.first_number, 77);
        assert_eq!(config.log_format, LogFormat::Json);
    }
}
