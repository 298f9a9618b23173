//! Registry configuration.

use thiserror::Error;

/// How the registry mints account identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Text placed before the account number, e.g. `ACC`.
    pub id_prefix: String,
    /// Number given to the first account opened.
    pub first_number: u64,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryConfigError {
    #[error("id prefix cannot be empty")]
    EmptyPrefix,

    #[error("first account number {0} exceeds {max}", max = RegistryConfig::MAX_FIRST_NUMBER)]
    FirstNumberTooLarge(u64),
}

impl RegistryConfig {
    pub const DEFAULT_PREFIX: &'static str = "ACC";
    pub const DEFAULT_FIRST_NUMBER: u64 = 1001;
    /// Highest accepted starting number. Leaves at least 2^63 numbers to
    /// mint, more opens than any process can perform.
    pub const MAX_FIRST_NUMBER: u64 = u64::MAX / 2;

    pub fn validate(&self) -> Result<(), RegistryConfigError> {
        if self.id_prefix.trim().is_empty() {
            return Err(RegistryConfigError::EmptyPrefix);
        }
        if self.first_number > Self::MAX_FIRST_NUMBER {
            return Err(RegistryConfigError::FirstNumberTooLarge(self.first_number));
        }
        Ok(())
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            id_prefix: Self::DEFAULT_PREFIX.to_string(),
            first_number: Self::DEFAULT_FIRST_NUMBER,
        }
    }
}
