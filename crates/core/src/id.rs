//! Strongly-typed identifiers used across the domain.

use core::borrow::Borrow;
use serde::{Deserialize, Serialize};

/// Identifier of an account, e.g. `ACC1001`.
///
/// Ids are minted by the registry from a prefix and a strictly increasing
/// number. Any text converts into an `AccountId` so that user input can be
/// looked up directly; unknown ids simply fail lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Build the id for `number` under `prefix` (`"ACC"` + `1001` -> `ACC1001`).
    pub fn minted(prefix: &str, number: u64) -> Self {
        Self(format!("{prefix}{number}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(value: &str) -> Self {
        Self(value.trim().to_string())
    }
}

impl From<String> for AccountId {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        if trimmed.len() == value.len() {
            Self(value)
        } else {
            Self(trimmed.to_string())
        }
    }
}

impl From<AccountId> for String {
    fn from(value: AccountId) -> Self {
        value.0
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for AccountId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
