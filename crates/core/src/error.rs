//! Domain error model.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::id::AccountId;

/// Result type used across the domain layer.
pub type BankResult<T> = Result<T, BankError>;

/// Domain-level error.
///
/// Every variant is recoverable at the call site. Operations that return one of
/// these leave the registry exactly as it was before the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BankError {
    /// A deposit or withdrawal amount was zero or negative.
    #[error("amount must be positive (got {0})")]
    InvalidAmount(Decimal),

    /// A withdrawal asked for more than the account holds.
    #[error("insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: Decimal, available: Decimal },

    /// No live account carries the given identifier.
    #[error("account {0} not found")]
    NotFound(AccountId),

    /// An account kind could not be parsed from text.
    #[error("invalid account kind '{0}' (expected Savings or Current)")]
    InvalidAccountKind(String),
}

impl BankError {
    pub fn invalid_amount(amount: Decimal) -> Self {
        Self::InvalidAmount(amount)
    }

    pub fn insufficient_balance(requested: Decimal, available: Decimal) -> Self {
        Self::InsufficientBalance {
            requested,
            available,
        }
    }

    pub fn not_found(id: &AccountId) -> Self {
        Self::NotFound(id.clone())
    }

    pub fn invalid_kind(raw: impl Into<String>) -> Self {
        Self::InvalidAccountKind(raw.into())
    }

    /// Whether the error refers to a missing account.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
