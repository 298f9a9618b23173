use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bankdesk_core::{AccountId, BankError, BankResult, Entity};

/// Account kind. Both kinds behave identically; the kind is a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountKind {
    Savings,
    Current,
}

impl AccountKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AccountKind::Savings => "Savings",
            AccountKind::Current => "Current",
        }
    }
}

impl core::fmt::Display for AccountKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountKind {
    type Err = BankError;

    /// Accepts `Savings` or `Current`, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("savings") {
            Ok(AccountKind::Savings)
        } else if trimmed.eq_ignore_ascii_case("current") {
            Ok(AccountKind::Current)
        } else {
            Err(BankError::invalid_kind(trimmed))
        }
    }
}

/// A named balance held by the registry.
///
/// Identity, holder and kind are fixed at creation. The balance only moves
/// through the registry, which validates amounts before handing them here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    holder_name: String,
    kind: AccountKind,
    balance: Decimal,
}

impl Account {
    pub(crate) fn new(
        id: AccountId,
        holder_name: impl Into<String>,
        kind: AccountKind,
        balance: Decimal,
    ) -> Self {
        Self {
            id,
            holder_name: holder_name.into(),
            kind,
            balance,
        }
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// `amount` has already been checked to be positive.
    pub(crate) fn credit(&mut self, amount: Decimal) -> Decimal {
        self.balance += amount;
        self.balance
    }

    /// `amount` has already been checked to be positive.
    pub(crate) fn debit(&mut self, amount: Decimal) -> BankResult<Decimal> {
        if amount > self.balance {
            return Err(BankError::insufficient_balance(amount, self.balance));
        }
        self.balance -= amount;
        Ok(self.balance)
    }
}

impl Entity for Account {
    type Id = AccountId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
