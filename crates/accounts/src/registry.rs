//! The account registry: owns every live account and mints their ids.

use rust_decimal::Decimal;

use bankdesk_core::{AccountId, BankError, BankResult, Entity};

use crate::account::{Account, AccountKind};
use crate::config::{RegistryConfig, RegistryConfigError};

/// In-memory, insertion-ordered collection of accounts.
///
/// Mutating operations take `&mut self`; the registry does no locking of its
/// own. A failed operation never changes any balance or membership.
#[derive(Debug, Clone)]
pub struct AccountRegistry {
    accounts: Vec<Account>,
    id_prefix: String,
    next_number: u64,
}

impl Default for AccountRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountRegistry {
    /// Empty registry numbering accounts `ACC1001`, `ACC1002`, ...
    pub fn new() -> Self {
        Self::from_valid_config(RegistryConfig::default())
    }

    /// Empty registry minting ids per `config`, which must pass
    /// [`RegistryConfig::validate`].
    pub fn with_config(config: RegistryConfig) -> Result<Self, RegistryConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: RegistryConfig) -> Self {
        Self {
            accounts: Vec::new(),
            id_prefix: config.id_prefix,
            next_number: config.first_number,
        }
    }

    /// Open a new account and return its freshly minted id.
    ///
    /// The initial balance is taken as given, including negative values; only
    /// deposits and withdrawals validate amounts.
    pub fn open_account(
        &mut self,
        holder_name: impl Into<String>,
        kind: AccountKind,
        initial_balance: Decimal,
    ) -> AccountId {
        let id = self.mint_id();
        let account = Account::new(id.clone(), holder_name, kind, initial_balance);

        tracing::info!(
            account_id = %id,
            kind = %kind,
            initial_balance = %initial_balance,
            "account opened"
        );

        self.accounts.push(account);
        id
    }

    /// Credit `amount` to the account and return the new balance.
    pub fn deposit(&mut self, id: &AccountId, amount: Decimal) -> BankResult<Decimal> {
        ensure_positive(amount)?;
        let balance = self.find_mut(id)?.credit(amount);
        tracing::debug!(account_id = %id, %amount, %balance, "deposit applied");
        Ok(balance)
    }

    /// Debit `amount` from the account and return the new balance.
    pub fn withdraw(&mut self, id: &AccountId, amount: Decimal) -> BankResult<Decimal> {
        ensure_positive(amount)?;
        let result = self.find_mut(id)?.debit(amount);
        match &result {
            Ok(balance) => {
                tracing::debug!(account_id = %id, %amount, %balance, "withdrawal applied")
            }
            Err(e) => tracing::debug!(account_id = %id, %amount, error = %e, "withdrawal rejected"),
        }
        result
    }

    pub fn find(&self, id: &AccountId) -> BankResult<&Account> {
        self.accounts
            .iter()
            .find(|a| a.has_id(id))
            .ok_or_else(|| BankError::not_found(id))
    }

    /// Remove the account and hand back its final state.
    ///
    /// The id is retired: the counter is independent of closures, so it is
    /// never minted again.
    pub fn close(&mut self, id: &AccountId) -> BankResult<Account> {
        let index = self.position(id)?;
        let account = self.accounts.remove(index);
        tracing::info!(account_id = %id, balance = %account.balance(), "account closed");
        Ok(account)
    }

    /// All live accounts in the order they were opened.
    pub fn list_all(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn mint_id(&mut self) -> AccountId {
        let id = AccountId::minted(&self.id_prefix, self.next_number);
        // A validated config starts at most halfway up the range, so the
        // counter cannot reach the ceiling within any process lifetime.
        self.next_number = self.next_number.saturating_add(1);
        id
    }

    fn position(&self, id: &AccountId) -> BankResult<usize> {
        self.accounts
            .iter()
            .position(|a| a.has_id(id))
            .ok_or_else(|| BankError::not_found(id))
    }

    fn find_mut(&mut self, id: &AccountId) -> BankResult<&mut Account> {
        let index = self.position(id)?;
        Ok(&mut self.accounts[index])
    }
}

/// Rejects zero and negative movement amounts.
fn ensure_positive(amount: Decimal) -> BankResult<()> {
    if amount <= Decimal::ZERO {
        return Err(BankError::invalid_amount(amount));
    }
    Ok(())
}
