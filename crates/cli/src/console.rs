//! Interactive menu loop over any line-oriented input and output.

use std::io::{self, BufRead, Write};

use rust_decimal::Decimal;

use bankdesk_accounts::{Account, AccountKind, AccountRegistry};
use bankdesk_core::{AccountId, BankError, Entity};

use crate::menu::{MENU, MenuChoice};

const RULE: &str = "---------------------------------";

/// Drives an [`AccountRegistry`] from a text menu.
///
/// Domain failures are printed and the loop carries on; only I/O errors end
/// the session early. End of input ends the session like choosing Exit.
pub struct Console<R, W> {
    input: R,
    output: W,
    registry: AccountRegistry,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, registry: AccountRegistry) -> Self {
        Self {
            input,
            output,
            registry,
        }
    }

    pub fn into_parts(self) -> (R, W, AccountRegistry) {
        (self.input, self.output, self.registry)
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.output, "{MENU}")?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                tracing::debug!("input closed; leaving menu");
                return Ok(());
            };

            match line.parse::<MenuChoice>() {
                Ok(MenuChoice::OpenAccount) => self.open_account()?,
                Ok(MenuChoice::Deposit) => self.deposit()?,
                Ok(MenuChoice::Withdraw) => self.withdraw()?,
                Ok(MenuChoice::DisplayAccount) => self.display_account()?,
                Ok(MenuChoice::CloseAccount) => self.close_account()?,
                Ok(MenuChoice::DisplayAll) => self.display_all()?,
                Ok(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting the system. Goodbye!")?;
                    return Ok(());
                }
                Err(()) => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
    }

    fn open_account(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt("Enter Account Holder Name: ")? else {
            return Ok(());
        };
        let Some(raw_kind) = self.prompt("Enter Account Type (Savings/Current): ")? else {
            return Ok(());
        };
        let kind = match raw_kind.parse::<AccountKind>() {
            Ok(kind) => kind,
            Err(e) => {
                tracing::debug!(error = %e, "rejected account kind");
                return writeln!(
                    self.output,
                    "Invalid account type. Please enter either 'Savings' or 'Current'."
                );
            }
        };
        let Some(initial) = self.prompt_amount("Enter Initial Deposit: ")? else {
            return Ok(());
        };

        let id = self.registry.open_account(name, kind, initial);
        writeln!(
            self.output,
            "Account created successfully! Account Number: {id}"
        )
    }

    fn deposit(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt_existing_account("Enter Account Number: ")? else {
            return Ok(());
        };
        let Some(amount) = self.prompt_amount("Enter amount to deposit: ")? else {
            return Ok(());
        };
        match self.registry.deposit(&id, amount) {
            Ok(balance) => writeln!(
                self.output,
                "Deposit successful! New balance: ${}",
                balance.normalize()
            ),
            Err(e) => writeln!(self.output, "Error: {}", failure_message(Movement::Deposit, &e)),
        }
    }

    fn withdraw(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt_existing_account("Enter Account Number: ")? else {
            return Ok(());
        };
        let Some(amount) = self.prompt_amount("Enter amount to withdraw: ")? else {
            return Ok(());
        };
        match self.registry.withdraw(&id, amount) {
            Ok(balance) => writeln!(
                self.output,
                "Withdrawal successful! New balance: ${}",
                balance.normalize()
            ),
            Err(e) => writeln!(self.output, "Error: {}", failure_message(Movement::Withdrawal, &e)),
        }
    }

    fn display_account(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt_existing_account("Enter Account Number: ")? else {
            return Ok(());
        };
        match self.registry.find(&id) {
            Ok(account) => write_account(&mut self.output, account),
            Err(e) => writeln!(self.output, "Error: {e}"),
        }
    }

    fn close_account(&mut self) -> io::Result<()> {
        let Some(raw) = self.prompt("Enter Account Number to Close: ")? else {
            return Ok(());
        };
        match self.registry.close(&AccountId::from(raw)) {
            Ok(_) => writeln!(self.output, "Account closed successfully!"),
            Err(e) if e.is_not_found() => writeln!(self.output, "Account not found!"),
            Err(e) => writeln!(self.output, "Error: {e}"),
        }
    }

    fn display_all(&mut self) -> io::Result<()> {
        let accounts = self.registry.list_all();
        if accounts.is_empty() {
            return writeln!(self.output, "No accounts found!");
        }
        for account in accounts {
            write_account(&mut self.output, account)?;
        }
        Ok(())
    }

    /// Print `label` and read one line, without its line ending.
    /// `None` means the input is exhausted.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Read an account number and check it exists before asking anything else.
    fn prompt_existing_account(&mut self, label: &str) -> io::Result<Option<AccountId>> {
        let Some(raw) = self.prompt(label)? else {
            return Ok(None);
        };
        let id = AccountId::from(raw);
        if self.registry.find(&id).is_err() {
            writeln!(self.output, "Account not found!")?;
            return Ok(None);
        }
        Ok(Some(id))
    }

    /// Read a decimal amount. Unparseable text is reported and yields `None`.
    fn prompt_amount(&mut self, label: &str) -> io::Result<Option<Decimal>> {
        let Some(raw) = self.prompt(label)? else {
            return Ok(None);
        };
        match raw.trim().parse::<Decimal>() {
            Ok(amount) => Ok(Some(amount)),
            Err(_) => {
                writeln!(self.output, "Invalid amount '{}'. Please enter a number.", raw.trim())?;
                Ok(None)
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Movement {
    Deposit,
    Withdrawal,
}

/// Wording shown to the operator for a rejected deposit or withdrawal.
fn failure_message(movement: Movement, err: &BankError) -> String {
    match (movement, err) {
        (Movement::Deposit, BankError::InvalidAmount(_)) => {
            "Deposit amount must be positive.".to_string()
        }
        (Movement::Withdrawal, BankError::InvalidAmount(_)) => {
            "Withdrawal amount must be positive.".to_string()
        }
        (_, BankError::InsufficientBalance { .. }) => "Insufficient balance.".to_string(),
        (_, other) => other.to_string(),
    }
}

/// Amounts are shown without trailing zeros: `150`, `25.5`.
fn write_account(out: &mut impl Write, account: &Account) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "Account Number : {}", account.id())?;
    writeln!(out, "Holder Name    : {}", account.holder_name())?;
    writeln!(out, "Account Type   : {}", account.kind())?;
    writeln!(out, "Balance        : ${}", account.balance().normalize())?;
    writeln!(out, "{RULE}")
}
