//! Accounts domain module (in-memory account registry).
//!
//! This crate contains the business rules for opening, funding, debiting and
//! closing accounts, implemented purely as deterministic domain logic (no IO,
//! no console, no storage).

pub mod account;
pub mod config;
pub mod registry;

pub use account::{Account, AccountKind};
pub use config::{RegistryConfig, RegistryConfigError};
pub use registry::AccountRegistry;
