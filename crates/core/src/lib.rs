//! `bankdesk-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no console concerns).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{BankError, BankResult};
pub use id::AccountId;
