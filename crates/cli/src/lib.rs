//! `bankdesk-cli`: numbered text menu in front of the account registry.

pub mod config;
pub mod console;
pub mod menu;

pub use config::{CliConfig, ConfigError};
pub use console::Console;
