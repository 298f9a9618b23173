use std::io;

use anyhow::Context;

use bankdesk_accounts::AccountRegistry;
use bankdesk_cli::{CliConfig, Console};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::from_env().context("invalid configuration")?;
    bankdesk_observability::init(config.log_format);

    tracing::info!(
        id_prefix = %config.registry.id_prefix,
        first_number = config.registry.first_number,
        "starting bank console"
    );

    let registry = AccountRegistry::with_config(config.registry)?;
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock(), registry);
    console.run().context("console I/O failed")?;

    Ok(())
}
