use std::io;

use anyhow::Context;
use clap::Parser;

use stockroom_app::cli::Cli;
use stockroom_app::{Shell, ShellConfig, Stockroom};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ShellConfig::from_env_and_args(&cli);
    stockroom_observability::init(config.log_format);

    let stockroom = if config.seed_demo_data {
        Stockroom::seeded().context("failed to load the demo catalog")?
    } else {
        tracing::warn!("starting without demo data; the catalog is empty");
        Stockroom::new()
    };

    let mut shell = Shell::new(stockroom, config, io::stdin().lock(), io::stdout().lock());
    shell.run().context("shell session failed")?;
    Ok(())
}
