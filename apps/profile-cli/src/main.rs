//! WorkerConnect profile CLI binary.

use clap::Parser;
use workerconnect::{cli::Cli, commands, config::AppConfig, init_tracing, open_session};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load()?;
    if let Some(storage) = cli.storage {
        config.storage = storage;
    }

    // Initialize tracing
    init_tracing(&config.log_level);

    tracing::debug!(
        storage = %config.storage,
        data_dir = %config.data_dir.display(),
        "Starting WorkerConnect"
    );

    let mut session = open_session(&config)?;
    let output = commands::execute(cli.command, &mut session)?;
    println!("{output}");

    Ok(())
}
