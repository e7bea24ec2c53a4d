use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use pairvote::cli::command::{Cli, DEFAULT_CONFIG_PATH};
use pairvote::cli::output::{self, OutputConfig};
use pairvote::config::Config;
use tracing::debug;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    // Only the implicit default may be absent; an explicit path must exist.
    let mut config = if cli.config.as_path() == Path::new(DEFAULT_CONFIG_PATH) {
        Config::load_or_default(&cli.config)?
    } else {
        Config::load(&cli.config)?
    };
    if let Some(level) = &cli.log_level {
        config.logging.level.clone_from(level);
    }
    config.init_logging();
    debug!(config = %cli.config.display(), "pairvote starting");

    if !cli.command.prints_document() {
        output::header(env!("CARGO_PKG_VERSION"));
    }
    pairvote::cli::run(&cli.command, &config)?;
    Ok(())
}
