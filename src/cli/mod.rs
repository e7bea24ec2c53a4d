//! CLI module graph.

pub mod check;
pub mod command;
pub mod demo;
pub mod normalize;
pub mod output;
pub mod pair;
pub mod rows;
pub mod state;
pub mod top;

use crate::config::Config;
use crate::error::Result;
use command::Commands;

/// Dispatch a parsed subcommand.
pub fn run(command: &Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Demo => demo::execute(config),
        Commands::Top(args) => top::execute(args, config),
        Commands::Pair(args) => pair::execute(args, config),
        Commands::Normalize(args) => normalize::execute(args, config),
        Commands::Check(args) => check::execute(args, config),
    }
}
