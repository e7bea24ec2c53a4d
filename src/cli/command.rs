//! Command-line interface definitions.
//!
//! Every data command reads a ledger state document (JSON with
//! `preferences` and `ownership` tables), runs one query, and prints the
//! result.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Default configuration file, read only if present.
pub const DEFAULT_CONFIG_PATH: &str = "pairvote.toml";

/// Ownership-weighted incentive ranking for token pairs
#[derive(Parser, Debug)]
#[command(name = "pairvote")]
#[command(version, about)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the two-holder reference scenario
    Demo,

    /// Rank pairs by total incentive
    Top(TopArgs),

    /// Show one pair's contributors and their shares
    Pair(PairArgs),

    /// Normalize every holder's weights and the voting power table
    Normalize(NormalizeArgs),

    /// Load a state file and summarize it
    Check(StateArg),
}

impl Commands {
    /// Returns true if the command's stdout is a bare state document.
    ///
    /// Such output must stay loadable, so nothing else may be printed there.
    #[must_use]
    pub fn prints_document(&self) -> bool {
        matches!(self, Commands::Normalize(args) if args.output.is_none())
    }
}

/// Shared argument for commands that read a state file.
#[derive(Args, Debug, Clone)]
pub struct StateArg {
    /// Path to ledger state JSON
    #[arg(short, long)]
    pub state: PathBuf,

    /// Renormalize voting power before querying
    #[arg(long)]
    pub renormalize: bool,
}

/// Arguments for the `top` subcommand.
#[derive(Args, Debug)]
pub struct TopArgs {
    #[command(flatten)]
    pub input: StateArg,

    /// Number of pairs to list (zero or negative lists none)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub limit: Option<i64>,
}

/// Arguments for the `pair` subcommand.
#[derive(Args, Debug)]
pub struct PairArgs {
    #[command(flatten)]
    pub input: StateArg,

    /// First token of the pair
    pub token_a: String,

    /// Second token of the pair
    pub token_b: String,
}

/// Arguments for the `normalize` subcommand.
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Path to ledger state JSON
    #[arg(short, long)]
    pub state: PathBuf,

    /// Write the normalized state here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_name() {
        assert_eq!(Cli::command().get_name(), "pairvote");
    }

    #[test]
    fn parse_demo_with_defaults() {
        let cli = Cli::try_parse_from(["pairvote", "demo"]).unwrap();
        assert!(matches!(cli.command, Commands::Demo));
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert!(!cli.json);
        assert!(!cli.quiet);
        assert!(cli.log_level.is_none());
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["pairvote", "demo", "--json", "-q"]).unwrap();
        assert!(cli.json);
        assert!(cli.quiet);
    }

    #[test]
    fn parse_top_with_negative_limit() {
        let cli =
            Cli::try_parse_from(["pairvote", "top", "--state", "s.json", "--limit", "-3"]).unwrap();
        match cli.command {
            Commands::Top(args) => {
                assert_eq!(args.limit, Some(-3));
                assert_eq!(args.input.state, PathBuf::from("s.json"));
                assert!(!args.input.renormalize);
            }
            other => panic!("expected top, got {other:?}"),
        }
    }

    #[test]
    fn parse_pair_tokens() {
        let cli = Cli::try_parse_from([
            "pairvote",
            "pair",
            "--state",
            "s.json",
            "--renormalize",
            "Y",
            "X",
        ])
        .unwrap();
        match cli.command {
            Commands::Pair(args) => {
                assert_eq!(args.token_a, "Y");
                assert_eq!(args.token_b, "X");
                assert!(args.input.renormalize);
            }
            other => panic!("expected pair, got {other:?}"),
        }
    }

    #[test]
    fn normalize_to_stdout_prints_bare_document() {
        let to_stdout = Cli::try_parse_from(["pairvote", "normalize", "-s", "s.json"]).unwrap();
        assert!(to_stdout.command.prints_document());

        let to_file =
            Cli::try_parse_from(["pairvote", "normalize", "-s", "s.json", "-o", "out.json"])
                .unwrap();
        assert!(!to_file.command.prints_document());

        let demo = Cli::try_parse_from(["pairvote", "demo"]).unwrap();
        assert!(!demo.command.prints_document());
    }

    #[test]
    fn state_is_required_for_data_commands() {
        assert!(Cli::try_parse_from(["pairvote", "top"]).is_err());
        assert!(Cli::try_parse_from(["pairvote", "check"]).is_err());
        assert!(Cli::try_parse_from(["pairvote", "normalize"]).is_err());
    }
}
