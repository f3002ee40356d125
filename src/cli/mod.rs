//! Command-line interface for the PNT solver
//!
//! The `pnt` binary parses [`Cli`] and hands it to [`run`]. Each subcommand
//! lives in its own module under [`commands`] with an `Args` struct and an
//! `execute` function.

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::EngineConfig;

#[derive(Parser, Debug)]
#[command(name = "pnt")]
#[command(version, about = "Alpha-beta solver for the Pick Numbered Tokens game", long_about = None)]
pub struct Cli {
    /// JSON configuration file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Solve every test case in a file
    Solve(commands::solve::SolveArgs),

    /// Solve test cases typed on stdin, one per line
    Interactive(commands::interactive::InteractiveArgs),

    /// Generate random test cases
    Generate(commands::generate::GenerateArgs),

    /// Play a game against the engine
    Play(commands::play::PlayArgs),
}

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over the configured filter. Logs go to stderr
/// so reports on stdout stay clean.
pub fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Load configuration, set up logging and dispatch the subcommand.
pub fn run(cli: Cli) -> Result<()> {
    let config = EngineConfig::load_or_default(cli.config.as_deref())?;
    init_logging(&config.log_filter);

    match cli.command {
        Commands::Solve(args) => commands::solve::execute(args, &config),
        Commands::Interactive(args) => commands::interactive::execute(args, &config),
        Commands::Generate(args) => commands::generate::execute(args, &config),
        Commands::Play(args) => commands::play::execute(args, &config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_solve() {
        let cli = Cli::try_parse_from([
            "pnt", "solve", "--input", "cases.txt", "--format", "json", "--no-pruning",
        ])
        .unwrap();
        let Commands::Solve(args) = cli.command else {
            panic!("expected solve");
        };
        assert_eq!(args.input, PathBuf::from("cases.txt"));
        assert!(args.no_pruning);
    }

    #[test]
    fn test_parse_play_with_config() {
        let cli = Cli::try_parse_from([
            "pnt", "play", "--tokens", "9", "--human", "2", "--config", "pnt.json",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("pnt.json")));
        let Commands::Play(args) = cli.command else {
            panic!("expected play");
        };
        assert_eq!(args.tokens, 9);
        assert_eq!(args.human, Some(2));
    }

    #[test]
    fn test_reject_bad_human_player() {
        assert!(Cli::try_parse_from(["pnt", "play", "--tokens", "9", "--human", "3"]).is_err());
    }
}
