//! PNT CLI - Solve, generate and play Pick Numbered Tokens positions

use anyhow::Result;
use clap::Parser;

use pnt::cli::{self, Cli};

fn main() -> Result<()> {
    cli::run(Cli::parse())
}
