//! Solve command - Solve a file of test cases and report the results

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::config::EngineConfig;
use crate::engine::Solver;
use crate::io::{load_test_cases, render_reports, write_reports, Report, ReportFormat};
use crate::state::GameState;

#[derive(Parser, Debug)]
#[command(about = "Solve every test case in a file")]
pub struct SolveArgs {
    /// File with one test case per line
    #[arg(long, short = 'i')]
    pub input: PathBuf,

    /// Also write the reports to this file
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Report format (defaults to the configured format)
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<ReportFormat>,

    /// Search with plain minimax instead of alpha-beta
    #[arg(long)]
    pub no_pruning: bool,

    /// Override the depth ceiling of every test case
    #[arg(long, short = 'd')]
    pub depth: Option<i32>,

    /// Solve test cases on multiple threads
    #[arg(long)]
    pub parallel: bool,
}

/// Solve a batch of states and build one report per state.
pub fn solve_cases(states: &[GameState], solver: &Solver) -> Vec<Report> {
    states
        .iter()
        .zip(solver.solve_all(states))
        .map(|(state, result)| Report::new(state, &result))
        .collect()
}

pub fn execute(args: SolveArgs, config: &EngineConfig) -> Result<()> {
    let mut config = config.clone();
    if args.no_pruning {
        config = config.with_pruning(false);
    }
    if let Some(depth) = args.depth {
        config = config.with_depth_override(depth);
    }
    if args.parallel {
        config = config.with_parallel(true);
    }
    let format = args.format.unwrap_or(config.report.format);
    let precision = config.report.precision;

    let states = load_test_cases(&args.input)
        .with_context(|| format!("failed to load test cases from {}", args.input.display()))?;
    info!(count = states.len(), input = %args.input.display(), "solving test cases");

    let solver = Solver::from_config(&config);
    let reports = solve_cases(&states, &solver);

    if !reports.is_empty() {
        println!("{}", render_reports(&reports, format, precision)?);
    }

    if let Some(output) = &args.output {
        write_reports(output, &reports, format, precision)
            .with_context(|| format!("failed to write reports to {}", output.display()))?;
        info!(output = %output.display(), "reports written");
    }

    Ok(())
}
