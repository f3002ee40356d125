//! Interactive command - Solve test cases typed one line at a time

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use crate::config::EngineConfig;
use crate::engine::Solver;
use crate::io::{parse_state_line, Report};

const QUIT: &str = "quit";

#[derive(Parser, Debug)]
#[command(about = "Solve test cases typed on stdin")]
pub struct InteractiveArgs {
    /// Search with plain minimax instead of alpha-beta
    #[arg(long)]
    pub no_pruning: bool,

    /// Do not print the prompt
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Read states from `input` until `quit` or end of input, printing a report
/// for each one. Returns the number of states solved.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    solver: &Solver,
    precision: usize,
    prompt: bool,
) -> io::Result<usize> {
    let mut solved = 0;
    let mut lines = input.lines();

    loop {
        if prompt {
            write!(output, "> ")?;
            output.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }
        if trimmed.eq_ignore_ascii_case(QUIT) {
            break;
        }

        match parse_state_line(trimmed) {
            Ok(state) => {
                let result = solver.solve(&state);
                writeln!(output, "{}\n", Report::new(&state, &result).render_text(precision))?;
                solved += 1;
            }
            Err(err) => {
                debug!(%err, "rejected interactive input");
                writeln!(output, "Could not read test case: {err}")?;
            }
        }
    }

    Ok(solved)
}

pub fn execute(args: InteractiveArgs, config: &EngineConfig) -> Result<()> {
    let config = config.clone().with_pruning(config.pruning && !args.no_pruning);
    let solver = Solver::from_config(&config);

    if !args.quiet {
        println!("Enter test cases as 'TakeTokens <total> <numTaken> [<token> ...] <maxDepth>', or '{QUIT}' to stop.");
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let solved = run_session(
        stdin.lock(),
        &mut stdout,
        &solver,
        config.report.precision,
        !args.quiet,
    )?;
    debug!(solved, "interactive session finished");

    Ok(())
}
