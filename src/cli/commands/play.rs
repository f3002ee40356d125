//! Play command - Text game against the engine, or hot-seat with hints

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::info;

use crate::config::EngineConfig;
use crate::engine::Solver;
use crate::state::{GameState, Player};

#[derive(Parser, Debug)]
#[command(about = "Play a game against the engine")]
pub struct PlayArgs {
    /// Number of tokens in the pool
    #[arg(long, short = 't', default_value_t = 7)]
    pub tokens: u32,

    /// Engine search depth (0 searches to the end of the game)
    #[arg(long, short = 'd', default_value_t = 4)]
    pub depth: i32,

    /// Side played by the human; both sides when omitted
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub human: Option<u8>,
}

/// Play one game on `input`/`output`.
///
/// With `human` set, the engine plays the other side. Without it every move
/// is read from `input` and the engine only suggests. Returns the winner, or
/// `None` when input runs out first.
pub fn play_game<R: BufRead, W: Write>(
    mut state: GameState,
    human: Option<Player>,
    solver: &Solver,
    input: R,
    output: &mut W,
) -> io::Result<Option<Player>> {
    let mut lines = input.lines();

    writeln!(output, "{state}")?;
    print_position(&state, output)?;

    while !state.is_terminal() {
        let to_move = state.player_to_move();
        let suggestion = solver.best_move(&state);

        if human.is_some_and(|h| h != to_move) {
            let Some(token) = suggestion else {
                break;
            };
            writeln!(output, "Engine (Player {to_move}) takes {token}")?;
            if state.apply_move(token).is_err() {
                break;
            }
        } else {
            if let Some(token) = suggestion {
                writeln!(output, "Your best move is: {token}")?;
            }
            write!(output, "Player {to_move}: ")?;
            output.flush()?;

            let Some(line) = lines.next() else {
                writeln!(output)?;
                return Ok(None);
            };
            let line = line?;
            let token = match line.trim().parse::<u32>() {
                Ok(token) => token,
                Err(_) => {
                    writeln!(output, "'{}' is not a token number", line.trim())?;
                    continue;
                }
            };
            if let Err(err) = state.apply_move(token) {
                writeln!(output, "{err}")?;
                continue;
            }
        }

        if !state.is_terminal() {
            print_position(&state, output)?;
        }
    }

    let winner = state.winner();
    if let Some(winner) = winner {
        writeln!(output, "Taken: {:?}", state.taken_tokens())?;
        writeln!(output, "Player {winner} wins")?;
    }
    Ok(winner)
}

fn print_position<W: Write>(state: &GameState, output: &mut W) -> io::Result<()> {
    writeln!(output, "Taken: {:?}", state.taken_tokens())?;
    writeln!(output, "Possible token(s): {:?}", state.legal_moves())?;
    writeln!(output, "Static Board Eval: {}", state.static_evaluation())?;
    writeln!(output)
}

pub fn execute(args: PlayArgs, config: &EngineConfig) -> Result<()> {
    if args.tokens == 0 {
        return Err(anyhow!("--tokens must be at least 1"));
    }
    let human = args.human.and_then(Player::from_number);
    let solver = Solver::from_config(config);
    let state = GameState::new(args.tokens, args.depth);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let winner = play_game(state, human, &solver, stdin.lock(), &mut stdout)?;
    info!(winner = ?winner.map(Player::number), "game finished");

    Ok(())
}
