//! Pick Numbered Tokens (PNT) solver
//!
//! PNT is a two-player game over the tokens `1..=n`:
//! - The first move takes an odd token smaller than `n / 2`
//! - Every later move takes an untaken factor or multiple of the last token taken
//! - A player with no legal move loses
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`number`]: Factor/multiple and primality helpers
//! - [`state`]: Game state, move generation and winner detection
//! - [`eval`]: Static evaluation heuristic
//! - [`search`]: Depth-limited alpha-beta and reference minimax
//! - [`engine`]: Solver facade with timing and batch solving
//! - [`io`]: Test-case parsing, reports and random generation
//! - [`config`]: JSON configuration shared by the binaries
//!
//! # Quick Start
//!
//! ```
//! use pnt::{GameState, Solver};
//!
//! let mut state = GameState::new(7, 0);
//! let solver = Solver::new();
//!
//! while let Some(token) = solver.best_move(&state) {
//!     state.apply_move(token).unwrap();
//! }
//! println!("Player {} wins", state.winner().unwrap());
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod io;
pub mod number;
pub mod search;
pub mod state;
pub mod ui;

// Re-export commonly used types for convenience
pub use engine::{MoveResult, SearchMode, Solver};
pub use error::{Error, Result};
pub use state::{GameState, Player};
