//! Depth-limited alpha-beta search
//!
//! This module implements the core search algorithm for the PNT engine.
//! It uses mutually recursive max/min routines with alpha-beta pruning and a
//! depth cutoff layered on top.
//!
//! # Features
//!
//! - Depth ceiling relative to the search root (`max_depth <= 0` is unbounded)
//! - Heuristic evaluation at terminal and cutoff nodes
//! - First-found tie-breaking in ascending token order
//! - Per-call statistics, so independent roots can be searched concurrently
//!
//! # Example
//!
//! ```
//! use pnt::search::Searcher;
//! use pnt::GameState;
//!
//! let searcher = Searcher::new();
//! let root = GameState::new(3, 0);
//!
//! let result = searcher.search(&root);
//! assert_eq!(result.best_move, Some(1));
//! assert_eq!(result.value, -1.0);
//! ```

use tracing::trace;

use crate::state::{GameState, Player};

use super::{expand_or_evaluate, Expansion, SearchStats};

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<u32>,
    /// Value of the root from player one's perspective
    pub value: f64,
    /// Statistics for this search only
    pub stats: SearchStats,
}

/// Alpha-beta search engine.
///
/// The searcher holds no per-search state; every call to [`Searcher::search`]
/// threads its own accumulator through the recursion.
#[derive(Debug, Clone, Copy, Default)]
pub struct Searcher;

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Search for the best move from `root`.
    ///
    /// The root is re-based to depth 0, so the depth ceiling always counts
    /// plies from here. Dispatches to the maximizer when player one is to
    /// move, otherwise to the minimizer.
    #[must_use]
    pub fn search(&self, root: &GameState) -> SearchResult {
        let root = root.search_root();
        let mut worker = AlphaBetaWorker::default();

        let (value, best_move) = match root.player_to_move() {
            Player::One => worker.max_value(&root, f64::NEG_INFINITY, f64::INFINITY),
            Player::Two => worker.min_value(&root, f64::NEG_INFINITY, f64::INFINITY),
        };

        trace!(
            taken = ?root.taken_tokens(),
            ?best_move,
            value,
            visited = worker.stats.nodes_visited,
            "alpha-beta search finished"
        );

        SearchResult {
            best_move,
            value,
            stats: worker.stats,
        }
    }
}

/// Per-search recursion state.
#[derive(Default)]
struct AlphaBetaWorker {
    stats: SearchStats,
}

impl AlphaBetaWorker {
    /// Player one to move: raise `alpha`, cut when the value reaches `beta`.
    fn max_value(&mut self, state: &GameState, mut alpha: f64, beta: f64) -> (f64, Option<u32>) {
        let moves = match expand_or_evaluate(state, &mut self.stats) {
            Expansion::Leaf(value) => return (value, None),
            Expansion::Children(moves) => moves,
        };

        let mut value = f64::NEG_INFINITY;
        let mut best_move = None;

        for (i, &token) in moves.iter().enumerate() {
            let (child_value, _) = self.min_value(&state.transition(token), alpha, beta);

            if child_value > value {
                value = child_value;
                best_move = Some(token);
                alpha = alpha.max(value);
            }

            if value >= beta {
                self.stats.record_prune(moves.len() - i - 1);
                return (value, best_move);
            }
        }

        (value, best_move)
    }

    /// Player two to move: lower `beta`, cut when the value reaches `alpha`.
    fn min_value(&mut self, state: &GameState, alpha: f64, mut beta: f64) -> (f64, Option<u32>) {
        let moves = match expand_or_evaluate(state, &mut self.stats) {
            Expansion::Leaf(value) => return (value, None),
            Expansion::Children(moves) => moves,
        };

        let mut value = f64::INFINITY;
        let mut best_move = None;

        for (i, &token) in moves.iter().enumerate() {
            let (child_value, _) = self.max_value(&state.transition(token), alpha, beta);

            if child_value < value {
                value = child_value;
                best_move = Some(token);
                beta = beta.min(value);
            }

            if value <= alpha {
                self.stats.record_prune(moves.len() - i - 1);
                return (value, best_move);
            }
        }

        (value, best_move)
    }
}
