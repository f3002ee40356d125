//! Solver facade over the search algorithms
//!
//! The solver picks the search algorithm, applies the configured depth
//! override, times every solve and logs the outcome.
//!
//! # Example
//!
//! ```
//! use pnt::{GameState, Solver};
//!
//! let solver = Solver::new();
//! let result = solver.solve(&GameState::new(7, 4));
//! println!("Best move: {:?}", result.best_move);
//! println!("Nodes visited: {}", result.stats.nodes_visited);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info_span};

use crate::config::EngineConfig;
use crate::search::{Minimax, SearchResult, SearchStats, Searcher};
use crate::state::GameState;

/// Search algorithm used by the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Depth-limited alpha-beta
    AlphaBeta,
    /// Exhaustive minimax without pruning
    Minimax,
}

/// Result of a solve with timing and search statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<u32>,
    /// Value of the position from player one's perspective
    pub value: f64,
    pub stats: SearchStats,
    /// Algorithm that produced this result
    pub search_mode: SearchMode,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    fn from_search(result: SearchResult, search_mode: SearchMode, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            value: result.value,
            stats: result.stats,
            search_mode,
            time_ms,
        }
    }
}

/// Solver for PNT positions.
#[derive(Debug, Clone)]
pub struct Solver {
    mode: SearchMode,
    depth_override: Option<i32>,
    parallel: bool,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Alpha-beta solver that honours each state's own depth ceiling.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: SearchMode::AlphaBeta,
            depth_override: None,
            parallel: false,
        }
    }

    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            mode: if config.pruning {
                SearchMode::AlphaBeta
            } else {
                SearchMode::Minimax
            },
            depth_override: config.depth_override,
            parallel: config.parallel,
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Search every state with this depth ceiling instead of its own.
    #[must_use]
    pub fn with_depth_override(mut self, depth: i32) -> Self {
        self.depth_override = Some(depth);
        self
    }

    #[must_use]
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Solve a single position.
    #[must_use]
    pub fn solve(&self, state: &GameState) -> MoveResult {
        let root = match self.depth_override {
            Some(depth) => state.clone().with_max_depth(depth),
            None => state.clone(),
        };

        let span = info_span!(
            "solve",
            total = root.total_tokens(),
            taken = ?root.taken_tokens(),
            max_depth = root.max_depth()
        );
        let _guard = span.enter();

        let start = Instant::now();
        let result = match self.mode {
            SearchMode::AlphaBeta => Searcher::new().search(&root),
            SearchMode::Minimax => Minimax::new().search(&root),
        };
        let time_ms = start.elapsed().as_millis() as u64;

        debug!(
            best_move = ?result.best_move,
            value = result.value,
            visited = result.stats.nodes_visited,
            evaluated = result.stats.nodes_evaluated,
            pruned = result.stats.pruned,
            time_ms,
            "solved"
        );

        MoveResult::from_search(result, self.mode, time_ms)
    }

    /// Best move for the side to move, if any.
    #[must_use]
    pub fn best_move(&self, state: &GameState) -> Option<u32> {
        self.solve(state).best_move
    }

    /// Solve a batch, on the rayon pool when parallel solving is enabled.
    ///
    /// Results keep input order. Each search owns its statistics, so they
    /// match sequential solving.
    #[must_use]
    pub fn solve_all(&self, states: &[GameState]) -> Vec<MoveResult> {
        if !self.parallel || states.len() < 2 {
            return states.iter().map(|s| self.solve(s)).collect();
        }

        states.par_iter().map(|s| self.solve(s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_three_tokens() {
        let result = Solver::new().solve(&GameState::new(3, 0));
        assert_eq!(result.best_move, Some(1));
        assert_eq!(result.value, -1.0);
        assert_eq!(result.search_mode, SearchMode::AlphaBeta);
    }

    #[test]
    fn test_depth_override() {
        // Depth 1 from 7 tokens visits only the root and the two first moves
        let solver = Solver::new().with_depth_override(1);
        let result = solver.solve(&GameState::new(7, 0));
        assert_eq!(result.stats.nodes_visited, 3);
        assert_eq!(result.best_move, Some(1));
    }

    #[test]
    fn test_modes_agree() {
        let state = GameState::new(8, 0);
        let ab = Solver::new().solve(&state);
        let mm = Solver::new().with_mode(SearchMode::Minimax).solve(&state);
        assert_eq!(ab.best_move, mm.best_move);
        assert_eq!(ab.value, mm.value);
        assert_eq!(mm.stats.pruned, 0);
    }

    #[test]
    fn test_from_config() {
        let config = EngineConfig::default().with_pruning(false).with_depth_override(2);
        let solver = Solver::from_config(&config);
        assert_eq!(solver.mode(), SearchMode::Minimax);
        assert_eq!(solver.solve(&GameState::new(7, 0)).stats.max_depth_reached, 2);
    }

    #[test]
    fn test_solve_all_parallel_matches_sequential() {
        let states: Vec<_> = (3..=10).map(|n| GameState::new(n, 4)).collect();
        let sequential = Solver::new().solve_all(&states);
        let parallel = Solver::from_config(&EngineConfig::default().with_parallel(true))
            .solve_all(&states);

        assert_eq!(parallel.len(), states.len());
        for (s, p) in sequential.iter().zip(&parallel) {
            assert_eq!(s.best_move, p.best_move);
            assert_eq!(s.value, p.value);
            assert_eq!(s.stats, p.stats);
        }
    }

    #[test]
    fn test_solve_all_large_batch_stays_on_pool() {
        let states: Vec<_> = (0..500).map(|i| GameState::new(3 + i % 8, 2)).collect();
        let solver = Solver::from_config(&EngineConfig::default().with_parallel(true));
        let pool = rayon::ThreadPoolBuilder::new().num_threads(2).build().unwrap();
        let results = pool.install(|| solver.solve_all(&states));

        assert_eq!(results.len(), states.len());
        for (state, result) in states.iter().zip(&results) {
            assert_eq!(result.best_move, Solver::new().best_move(state));
        }
    }

    #[test]
    fn test_best_move_on_finished_game() {
        let state = GameState::with_taken(3, vec![1, 2], 0).unwrap();
        assert_eq!(Solver::new().best_move(&state), None);
    }
}
