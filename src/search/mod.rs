//! Search module for PNT
//!
//! Contains:
//! - Per-call search statistics
//! - Depth-limited alpha-beta minimax
//! - Exhaustive minimax used as a pruning-free reference

pub mod alphabeta;
pub mod minimax;
pub mod stats;

pub use alphabeta::{SearchResult, Searcher};
pub use minimax::Minimax;
pub use stats::SearchStats;

use crate::state::GameState;

/// What a search node turns into once it has been visited.
pub(crate) enum Expansion {
    /// Terminal or at the depth cutoff: scored by the heuristic
    Leaf(f64),
    /// Children to explore, in generation order
    Children(Vec<u32>),
}

/// Record the visit and decide whether `state` is expanded or scored.
///
/// A node is expanded iff it has legal moves and lies above the depth
/// ceiling. Every other node is a leaf and counts as evaluated.
pub(crate) fn expand_or_evaluate(state: &GameState, stats: &mut SearchStats) -> Expansion {
    stats.record_visit(state.current_depth());

    let moves = state.legal_moves();
    if moves.is_empty() || state.at_depth_cutoff() {
        stats.record_evaluation();
        Expansion::Leaf(state.static_evaluation())
    } else {
        Expansion::Children(moves)
    }
}
