//! Search statistics accumulated by a single search call

use serde::Serialize;

/// Counters for one search invocation.
///
/// Each call to a searcher owns a fresh accumulator, so concurrent
/// searches over different roots never share counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes created within the depth budget, root included
    pub nodes_visited: u64,
    /// Leaves scored by the static evaluation
    pub nodes_evaluated: u64,
    /// Deepest ply visited, relative to the search root
    pub max_depth_reached: u32,
    /// Siblings skipped by alpha-beta cutoffs
    pub pruned: u64,
}

impl SearchStats {
    #[inline]
    pub(crate) fn record_visit(&mut self, depth: u32) {
        self.nodes_visited += 1;
        self.max_depth_reached = self.max_depth_reached.max(depth);
    }

    #[inline]
    pub(crate) fn record_evaluation(&mut self) {
        self.nodes_evaluated += 1;
    }

    #[inline]
    pub(crate) fn record_prune(&mut self, skipped: usize) {
        self.pruned += skipped as u64;
    }

    /// Nodes that were expanded rather than scored
    #[inline]
    pub fn nodes_expanded(&self) -> u64 {
        self.nodes_visited.saturating_sub(self.nodes_evaluated)
    }

    /// Average fan-out: `(visited - 1) / (visited - evaluated)`, or
    /// `visited - 1` when nothing was expanded.
    pub fn effective_branching_factor(&self) -> f64 {
        let edges = self.nodes_visited.saturating_sub(1) as f64;
        match self.nodes_expanded() {
            0 => edges,
            expanded => edges / expanded as f64,
        }
    }
}
