//! Exhaustive minimax without pruning
//!
//! Uses the same leaf rule and tie-breaking as [`super::Searcher`], so the
//! two must agree on the root move and value. Useful as a reference and
//! for measuring how much work pruning saves.

use crate::state::{GameState, Player};

use super::{expand_or_evaluate, Expansion, SearchResult, SearchStats};

/// Plain minimax searcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax;

impl Minimax {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Search every node within the depth budget from `root`.
    #[must_use]
    pub fn search(&self, root: &GameState) -> SearchResult {
        let root = root.search_root();
        let mut stats = SearchStats::default();
        let (value, best_move) = Self::value(&root, &mut stats);

        SearchResult {
            best_move,
            value,
            stats,
        }
    }

    fn value(state: &GameState, stats: &mut SearchStats) -> (f64, Option<u32>) {
        let moves = match expand_or_evaluate(state, stats) {
            Expansion::Leaf(value) => return (value, None),
            Expansion::Children(moves) => moves,
        };

        let maximizing = state.player_to_move() == Player::One;
        let mut best_value = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut best_move = None;

        for token in moves {
            let (child_value, _) = Self::value(&state.transition(token), stats);
            let improves = if maximizing {
                child_value > best_value
            } else {
                child_value < best_value
            };
            if improves {
                best_value = child_value;
                best_move = Some(token);
            }
        }

        (best_value, best_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimax_three_tokens() {
        let result = Minimax::new().search(&GameState::new(3, 0));
        assert_eq!(result.best_move, Some(1));
        assert_eq!(result.value, -1.0);
        assert_eq!(result.stats.nodes_visited, 4);
        assert_eq!(result.stats.pruned, 0);
    }

    #[test]
    fn test_minimax_counts_every_leaf() {
        // Depth 1 from 7 tokens: root plus the two first moves
        let result = Minimax::new().search(&GameState::new(7, 1));
        assert_eq!(result.stats.nodes_visited, 3);
        assert_eq!(result.stats.nodes_evaluated, 2);
    }

    #[test]
    fn test_minimax_keeps_first_of_equal_moves() {
        // After 1 with 3 tokens, both replies win for player two
        let root = GameState::with_taken(3, vec![1], 0).unwrap();
        let result = Minimax::new().search(&root);
        assert_eq!(result.best_move, Some(2));
        assert_eq!(result.value, -1.0);
    }
}
