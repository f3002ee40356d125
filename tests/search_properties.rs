//! Search correctness across whole game trees

use pnt::search::{Minimax, Searcher};
use pnt::{Error, GameState, Player, SearchMode, Solver};

/// (all nodes, terminal nodes) of the full game tree below `state`
fn count_tree(state: &GameState) -> (u64, u64) {
    let moves = state.legal_moves();
    if moves.is_empty() {
        return (1, 1);
    }
    moves.iter().fold((1, 0), |(nodes, leaves), &token| {
        let (n, l) = count_tree(&state.transition(token));
        (nodes + n, leaves + l)
    })
}

/// Roots used by the comparison tests: every fresh game plus every
/// one-token prefix, for pools up to ten tokens.
fn roots(max_depth: i32) -> Vec<GameState> {
    let mut roots = Vec::new();
    for total in 1..=10 {
        let fresh = GameState::new(total, max_depth);
        for token in fresh.legal_moves() {
            roots.push(fresh.transition(token).search_root());
        }
        roots.push(fresh);
    }
    roots
}

#[test]
fn test_alphabeta_matches_minimax_unbounded() {
    for root in roots(0) {
        let ab = Searcher::new().search(&root);
        let mm = Minimax::new().search(&root);
        assert_eq!(ab.best_move, mm.best_move, "move differs for {root}");
        assert_eq!(ab.value, mm.value, "value differs for {root}");
        assert!(ab.stats.nodes_visited <= mm.stats.nodes_visited);
    }
}

#[test]
fn test_alphabeta_matches_minimax_bounded() {
    for depth in 1..=4 {
        for root in roots(depth) {
            let ab = Searcher::new().search(&root);
            let mm = Minimax::new().search(&root);
            assert_eq!(ab.best_move, mm.best_move, "move differs for {root}");
            assert_eq!(ab.value, mm.value, "value differs for {root}");
            assert!(ab.stats.max_depth_reached <= depth as u32);
        }
    }
}

#[test]
fn test_unbounded_search_only_evaluates_terminal_nodes() {
    for total in 1..=10 {
        let root = GameState::new(total, 0);
        let (nodes, terminals) = count_tree(&root);
        let result = Minimax::new().search(&root);
        assert_eq!(result.stats.nodes_visited, nodes, "total {total}");
        assert_eq!(result.stats.nodes_evaluated, terminals, "total {total}");
        if total > 2 {
            assert!(result.value == 1.0 || result.value == -1.0);
        } else {
            // No opening move exists, so nobody has won
            assert_eq!(result.value, 0.0);
        }
    }
}

#[test]
fn test_unbounded_alphabeta_evaluates_terminal_nodes_only() {
    for total in 1..=10 {
        let root = GameState::new(total, 0);
        let (nodes, terminals) = count_tree(&root);
        let result = Searcher::new().search(&root);
        // Pruning may skip leaves, never add non-terminal ones
        assert!(result.stats.nodes_evaluated <= terminals, "total {total}");
        assert!(result.stats.nodes_visited <= nodes, "total {total}");
        assert!(result.stats.nodes_evaluated >= 1, "total {total}");
        if total > 2 {
            assert!(result.value == 1.0 || result.value == -1.0, "total {total}");
        } else {
            assert_eq!(result.value, 0.0);
        }

        // Scored leaves below every first move are terminal, so each value is a win or a loss
        for token in root.legal_moves() {
            let child = root.transition(token).search_root();
            let value = Searcher::new().search(&child).value;
            assert!(value == 1.0 || value == -1.0, "total {total}, first move {token}");
        }
    }
}

#[test]
fn test_bounded_search_evaluates_at_cutoff() {
    // Neither [1] nor [3] is terminal with seven tokens, both are scored
    let result = Searcher::new().search(&GameState::new(7, 1));
    assert_eq!(result.stats.nodes_evaluated, 2);
    assert_eq!(result.stats.max_depth_reached, 1);
    assert!(result.value.abs() < 1.0);
}

#[test]
fn test_three_token_scenario() {
    let mut state = GameState::new(3, 0);
    assert_eq!(state.legal_moves(), vec![1]);

    let result = Solver::new().solve(&state);
    assert_eq!(result.best_move, Some(1));
    assert_eq!(result.value, -1.0);

    state.apply_move(1).unwrap();
    assert_eq!(state.legal_moves(), vec![2, 3]);
    for token in [2, 3] {
        let next = state.transition(token);
        assert!(next.is_terminal());
        assert_eq!(next.winner(), Some(Player::Two));
        assert_eq!(next.static_evaluation(), -1.0);
    }

    state.apply_move(2).unwrap();
    assert_eq!(state.winner(), Some(Player::Two));
    assert_eq!(state.winner().map(Player::number), Some(2));
}

#[test]
fn test_after_one_everything_is_a_multiple() {
    let mut state = GameState::new(5, 0);
    state.apply_move(1).unwrap();
    assert_eq!(state.legal_moves(), vec![2, 3, 4, 5]);
}

#[test]
fn test_invalid_move_scenario() {
    let mut state = GameState::new(7, 0);
    assert_eq!(state.legal_moves(), vec![1, 3]);

    let err = state.apply_move(2).unwrap_err();
    assert!(matches!(err, Error::InvalidMove { token: 2, ref legal } if legal == &[1, 3]));
    assert!(state.taken_tokens().is_empty());
}

#[test]
fn test_engine_self_play_ends_with_last_mover_winning() {
    for total in 2..=12 {
        let mut state = GameState::new(total, 3);
        let solver = Solver::new().with_mode(SearchMode::AlphaBeta);
        while let Some(token) = solver.best_move(&state) {
            state.apply_move(token).unwrap();
        }
        assert!(state.is_terminal());
        if state.num_taken() > 0 {
            let expected = Player::from_number((2 - state.num_taken() % 2) as u8);
            assert_eq!(state.winner(), expected, "total {total}");
        }
    }
}
