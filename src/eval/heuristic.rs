//! Heuristic evaluation function for PNT positions
//!
//! This module provides the leaf evaluation for the alpha-beta search.
//! Scores are always from player one's (the maximizer's) perspective:
//! - `1.0` / `-1.0` for a decided game
//! - a parity estimate otherwise, negated when player two is to move

use tracing::debug;

use crate::error::{Error, Result};
use crate::number::{is_prime, largest_prime_factor_in};
use crate::state::{GameState, Player};

use super::weights::EvalWeight;

/// Evaluate the position.
///
/// Returns a value in `[-1, 1]`. Positive values favour player one.
#[must_use]
pub fn evaluate(state: &GameState) -> f64 {
    let legal = state.legal_moves();

    if legal.is_empty() {
        match state.winner() {
            Some(Player::One) => return EvalWeight::WIN,
            Some(Player::Two) => return -EvalWeight::WIN,
            None => {}
        }
    }

    let value = unsigned_value(state, &legal);
    if value == EvalWeight::NEUTRAL {
        return EvalWeight::NEUTRAL;
    }

    match state.player_to_move() {
        Player::One => value,
        Player::Two => -value,
    }
}

/// Parity estimate before the side-to-move adjustment
fn unsigned_value(state: &GameState, legal: &[u32]) -> f64 {
    if !state.is_taken(1) {
        return EvalWeight::NEUTRAL;
    }
    let Some(last) = state.last_taken() else {
        return EvalWeight::NEUTRAL;
    };

    if last == 1 {
        return EvalWeight::parity(legal.len(), EvalWeight::ONE_PARITY);
    }

    if is_prime(last) {
        let multiples = count_multiples(legal, last);
        return EvalWeight::parity(multiples, EvalWeight::PRIME_PARITY);
    }

    match composite_value(last, legal) {
        Ok(value) => value,
        Err(err) => {
            debug!(%err, taken = ?state.taken_tokens(), "falling back to neutral evaluation");
            EvalWeight::NEUTRAL
        }
    }
}

/// Composite last token: parity of the multiples of its largest prime
/// factor still available. Fails when no prime factor is available.
fn composite_value(last: u32, legal: &[u32]) -> Result<f64> {
    let prime = largest_prime_factor_in(last, legal)
        .ok_or(Error::DegenerateEvaluation { token: last })?;
    let multiples = count_multiples(legal, prime);
    Ok(EvalWeight::parity(multiples, EvalWeight::COMPOSITE_PARITY))
}

#[inline]
fn count_multiples(legal: &[u32], of: u32) -> usize {
    legal.iter().filter(|&&t| t % of == 0).count()
}
