//! Heuristic weights for the static evaluation

/// Values returned by the evaluation, from player one's perspective
/// before the side-to-move sign adjustment.
pub struct EvalWeight;

impl EvalWeight {
    /// Decided game
    pub const WIN: f64 = 1.0;
    /// Last token was 1: parity of all remaining legal moves
    pub const ONE_PARITY: f64 = 0.5;
    /// Last token was prime: parity of its multiples still available
    pub const PRIME_PARITY: f64 = 0.7;
    /// Last token was composite: parity of multiples of its largest available prime factor
    pub const COMPOSITE_PARITY: f64 = 0.6;
    /// No information
    pub const NEUTRAL: f64 = 0.0;

    /// `weight` for an odd count, `-weight` for an even one
    #[inline]
    pub fn parity(count: usize, weight: f64) -> f64 {
        if count % 2 == 1 {
            weight
        } else {
            -weight
        }
    }
}
