//! Evaluation module for PNT positions
//!
//! The static evaluation is a hand-tuned parity heuristic. It considers:
//! - Win/loss detection
//! - Whether token 1 is still in play
//! - The parity of the follow-up moves available after the last token

pub mod heuristic;
pub mod weights;

pub use heuristic::evaluate;
pub use weights::EvalWeight;
