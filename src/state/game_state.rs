//! Game state with derived turn, move and winner queries

use std::fmt;

use super::Player;
use crate::error::{Error, Result};
use crate::number::is_factor_or_multiple;

/// Snapshot of a PNT position.
///
/// Only the token pool size, the ordered taken tokens and the depth
/// bookkeeping are stored. Everything else (number taken, player to move,
/// winner) is derived from `taken` on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    total_tokens: u32,
    /// Tokens in the order they were taken, no duplicates
    taken: Vec<u32>,
    /// Search depth ceiling relative to the search root; <= 0 means unbounded
    max_depth: i32,
    /// Plies from the node where the current search began
    current_depth: u32,
}

impl GameState {
    /// Create a fresh game with no tokens taken.
    pub fn new(total_tokens: u32, max_depth: i32) -> Self {
        Self {
            total_tokens,
            taken: Vec::new(),
            max_depth,
            current_depth: 0,
        }
    }

    /// Create a state resuming a game where `taken` have already been played.
    ///
    /// Validates that every token is in `1..=total_tokens` and that no token
    /// appears twice. The move rules are not replayed.
    pub fn with_taken(total_tokens: u32, taken: Vec<u32>, max_depth: i32) -> Result<Self> {
        for (i, &token) in taken.iter().enumerate() {
            if token == 0 || token > total_tokens {
                return Err(Error::TokenOutOfRange {
                    token,
                    total: total_tokens,
                });
            }
            if taken[..i].contains(&token) {
                return Err(Error::DuplicateToken { token });
            }
        }

        Ok(Self {
            total_tokens,
            taken,
            max_depth,
            current_depth: 0,
        })
    }

    #[inline]
    pub fn total_tokens(&self) -> u32 {
        self.total_tokens
    }

    #[inline]
    pub fn taken_tokens(&self) -> &[u32] {
        &self.taken
    }

    #[inline]
    pub fn num_taken(&self) -> usize {
        self.taken.len()
    }

    #[inline]
    pub fn max_depth(&self) -> i32 {
        self.max_depth
    }

    #[inline]
    pub fn current_depth(&self) -> u32 {
        self.current_depth
    }

    /// Depth ceiling, or `None` when the search is unbounded
    #[inline]
    pub fn depth_limit(&self) -> Option<u32> {
        u32::try_from(self.max_depth).ok().filter(|&d| d > 0)
    }

    /// True when this node sits at (or past) the depth ceiling
    #[inline]
    pub fn at_depth_cutoff(&self) -> bool {
        self.depth_limit()
            .is_some_and(|limit| self.current_depth >= limit)
    }

    #[inline]
    pub fn last_taken(&self) -> Option<u32> {
        self.taken.last().copied()
    }

    #[inline]
    pub fn is_taken(&self, token: u32) -> bool {
        self.taken.contains(&token)
    }

    /// Player whose turn it is, from the parity of the number taken
    #[inline]
    pub fn player_to_move(&self) -> Player {
        Player::from_parity(self.taken.len())
    }

    /// Legal tokens in ascending order.
    ///
    /// First move: odd tokens below `ceil(total / 2)`. Afterwards: untaken
    /// tokens that are a factor or multiple of the last token taken.
    pub fn legal_moves(&self) -> Vec<u32> {
        match self.last_taken() {
            None => (1..self.total_tokens.div_ceil(2))
                .filter(|&t| t % 2 == 1 && !self.is_taken(t))
                .collect(),
            Some(last) => (1..=self.total_tokens)
                .filter(|&t| !self.is_taken(t) && is_factor_or_multiple(t, last))
                .collect(),
        }
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.legal_moves().is_empty()
    }

    /// Winner under normal play: whoever made the last move.
    ///
    /// `None` while moves remain or before anything has been taken.
    pub fn winner(&self) -> Option<Player> {
        if self.taken.is_empty() || !self.is_terminal() {
            return None;
        }
        Some(self.player_to_move().opponent())
    }

    /// Take a token as part of real game progression.
    ///
    /// The state is left unchanged when the token is not legal.
    pub fn apply_move(&mut self, token: u32) -> Result<()> {
        let legal = self.legal_moves();
        if !legal.contains(&token) {
            return Err(Error::InvalidMove { token, legal });
        }
        self.taken.push(token);
        Ok(())
    }

    /// Successor state used by search.
    ///
    /// Callers pass tokens drawn from `legal_moves()`; legality is not
    /// re-checked. The taken list is copied, never shared.
    #[must_use]
    pub fn transition(&self, token: u32) -> GameState {
        debug_assert!(!self.is_taken(token), "token {token} already taken");

        let mut taken = Vec::with_capacity(self.taken.len() + 1);
        taken.extend_from_slice(&self.taken);
        taken.push(token);

        GameState {
            total_tokens: self.total_tokens,
            taken,
            max_depth: self.max_depth,
            current_depth: self.current_depth + 1,
        }
    }

    /// Copy of this state positioned as the root of a new search
    #[must_use]
    pub fn search_root(&self) -> GameState {
        GameState {
            current_depth: 0,
            ..self.clone()
        }
    }

    /// Copy of this state with a different depth ceiling
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: i32) -> GameState {
        self.max_depth = max_depth;
        self
    }

    /// Heuristic value in `[-1, 1]` from player one's perspective
    #[inline]
    pub fn static_evaluation(&self) -> f64 {
        crate::eval::evaluate(self)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PNT State")?;
        writeln!(f, "Total tokens: {}", self.total_tokens)?;
        writeln!(f, "Num taken tokens: {}", self.taken.len())?;
        writeln!(f, "Tokens taken: {:?}", self.taken)?;
        match self.depth_limit() {
            Some(limit) => write!(f, "Depth: {limit}"),
            None => write!(f, "Depth: unbounded"),
        }
    }
}
