//! Game state representation for Pick Numbered Tokens

pub mod game_state;


// Re-exports
pub use game_state::GameState;

/// The two players. Player one moves first and maximizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Numeric form used in reports (1 or 2)
    #[inline]
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Inverse of [`Player::number`]
    pub fn from_number(number: u8) -> Option<Player> {
        match number {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// Player to move after `num_taken` tokens have been taken
    #[inline]
    pub fn from_parity(num_taken: usize) -> Player {
        if num_taken % 2 == 0 {
            Player::One
        } else {
            Player::Two
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}
