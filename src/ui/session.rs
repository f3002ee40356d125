//! Game session management for the PNT GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::{GameState, MoveResult, Player, Solver};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs engine
    PvE { human: Player },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human: Player::One }
    }
}

/// Largest pool offered in the new-game settings
pub const MAX_TOKENS: u32 = 100;

/// Largest pool allowed when the engine searches to the end of the game
pub const MAX_UNBOUNDED_TOKENS: u32 = 20;

/// Depth ceiling for hints
pub const HINT_MAX_DEPTH: i32 = 4;

/// Settings used when a new game starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewGameSettings {
    pub total_tokens: u32,
    /// Engine depth ceiling; 0 searches to the end of the game
    pub depth: i32,
}

impl Default for NewGameSettings {
    fn default() -> Self {
        Self {
            total_tokens: 7,
            depth: 4,
        }
    }
}

impl NewGameSettings {
    /// Largest pool for this depth
    pub fn max_tokens(&self) -> u32 {
        if self.depth <= 0 {
            MAX_UNBOUNDED_TOKENS
        } else {
            MAX_TOKENS
        }
    }

    /// Settings with the pool clamped to what the depth allows
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            total_tokens: self.total_tokens.clamp(1, self.max_tokens()),
            ..self
        }
    }
}

/// Why the engine is searching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPurpose {
    /// Engine move, applied when the search finishes
    Move,
    /// Hint for the human, shown but not played
    Hint,
}

/// Engine computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
        purpose: SearchPurpose,
    },
}

/// One game in progress, plus the engine bookkeeping around it
pub struct GameSession {
    pub state: GameState,
    pub mode: GameMode,
    pub settings: NewGameSettings,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub suggested_move: Option<u32>,
    pub message: Option<String>,
    pub last_ai_time: Option<Duration>,
    solver: Solver,
}

impl GameSession {
    pub fn new(mode: GameMode, settings: NewGameSettings, solver: Solver) -> Self {
        let settings = settings.clamped();
        Self {
            state: GameState::new(settings.total_tokens, settings.depth),
            mode,
            settings,
            last_ai_result: None,
            ai_state: AiState::Idle,
            suggested_move: None,
            message: None,
            last_ai_time: None,
            solver,
        }
    }

    /// Start over with the current mode and settings.
    ///
    /// A pending engine search is abandoned; its result is dropped with the receiver.
    pub fn reset(&mut self) {
        self.settings = self.settings.clamped();
        self.state = GameState::new(self.settings.total_tokens, self.settings.depth);
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.suggested_move = None;
        self.message = None;
        self.last_ai_time = None;
    }

    pub fn winner(&self) -> Option<Player> {
        self.state.winner()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.state.player_to_move() == human,
            GameMode::PvP => true,
        }
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn()
    }

    /// Engine search for a move in progress (hints do not count)
    pub fn is_ai_thinking(&self) -> bool {
        matches!(
            self.ai_state,
            AiState::Thinking {
                purpose: SearchPurpose::Move,
                ..
            }
        )
    }

    pub fn is_hint_pending(&self) -> bool {
        matches!(
            self.ai_state,
            AiState::Thinking {
                purpose: SearchPurpose::Hint,
                ..
            }
        )
    }

    /// Drop a pending hint; its thread finishes into a closed channel.
    fn cancel_hint(&mut self) {
        if self.is_hint_pending() {
            self.ai_state = AiState::Idle;
        }
    }

    /// Attempt to take a token for the human player
    pub fn try_take(&mut self, token: u32) -> Result<(), String> {
        if self.is_game_over() {
            return Err("Game is over".to_string());
        }
        if self.is_ai_thinking() {
            return Err("Engine is thinking".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.cancel_hint();
        self.execute_move(token).map_err(|err| err.to_string())
    }

    fn execute_move(&mut self, token: u32) -> crate::Result<()> {
        self.state.apply_move(token)?;
        self.suggested_move = None;
        self.message = None;
        debug!(token, taken = ?self.state.taken_tokens(), "token taken");
        Ok(())
    }

    /// Start an engine search on a background thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.is_game_over() {
            return;
        }

        self.cancel_hint();
        self.spawn_search(self.solver.clone(), SearchPurpose::Move);
    }

    fn spawn_search(&mut self, solver: Solver, purpose: SearchPurpose) {
        let state = self.state.clone();
        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = solver.solve(&state);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
            purpose,
        };
    }

    /// Apply the engine's move once its search has finished
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
                purpose,
            } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed(), *purpose)),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    warn!("engine thread exited without a result");
                    self.ai_state = AiState::Idle;
                    self.message = Some("Engine error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed, purpose)) = result {
            self.ai_state = AiState::Idle;
            let best_move = move_result.best_move;
            self.last_ai_result = Some(move_result);

            if purpose == SearchPurpose::Hint {
                self.suggested_move = best_move;
                return;
            }
            self.last_ai_time = Some(elapsed);

            match best_move {
                Some(token) => {
                    if let Err(err) = self.execute_move(token) {
                        self.message = Some(err.to_string());
                    }
                }
                None => self.message = Some("Engine could not find a move".to_string()),
            }
        }
    }

    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking {
                start_time,
                purpose: SearchPurpose::Move,
                ..
            } => Some(start_time.elapsed()),
            _ => None,
        }
    }

    /// Start a quick hint search for the side to move.
    ///
    /// Runs in the background at no more than [`HINT_MAX_DEPTH`] plies;
    /// the hint appears once [`GameSession::check_ai_result`] picks it up.
    pub fn request_suggestion(&mut self) {
        if self.is_game_over() || self.is_ai_thinking() || self.is_hint_pending() {
            return;
        }

        let solver = self.solver.clone().with_depth_override(hint_depth(self.state.max_depth()));
        self.spawn_search(solver, SearchPurpose::Hint);
    }

    /// Undo the last move, or the last human and engine moves against the engine
    pub fn undo(&mut self) {
        if self.state.num_taken() == 0 || self.is_ai_thinking() {
            return;
        }
        self.cancel_hint();

        let undo_count = match self.mode {
            GameMode::PvE { .. } if self.state.num_taken() >= 2 => 2,
            _ => 1,
        };
        let keep = self.state.num_taken() - undo_count;
        let taken = self.state.taken_tokens()[..keep].to_vec();

        match GameState::with_taken(self.state.total_tokens(), taken, self.state.max_depth()) {
            Ok(state) => {
                self.state = state;
                self.suggested_move = None;
                self.message = None;
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }
}

/// Depth used for hints: the game's own ceiling, capped at [`HINT_MAX_DEPTH`]
pub fn hint_depth(game_depth: i32) -> i32 {
    if game_depth <= 0 {
        HINT_MAX_DEPTH
    } else {
        game_depth.min(HINT_MAX_DEPTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(mode: GameMode, total_tokens: u32) -> GameSession {
        GameSession::new(
            mode,
            NewGameSettings {
                total_tokens,
                depth: 0,
            },
            Solver::new(),
        )
    }

    fn wait_for_engine(session: &mut GameSession) {
        let deadline = Instant::now() + Duration::from_secs(10);
        while matches!(session.ai_state, AiState::Thinking { .. }) && Instant::now() < deadline {
            session.check_ai_result();
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_try_take_rejects_illegal_token() {
        let mut session = session(GameMode::PvP, 7);
        let err = session.try_take(2).unwrap_err();
        assert!(err.contains("not legal"));
        assert_eq!(session.state.num_taken(), 0);
        assert!(session.try_take(3).is_ok());
        assert_eq!(session.state.taken_tokens(), &[3]);
    }

    #[test]
    fn test_engine_replies_in_background() {
        let mut session = session(GameMode::PvE { human: Player::One }, 3);
        session.try_take(1).unwrap();
        assert!(session.is_ai_turn());
        assert_eq!(session.try_take(2), Err("Not your turn".to_string()));

        session.start_ai_thinking();
        wait_for_engine(&mut session);

        assert_eq!(session.state.taken_tokens(), &[1, 2]);
        assert!(session.is_game_over());
        assert_eq!(session.winner(), Some(Player::Two));
        assert!(session.last_ai_result.is_some());
    }

    #[test]
    fn test_undo_pve_reverts_both_moves() {
        let mut session = session(GameMode::PvE { human: Player::One }, 7);
        session.try_take(1).unwrap();
        session.start_ai_thinking();
        wait_for_engine(&mut session);
        assert_eq!(session.state.num_taken(), 2);

        session.undo();
        assert_eq!(session.state.num_taken(), 0);
        assert!(session.is_human_turn());
    }

    #[test]
    fn test_undo_pvp_reverts_one_move() {
        let mut session = session(GameMode::PvP, 7);
        session.try_take(1).unwrap();
        session.try_take(4).unwrap();
        session.undo();
        assert_eq!(session.state.taken_tokens(), &[1]);
    }

    #[test]
    fn test_suggestion_and_reset() {
        let mut session = session(GameMode::PvP, 3);
        session.request_suggestion();
        assert!(session.is_hint_pending());
        assert!(!session.is_ai_thinking());
        wait_for_engine(&mut session);
        assert_eq!(session.suggested_move, Some(1));
        assert_eq!(session.state.num_taken(), 0);

        session.try_take(1).unwrap();
        assert_eq!(session.suggested_move, None);

        session.settings.total_tokens = 9;
        session.reset();
        assert_eq!(session.state.total_tokens(), 9);
        assert_eq!(session.state.num_taken(), 0);
    }

    #[test]
    fn test_hint_on_large_unbounded_game_is_depth_capped() {
        // An unbounded search of 60 tokens would not finish
        let mut session = session(GameMode::PvP, 3);
        session.state = GameState::new(60, 0);

        let started = Instant::now();
        session.request_suggestion();
        assert!(started.elapsed() < Duration::from_millis(500));

        wait_for_engine(&mut session);
        let result = session.last_ai_result.as_ref().unwrap();
        assert_eq!(result.stats.max_depth_reached, HINT_MAX_DEPTH as u32);
        assert!(session.suggested_move.is_some());
    }

    #[test]
    fn test_move_during_hint_cancels_it() {
        let mut session = session(GameMode::PvP, 7);
        session.request_suggestion();
        session.try_take(1).unwrap();
        assert!(!session.is_hint_pending());
        assert_eq!(session.suggested_move, None);
    }

    #[test]
    fn test_hint_depth() {
        assert_eq!(hint_depth(0), HINT_MAX_DEPTH);
        assert_eq!(hint_depth(-3), HINT_MAX_DEPTH);
        assert_eq!(hint_depth(2), 2);
        assert_eq!(hint_depth(12), HINT_MAX_DEPTH);
    }

    #[test]
    fn test_unbounded_settings_cap_token_count() {
        let settings = NewGameSettings {
            total_tokens: 100,
            depth: 0,
        };
        assert_eq!(settings.clamped().total_tokens, MAX_UNBOUNDED_TOKENS);

        let session = GameSession::new(GameMode::PvP, settings, Solver::new());
        assert_eq!(session.state.total_tokens(), MAX_UNBOUNDED_TOKENS);

        let bounded = NewGameSettings {
            total_tokens: 100,
            depth: 3,
        };
        assert_eq!(bounded.clamped().total_tokens, 100);
    }
}
