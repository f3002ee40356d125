//! GUI module for the PNT game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod session;
mod theme;
mod token_view;

pub use app::PntApp;
pub use session::{GameMode, GameSession, NewGameSettings};
