//! Subcommand implementations

pub mod generate;
pub mod interactive;
pub mod play;
pub mod solve;
