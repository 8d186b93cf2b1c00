//! GUI module for the Omok game
//!
//! This module provides a native Rust GUI using egui/eframe. It is the
//! external caller of the rule evaluator: it proposes moves, observes the
//! forbidden/win classifications, and never encodes rule knowledge itself.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::OmokApp;
pub use game_state::{GameResult, GameState, MoveError};
