//! Game state management for the Omok GUI
//!
//! `GameState` is the turn loop around the rule evaluator: it owns the
//! board, proposes moves to [`crate::rules`], and only commits them when
//! they pass. A rejected move does not advance the turn.

use crate::rules::{self, ForbiddenMove};
use crate::{Board, Pos, Stone};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Why a proposed move was rejected. Shown verbatim in the message panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("the game is already over")]
    GameOver,
    #[error("that intersection is occupied")]
    Occupied,
    #[error("forbidden move: {0}")]
    Forbidden(#[from] ForbiddenMove),
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub current_turn: Stone,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Pos>,
    pub move_count: usize,
    pub move_timer: MoveTimer,
    pub message: Option<String>,
}

/// Game result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Stone,
    pub winning_line: [Pos; 5],
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_turn: Stone::Black,
            game_over: None,
            last_move: None,
            move_count: 0,
            move_timer: MoveTimer::default(),
            message: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Attempt to place a stone for the side to move.
    ///
    /// Black's moves are screened by the forbidden-move rules before they
    /// are committed; a forbidden move leaves the board and the turn
    /// untouched. White is only checked for occupancy.
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), MoveError> {
        if self.game_over.is_some() {
            return Err(MoveError::GameOver);
        }

        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied);
        }

        if self.current_turn == Stone::Black {
            rules::check_forbidden(&self.board, pos, Stone::Black)?;
        }

        self.execute_move(pos);
        Ok(())
    }

    /// Commit a legal move: place, check for a win, advance the turn.
    fn execute_move(&mut self, pos: Pos) {
        let color = self.current_turn;

        self.board.place_stone(pos, color);
        self.last_move = Some(pos);
        self.move_count += 1;
        self.move_timer.stop();

        if let Some(line) = rules::winning_line(&self.board, pos, color) {
            self.game_over = Some(GameResult {
                winner: color,
                winning_line: line,
            });
            return;
        }

        self.current_turn = color.opponent();
        self.move_timer.start();
        self.message = None;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_moves_first_and_turns_alternate() {
        let mut state = GameState::new();
        assert_eq!(state.current_turn, Stone::Black);

        state.try_place_stone(Pos::new(9, 9)).unwrap();
        assert_eq!(state.current_turn, Stone::White);
        assert_eq!(state.board.get(Pos::new(9, 9)), Stone::Black);
        assert_eq!(state.last_move, Some(Pos::new(9, 9)));
        assert_eq!(state.move_count, 1);

        state.try_place_stone(Pos::new(9, 10)).unwrap();
        assert_eq!(state.current_turn, Stone::Black);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut state = GameState::new();
        state.try_place_stone(Pos::new(9, 9)).unwrap();

        let err = state.try_place_stone(Pos::new(9, 9)).unwrap_err();
        assert_eq!(err, MoveError::Occupied);
        // Turn did not advance
        assert_eq!(state.current_turn, Stone::White);
    }

    #[test]
    fn test_forbidden_move_keeps_turn() {
        let mut state = GameState::new();
        // Double-three cross for Black around (9,9)
        for pos in [
            Pos::new(9, 8),
            Pos::new(9, 10),
            Pos::new(8, 9),
            Pos::new(10, 9),
        ] {
            state.board.place_stone(pos, Stone::Black);
        }

        let err = state.try_place_stone(Pos::new(9, 9)).unwrap_err();
        assert_eq!(err, MoveError::Forbidden(ForbiddenMove::DoubleThree));
        assert_eq!(state.current_turn, Stone::Black);
        assert!(state.board.is_empty(Pos::new(9, 9)));
        assert!(state.game_over.is_none());
    }

    #[test]
    fn test_forbidden_rules_do_not_apply_to_white() {
        let mut state = GameState::new();
        state.current_turn = Stone::White;
        for pos in [
            Pos::new(9, 8),
            Pos::new(9, 10),
            Pos::new(8, 9),
            Pos::new(10, 9),
        ] {
            state.board.place_stone(pos, Stone::White);
        }

        assert!(state.try_place_stone(Pos::new(9, 9)).is_ok());
    }

    #[test]
    fn test_winning_move_ends_game() {
        let mut state = GameState::new();
        for col in 5..9 {
            state.board.place_stone(Pos::new(9, col), Stone::Black);
        }

        state.try_place_stone(Pos::new(9, 9)).unwrap();
        let result = state.game_over.expect("five in a row should win");
        assert_eq!(result.winner, Stone::Black);
        assert_eq!(result.winning_line[0], Pos::new(9, 5));
        assert_eq!(result.winning_line[4], Pos::new(9, 9));

        // No further moves accepted
        let err = state.try_place_stone(Pos::new(0, 0)).unwrap_err();
        assert_eq!(err, MoveError::GameOver);
    }

    #[test]
    fn test_white_overline_does_not_end_game() {
        let mut state = GameState::new();
        state.current_turn = Stone::White;
        for col in 0..5 {
            state.board.place_stone(Pos::new(0, col), Stone::White);
        }

        // The sixth stone extends the run past five: not a win, play goes on
        state.try_place_stone(Pos::new(0, 5)).unwrap();
        assert!(state.game_over.is_none());
        assert_eq!(state.current_turn, Stone::Black);
    }

    #[test]
    fn test_reset() {
        let mut state = GameState::new();
        state.try_place_stone(Pos::new(9, 9)).unwrap();
        state.reset();

        assert_eq!(state.current_turn, Stone::Black);
        assert_eq!(state.move_count, 0);
        assert!(state.board.is_empty(Pos::new(9, 9)));
        assert!(state.last_move.is_none());
    }
}
