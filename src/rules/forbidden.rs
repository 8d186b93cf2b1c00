//! Forbidden move rules for Black
//!
//! Black may not make a move that creates an overline (six or more in a
//! row) or a double-three: a single stone completing two open threes at
//! once. An open three is a run of exactly 3 whose cells immediately past
//! both ends are on the board and empty, so it can grow into an open four
//! from either side.
//!
//! White is never subject to these rules; callers only consult this module
//! on Black's turn.

use thiserror::Error;

use crate::board::{Board, Direction, Pos, Stone};

use super::line::count_line;

/// Why a move is forbidden. The `Display` text is surfaced verbatim to the
/// player by the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ForbiddenMove {
    #[error("overline (six or more in a row) is forbidden")]
    Overline,
    #[error("double three is forbidden")]
    DoubleThree,
}

/// Check whether the run of exactly 3 through `pos` is open on both ends.
///
/// Precondition: `count_line(board, pos, stone, dir) == 3`. The check walks
/// past each end of the run; both cells found there must be on the board
/// and empty. A run touching the board edge, or capped by either color, is
/// closed on that side.
pub fn is_open_three(board: &Board, pos: Pos, stone: Stone, dir: Direction) -> bool {
    debug_assert_eq!(count_line(board, pos, stone, dir), 3);

    let (dr, dc) = dir.delta();

    // Walk to the cell immediately past the forward end of the run
    let mut r = pos.row as i32;
    let mut c = pos.col as i32;
    while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == stone {
        r += dr;
        c += dc;
    }
    if !Pos::is_valid(r, c) || board.get(Pos::new(r as u8, c as u8)) != Stone::Empty {
        return false;
    }

    // Same for the backward end
    r = pos.row as i32;
    c = pos.col as i32;
    while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == stone {
        r -= dr;
        c -= dc;
    }
    Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == Stone::Empty
}

/// Classify a proposed Black move at an empty cell.
///
/// The stone is placed speculatively on a private copy of the board, so the
/// caller's board is untouched on every path. Per direction: a run longer
/// than 5 is an overline and is reported immediately, before any
/// double-three accounting; a run of exactly 3 that is open on both ends
/// counts toward the double-three tally. Two or more open threes after all
/// four directions is a double-three.
///
/// The caller must have verified that `pos` is empty.
pub fn check_forbidden(board: &Board, pos: Pos, stone: Stone) -> Result<(), ForbiddenMove> {
    debug_assert!(board.is_empty(pos));

    let mut probe = board.clone();
    probe.place_stone(pos, stone);

    let mut open_threes = 0;
    for dir in Direction::ALL {
        let count = count_line(&probe, pos, stone, dir);
        if count > 5 {
            return Err(ForbiddenMove::Overline);
        }
        if count == 3 && is_open_three(&probe, pos, stone, dir) {
            open_threes += 1;
        }
    }

    if open_threes >= 2 {
        return Err(ForbiddenMove::DoubleThree);
    }
    Ok(())
}

/// Check if a move is playable: the cell is empty and, for Black, the move
/// is not forbidden. White has no placement restrictions beyond occupancy.
pub fn is_valid_move(board: &Board, pos: Pos, stone: Stone) -> bool {
    if !board.is_empty(pos) {
        return false;
    }
    match stone {
        Stone::Black => check_forbidden(board, pos, stone).is_ok(),
        _ => true,
    }
}
