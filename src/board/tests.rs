use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(9, 9);
    assert_eq!(pos.row, 9);
    assert_eq!(pos.col, 9);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(18, 18));
    assert!(Pos::is_valid(9, 9));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(19, 0));
    assert!(!Pos::is_valid(0, 19));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 19);
    assert_eq!(TOTAL_CELLS, 361);
}

#[test]
fn test_pos_corner_indices() {
    // Top-left
    assert_eq!(Pos::new(0, 0).to_index(), 0);
    // Top-right
    assert_eq!(Pos::new(0, 18).to_index(), 18);
    // Bottom-left
    assert_eq!(Pos::new(18, 0).to_index(), 342);
    // Bottom-right
    assert_eq!(Pos::new(18, 18).to_index(), 360);
}

#[test]
fn test_empty_board() {
    let board = Board::new();
    assert_eq!(board.get(Pos::new(0, 0)), Stone::Empty);
    assert_eq!(board.get(Pos::new(9, 9)), Stone::Empty);
    assert!(board.is_empty(Pos::new(18, 18)));
}

#[test]
fn test_place_and_get() {
    let mut board = Board::new();
    board.place_stone(Pos::new(9, 9), Stone::Black);
    board.place_stone(Pos::new(0, 18), Stone::White);

    assert_eq!(board.get(Pos::new(9, 9)), Stone::Black);
    assert_eq!(board.get(Pos::new(0, 18)), Stone::White);
    assert!(!board.is_empty(Pos::new(9, 9)));
    assert!(board.is_empty(Pos::new(9, 10)));
}

#[test]
fn test_place_stone_is_raw_write() {
    // No legality checking at this layer: overwriting and clearing are
    // allowed, the rule evaluator depends on it for speculative probes.
    let mut board = Board::new();
    board.place_stone(Pos::new(3, 3), Stone::Black);
    board.place_stone(Pos::new(3, 3), Stone::Empty);
    assert!(board.is_empty(Pos::new(3, 3)));
}

#[test]
fn test_direction_deltas() {
    assert_eq!(Direction::Horizontal.delta(), (0, 1));
    assert_eq!(Direction::Vertical.delta(), (1, 0));
    assert_eq!(Direction::Diagonal.delta(), (1, 1));
    assert_eq!(Direction::AntiDiagonal.delta(), (1, -1));
    assert_eq!(Direction::ALL.len(), 4);
}
