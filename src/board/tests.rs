use super::{Bitboard, Board, Pos, Stone, BOARD_SIZE, TOTAL_CELLS};

#[test]
fn pos_index_round_trip() {
    for idx in [0, 1, BOARD_SIZE - 1, BOARD_SIZE, TOTAL_CELLS - 1] {
        assert_eq!(Pos::from_index(idx).to_index(), idx);
    }
    assert_eq!(Pos::new(0, 0).to_index(), 0);
    assert_eq!(Pos::new(18, 18).to_index(), TOTAL_CELLS - 1);
    assert_eq!(Pos::new(3, 1).to_index(), BOARD_SIZE + 3);
}

#[test]
fn pos_is_valid_bounds() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(18, 18));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(19, 0));
    assert!(!Pos::is_valid(0, 19));
}

#[test]
fn stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn bitboard_set_get_count() {
    let mut bb = Bitboard::new();
    let pos = Pos::new(9, 9);
    assert!(!bb.get(pos));
    assert!(bb.is_empty());

    bb.set(pos);
    assert!(bb.get(pos));
    assert!(!bb.is_empty());
    assert_eq!(bb.count(), 1);
}

#[test]
fn bitboard_iter_ones() {
    let mut bb = Bitboard::new();
    let positions = [Pos::new(0, 0), Pos::new(5, 3), Pos::new(18, 18)];
    for &pos in &positions {
        bb.set(pos);
    }

    let collected: Vec<Pos> = bb.iter_ones().collect();
    assert_eq!(collected, positions);
}

#[test]
fn new_board_is_empty_black_to_move() {
    let board = Board::new();
    assert!(board.is_board_empty());
    assert_eq!(board.stone_count(), 0);
    assert_eq!(board.to_move(), Stone::Black);
    assert_eq!(board.get(Pos::new(9, 9)), Stone::Empty);
}

#[test]
fn try_place_alternates_colors() {
    let mut board = Board::new();

    assert!(board.try_place(Pos::new(9, 9)));
    assert_eq!(board.get(Pos::new(9, 9)), Stone::Black);
    assert_eq!(board.to_move(), Stone::White);

    assert!(board.try_place(Pos::new(10, 9)));
    assert_eq!(board.get(Pos::new(10, 9)), Stone::White);
    assert_eq!(board.to_move(), Stone::Black);
}

#[test]
fn try_place_occupied_is_noop() {
    let mut board = Board::new();
    assert!(board.try_place(Pos::new(4, 4)));

    let before = board;
    assert!(!board.try_place(Pos::new(4, 4)));
    assert_eq!(board, before);
    assert_eq!(board.to_move(), Stone::White);
}

#[test]
fn black_never_trails_white() {
    let mut board = Board::new();
    for i in 0..8u8 {
        let diff = board.black.count() as i32 - board.white.count() as i32;
        assert!(diff == 0 || diff == 1);
        assert!(board.try_place(Pos::new(i, 0)));
    }
    let diff = board.black.count() as i32 - board.white.count() as i32;
    assert!(diff == 0 || diff == 1);
}

#[test]
fn set_to_move_overrides_turn() {
    let mut board = Board::new();
    assert!(board.try_place(Pos::new(9, 9)));
    assert_eq!(board.to_move(), Stone::White);

    board.set_to_move(Stone::Black);
    assert_eq!(board.to_move(), Stone::Black);
}

#[test]
fn place_stone_explicit_color_keeps_turn() {
    let mut board = Board::new();
    board.place_stone(Pos::new(2, 2), Stone::White);
    assert_eq!(board.get(Pos::new(2, 2)), Stone::White);
    assert_eq!(board.to_move(), Stone::Black);
}
