//! Whole-game state machine
//!
//! Composes the board with win detection. This is the entire interface the
//! presentation layer uses: feed it candidate coordinates, read back the
//! outcome.

use crate::board::{Board, Pos, Stone};
use crate::rules;

/// Whole-game status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// Terminal for the current game; only `reset` leaves it
    Won(Stone),
}

/// Result of a move submission.
///
/// `Rejected` is a distinct variant rather than an unchanged-state return:
/// the caller can tell "nothing happened" from "accepted, game continues"
/// without comparing states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Out of bounds, occupied cell, or game already won; state unchanged
    Rejected,
    /// Stone placed, no line of five, other side to move
    Continue,
    /// Stone placed and it completed a line of five
    Win(Stone),
}

/// A game in progress (or won, awaiting reset)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Game {
    pub board: Board,
    pub status: GameStatus,
    /// Most recently accepted move, for the UI marker
    pub last_move: Option<Pos>,
    /// Five stones of the completed line once the game is won
    pub winning_line: Option<[Pos; 5]>,
}

impl Game {
    /// Empty board, Black to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::InProgress,
            last_move: None,
            winning_line: None,
        }
    }

    /// Back to the initial state, regardless of history
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Submit a candidate move for the side to move.
    ///
    /// Coordinates are taken as `i32` so callers can pass unvalidated
    /// input; anything off the board is `Rejected`. On a win the turn does
    /// not flip and the status becomes terminal.
    pub fn submit_move(&mut self, x: i32, y: i32) -> MoveOutcome {
        if self.status != GameStatus::InProgress {
            return MoveOutcome::Rejected;
        }
        if !Pos::is_valid(x, y) {
            return MoveOutcome::Rejected;
        }

        let pos = Pos::new(x as u8, y as u8);
        let color = self.board.to_move();
        if !self.board.try_place(pos) {
            return MoveOutcome::Rejected;
        }
        self.last_move = Some(pos);

        if rules::is_winning_move(&self.board, pos, color) {
            // The winner keeps the turn; `try_place` already flipped it
            self.board.set_to_move(color);
            self.winning_line = rules::find_winning_line(&self.board, pos, color);
            self.status = GameStatus::Won(color);
            return MoveOutcome::Win(color);
        }

        MoveOutcome::Continue
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn winner(&self) -> Option<Stone> {
        match self.status {
            GameStatus::Won(color) => Some(color),
            GameStatus::InProgress => None,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_initial_state() {
        let game = Game::new();
        assert_eq!(game.status, GameStatus::InProgress);
        assert_eq!(game.board.to_move(), Stone::Black);
        assert!(game.board.is_board_empty());
        assert!(game.last_move.is_none());
        assert!(game.winning_line.is_none());
    }

    #[test]
    fn accepted_move_alternates_turn() {
        let mut game = Game::new();
        assert_eq!(game.submit_move(9, 9), MoveOutcome::Continue);
        assert_eq!(game.board.to_move(), Stone::White);
        assert_eq!(game.submit_move(10, 9), MoveOutcome::Continue);
        assert_eq!(game.board.to_move(), Stone::Black);
        assert_eq!(game.last_move, Some(Pos::new(10, 9)));
    }

    #[test]
    fn occupied_cell_rejected_state_unchanged() {
        let mut game = Game::new();
        game.submit_move(9, 9);

        let before = game;
        assert_eq!(game.submit_move(9, 9), MoveOutcome::Rejected);
        assert_eq!(game, before);
    }

    #[test]
    fn out_of_bounds_rejected_state_unchanged() {
        let mut game = Game::new();
        let before = game;
        for (x, y) in [(-1, 0), (0, -1), (19, 0), (0, 19), (100, 100)] {
            assert_eq!(game.submit_move(x, y), MoveOutcome::Rejected);
        }
        assert_eq!(game, before);
    }

    #[test]
    fn horizontal_five_wins_for_black() {
        let mut game = Game::new();
        // Black builds (0,0)..(3,0); White plays elsewhere
        for i in 0..4 {
            assert_eq!(game.submit_move(i, 0), MoveOutcome::Continue);
            assert_eq!(game.submit_move(i, 5), MoveOutcome::Continue);
        }
        assert_eq!(game.submit_move(4, 0), MoveOutcome::Win(Stone::Black));
        assert_eq!(game.status, GameStatus::Won(Stone::Black));
        assert_eq!(game.winner(), Some(Stone::Black));
        assert!(game.winning_line.is_some());
    }

    #[test]
    fn white_can_win() {
        let mut game = Game::new();
        // Black scatters, White builds a vertical line at x=12
        let black = [(0, 0), (1, 0), (2, 0), (3, 0), (5, 0)];
        for (i, &(bx, by)) in black.iter().enumerate() {
            assert_eq!(game.submit_move(bx, by), MoveOutcome::Continue);
            let outcome = game.submit_move(12, i as i32);
            if i < 4 {
                assert_eq!(outcome, MoveOutcome::Continue);
            } else {
                assert_eq!(outcome, MoveOutcome::Win(Stone::White));
            }
        }
        assert_eq!(game.board.to_move(), Stone::White);
    }

    #[test]
    fn four_in_row_does_not_end_game() {
        let mut game = Game::new();
        for i in 0..4 {
            game.submit_move(i, 0);
            game.submit_move(i, 5);
        }
        assert_eq!(game.status, GameStatus::InProgress);
        assert!(!game.is_over());
    }

    #[test]
    fn edge_truncated_run_is_not_a_win() {
        let mut game = Game::new();
        // Black fills (15,0)..(18,0); the fifth cell would be off the board
        for i in 15..19 {
            assert_eq!(game.submit_move(i, 0), MoveOutcome::Continue);
            assert_eq!(game.submit_move(i, 5), MoveOutcome::Continue);
        }
        assert_eq!(game.status, GameStatus::InProgress);
        assert_eq!(game.submit_move(19, 0), MoveOutcome::Rejected);
    }

    #[test]
    fn won_game_rejects_further_moves() {
        let mut game = Game::new();
        for i in 0..4 {
            game.submit_move(i, 0);
            game.submit_move(i, 5);
        }
        assert_eq!(game.submit_move(4, 0), MoveOutcome::Win(Stone::Black));

        let before = game;
        assert_eq!(game.submit_move(10, 10), MoveOutcome::Rejected);
        assert_eq!(game, before);
    }

    #[test]
    fn winning_move_does_not_flip_turn() {
        let mut game = Game::new();
        for i in 0..4 {
            game.submit_move(i, 0);
            game.submit_move(i, 5);
        }
        game.submit_move(4, 0);
        assert_eq!(game.board.to_move(), Stone::Black);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut game = Game::new();
        for i in 0..4 {
            game.submit_move(i, 0);
            game.submit_move(i, 5);
        }
        game.submit_move(4, 0);
        assert!(game.is_over());

        game.reset();
        assert_eq!(game, Game::new());
    }

    #[test]
    fn stone_count_invariant_under_play() {
        let mut game = Game::new();
        let moves = [(9, 9), (9, 9), (10, 10), (-3, 2), (11, 11), (12, 12)];
        for (x, y) in moves {
            game.submit_move(x, y);
            let diff = game.board.black.count() as i32 - game.board.white.count() as i32;
            assert!(diff == 0 || diff == 1);
        }
    }
}
