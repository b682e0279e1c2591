//! Board state with turn tracking

use super::bitboard::Bitboard;
use super::{Pos, Stone};

/// Game board: one bitboard per color plus the side to move
///
/// Black always moves first. Placement through [`Board::try_place`] keeps
/// the invariant that Black has either as many stones as White or exactly
/// one more.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Black stones bitboard
    pub black: Bitboard,
    /// White stones bitboard
    pub white: Bitboard,
    to_move: Stone,
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
            to_move: Stone::Black,
        }
    }

    /// Color whose turn it is
    #[inline]
    pub fn to_move(&self) -> Stone {
        self.to_move
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position holds a stone of either color
    #[inline]
    pub fn is_occupied(&self, pos: Pos) -> bool {
        self.black.get(pos) || self.white.get(pos)
    }

    /// Place a stone for the side to move and flip the turn.
    ///
    /// Returns `false` and leaves the board unchanged if the cell is
    /// already occupied. Occupied-cell submissions are expected input from
    /// the pointer layer, not an error.
    #[inline]
    pub fn try_place(&mut self, pos: Pos) -> bool {
        if self.is_occupied(pos) {
            return false;
        }
        self.place_stone(pos, self.to_move);
        self.to_move = self.to_move.opponent();
        true
    }

    /// Hand the turn to an explicit color.
    ///
    /// Used when a winning move ends the game: the winner remains the side
    /// to move, since the loser never gets another turn.
    #[inline]
    pub fn set_to_move(&mut self, color: Stone) {
        debug_assert!(color != Stone::Empty);
        self.to_move = color;
    }

    /// Place a stone of an explicit color without touching the turn.
    ///
    /// Used to set up positions for win detection; game moves go through
    /// `try_place`.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => {}
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
