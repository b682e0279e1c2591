//! Gobang (five-in-a-row) game core
//!
//! Two players alternate placing stones on a 19x19 grid; the first to line
//! up five or more same-colored stones along a row, column, or diagonal
//! wins. This crate holds the game-state and win-detection core plus an
//! egui front end that consumes it.
//!
//! # Architecture
//!
//! - [`board`]: Board state (stones, side to move) backed by bitboards
//! - [`rules`]: Five-in-a-row detection from the last placed stone
//! - [`game`]: Whole-game state machine; the only API the UI layer uses
//! - [`ui`]: eframe/egui presentation
//!
//! # Quick Start
//!
//! ```
//! use gobang::{Game, GameStatus, MoveOutcome};
//!
//! let mut game = Game::new();
//!
//! // Black opens in the center, White answers
//! assert_eq!(game.submit_move(9, 9), MoveOutcome::Continue);
//! assert_eq!(game.submit_move(9, 10), MoveOutcome::Continue);
//!
//! // Occupied cells and off-board coordinates are rejected, not errors
//! assert_eq!(game.submit_move(9, 9), MoveOutcome::Rejected);
//! assert_eq!(game.submit_move(42, -1), MoveOutcome::Rejected);
//! assert_eq!(game.status, GameStatus::InProgress);
//! ```

pub mod board;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use game::{Game, GameStatus, MoveOutcome};
