//! Game rules for Gobang: five-in-a-row win detection

pub mod win;

// Re-exports for convenient access
pub use win::{count_run, find_winning_line, is_winning_move, DIRECTIONS};
