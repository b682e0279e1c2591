//! Win condition checking
//!
//! A move wins when the placed stone sits on a line of five or more
//! same-colored stones along one of the four axes (overlines allowed).
//! Detection is a pure function of the board and the pivot stone; the scan
//! never leaves the board and stops at the first gap or opposing stone.

use crate::board::{Board, Pos, Stone};

/// Direction vectors, one per axis family.
///
/// Each vector is scanned in both orientations, so four entries cover all
/// eight neighbor rays.
pub const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Descending diagonal (x and y grow together)
    (1, -1), // Ascending diagonal
];

/// Count consecutive stones of `color` strictly after `from` along `(dx, dy)`.
///
/// Stops at the first empty cell, opposing stone, or board edge; gaps are
/// never skipped. The pivot itself is not counted.
pub fn count_run(board: &Board, from: Pos, color: Stone, dx: i32, dy: i32) -> u32 {
    let mut count = 0;
    let mut x = from.x as i32 + dx;
    let mut y = from.y as i32 + dy;
    while Pos::is_valid(x, y) && board.get(Pos::new(x as u8, y as u8)) == color {
        count += 1;
        x += dx;
        y += dy;
    }
    count
}

/// Check whether the stone just placed at `last` completes a line of five.
///
/// Scans each axis family outward from the pivot in both orientations; the
/// pivot counts once per family, never twice.
pub fn is_winning_move(board: &Board, last: Pos, color: Stone) -> bool {
    DIRECTIONS.iter().any(|&(dx, dy)| {
        1 + count_run(board, last, color, dx, dy) + count_run(board, last, color, -dx, -dy) >= 5
    })
}

/// Find five positions of the completed line through `last`, if any.
///
/// Returns the first five stones of the line in board order, for the UI's
/// winning-line highlight. Longer lines are truncated to five.
pub fn find_winning_line(board: &Board, last: Pos, color: Stone) -> Option<[Pos; 5]> {
    for &(dx, dy) in &DIRECTIONS {
        let back = count_run(board, last, color, -dx, -dy);
        let forward = count_run(board, last, color, dx, dy);
        if 1 + back + forward < 5 {
            continue;
        }

        // Walk five cells from the far end of the run; every cell is on
        // the board because count_run only counted on-board stones
        let start_x = last.x as i32 - dx * back as i32;
        let start_y = last.y as i32 - dy * back as i32;
        let mut line = [last; 5];
        for (i, cell) in line.iter_mut().enumerate() {
            let x = start_x + dx * i as i32;
            let y = start_y + dy * i as i32;
            *cell = Pos::new(x as u8, y as u8);
        }
        return Some(line);
    }

    None
}
