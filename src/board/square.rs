//! Board coordinates and moves.

use std::fmt;

use serde::Serialize;

/// Side length of the board.
pub const BOARD_SIZE: u8 = 8;

/// Returns true if both coordinates lie on the board.
pub fn on_board(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}

/// A square on the board. Both coordinates are always in `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square, or `None` if the coordinates are off the board.
    pub fn new(row: i32, col: i32) -> Option<Square> {
        if on_board(row, col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the square `(dr, dc)` away, or `None` when that leaves the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        Square::new(self.row as i32 + dr as i32, self.col as i32 + dc as i32)
    }

    /// Standard colouring: pieces only ever stand on dark squares.
    pub const fn is_playable(self) -> bool {
        (self.row + self.col) % 2 == 1
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// A single step or jump from one square to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Move {
        Move { from, to }
    }

    /// Signed row distance of the move.
    pub fn row_delta(self) -> i8 {
        self.to.row as i8 - self.from.row as i8
    }

    /// Signed column distance of the move.
    pub fn col_delta(self) -> i8 {
        self.to.col as i8 - self.from.col as i8
    }

    /// A jump travels two rows and captures the piece it passes over.
    pub fn is_jump(self) -> bool {
        self.row_delta().abs() == 2
    }

    /// The square passed over by a jump.
    pub fn midpoint(self) -> Option<Square> {
        if !self.is_jump() {
            return None;
        }
        Square::new(
            (self.from.row as i32 + self.to.row as i32) / 2,
            (self.from.col as i32 + self.to.col as i32) / 2,
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

/// Shorthand for building a move from raw coordinates. Panics when off the board.
#[cfg(test)]
pub(crate) fn mv(fr: i32, fc: i32, tr: i32, tc: i32) -> Move {
    Move::new(
        Square::new(fr, fc).expect("origin on board"),
        Square::new(tr, tc).expect("destination on board"),
    )
}
