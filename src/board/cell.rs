//! Player identity and cell codes.
//!
//! Cells are stored as a small enum but keep their numeric codes for the
//! persisted table format: `0` unplayable, `3` empty, `1`/`2` men and
//! `7`/`8` kings (player code + 6).

use serde::Serialize;

/// One of the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Returns the numeric player code (1 or 2).
    pub const fn code(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Returns the other side.
    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Row delta of a man's forward step: player one moves up the board.
    pub const fn forward(self) -> i8 {
        match self {
            Player::One => -1,
            Player::Two => 1,
        }
    }

    /// The row on which this player's men are crowned.
    pub const fn crowning_row(self) -> u8 {
        match self {
            Player::One => 0,
            Player::Two => 7,
        }
    }
}

/// Contents of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// A light square; never holds a piece.
    Unplayable,
    Empty,
    Man(Player),
    King(Player),
}

impl Cell {
    /// Returns the persisted cell code.
    pub const fn code(self) -> u8 {
        match self {
            Cell::Unplayable => 0,
            Cell::Empty => 3,
            Cell::Man(p) => p.code(),
            Cell::King(p) => p.code() + 6,
        }
    }

    /// Parses a cell from its persisted code.
    pub fn from_code(code: i64) -> Option<Cell> {
        match code {
            0 => Some(Cell::Unplayable),
            3 => Some(Cell::Empty),
            1 => Some(Cell::Man(Player::One)),
            2 => Some(Cell::Man(Player::Two)),
            7 => Some(Cell::King(Player::One)),
            8 => Some(Cell::King(Player::Two)),
            _ => None,
        }
    }

    /// Returns the owner of the piece on this cell, if any.
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Man(p) | Cell::King(p) => Some(p),
            Cell::Unplayable | Cell::Empty => None,
        }
    }

    pub const fn is_king(self) -> bool {
        matches!(self, Cell::King(_))
    }

    /// Returns true if this cell holds a man or king belonging to `player`.
    pub fn belongs_to(self, player: Player) -> bool {
        self.owner() == Some(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_code_roundtrip() {
        for cell in [
            Cell::Unplayable,
            Cell::Empty,
            Cell::Man(Player::One),
            Cell::Man(Player::Two),
            Cell::King(Player::One),
            Cell::King(Player::Two),
        ] {
            assert_eq!(Cell::from_code(cell.code() as i64), Some(cell));
        }
        assert_eq!(Cell::from_code(4), None);
        assert_eq!(Cell::from_code(-1), None);
    }

    #[test]
    fn king_code_is_player_plus_six() {
        assert_eq!(Cell::King(Player::One).code(), 7);
        assert_eq!(Cell::King(Player::Two).code(), 8);
    }

    #[test]
    fn opponent_is_three_minus_code() {
        for p in [Player::One, Player::Two] {
            assert_eq!(p.opponent().code(), 3 - p.code());
        }
    }
}
