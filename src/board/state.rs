//! Board representation.
//!
//! Holds the complete 8x8 grid of a game at a given point in time. The board
//! is a plain `Copy` value with structural equality and hashing so that it
//! can key the Q-table directly and be cloned cheaply per search branch.

use std::fmt;

use super::cell::{Cell, Player};
use super::square::{Square, BOARD_SIZE};

const N: usize = BOARD_SIZE as usize;

/// Complete board state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; N]; N],
}

impl Board {
    /// Creates a board with every dark square empty.
    pub fn empty() -> Self {
        let mut cells = [[Cell::Unplayable; N]; N];
        for (r, row) in cells.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                if (r + c) % 2 == 1 {
                    *cell = Cell::Empty;
                }
            }
        }
        Board { cells }
    }

    /// Standard starting position: player two on rows 0-2, player one on rows 5-7.
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for r in 0..N {
            let owner = match r {
                0..=2 => Player::Two,
                5..=7 => Player::One,
                _ => continue,
            };
            for c in 0..N {
                if (r + c) % 2 == 1 {
                    board.cells[r][c] = Cell::Man(owner);
                }
            }
        }
        board
    }

    /// Builds a board from raw rows, as decoded from a persisted state key.
    pub fn from_cells(cells: [[Cell; N]; N]) -> Self {
        Board { cells }
    }

    pub fn get(&self, sq: Square) -> Cell {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Places a piece (or clears a square). Unplayable squares are left alone.
    pub fn set(&mut self, sq: Square, cell: Cell) {
        let slot = &mut self.cells[sq.row() as usize][sq.col() as usize];
        if *slot != Cell::Unplayable && cell != Cell::Unplayable {
            *slot = cell;
        }
    }

    /// Iterates over all 64 cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    /// Iterates over every square holding a piece of `player`, row-major.
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = (Square, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(move |(r, row)| {
            row.iter().enumerate().filter_map(move |(c, &cell)| {
                if cell.belongs_to(player) {
                    Square::new(r as i32, c as i32).map(|sq| (sq, cell))
                } else {
                    None
                }
            })
        })
    }

    /// Counts (men, kings) for a player.
    pub fn piece_counts(&self, player: Player) -> (u32, u32) {
        self.cells().fold((0, 0), |(men, kings), cell| match cell {
            Cell::Man(p) if p == player => (men + 1, kings),
            Cell::King(p) if p == player => (men, kings + 1),
            _ => (men, kings),
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::initial()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|c| c.code().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
