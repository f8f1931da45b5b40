//! Board representation and game-state types.
//!
//! Contains the core data structures for players, cells, squares, moves,
//! and the board itself.

pub mod cell;
pub mod square;
pub mod state;

pub use cell::{Cell, Player};
pub use square::{on_board, Move, Square, BOARD_SIZE};
pub use state::Board;
