//! Move and turn resolution.
//!
//! Applies moves to a board and resolves mandatory capture chains.

pub mod apply;
pub mod turn;

pub use apply::{apply_move, MoveOutcome};
pub use turn::{play_turn, TurnRecord};
