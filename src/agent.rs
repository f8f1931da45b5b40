//! Agent API for move selection.
//!
//! Both the search agent and the learning agent implement [`Agent`]. A turn
//! driver asks the agent for its opening move and, while a capture chain is
//! pending, asks the same agent which jump to continue with.

use crate::board::{Board, Move, Player};

/// Anything that can pick moves for one side of the board.
pub trait Agent {
    /// The side this agent plays.
    fn player(&self) -> Player;

    /// Chooses the move that opens a turn, or `None` if the agent cannot move.
    fn select_move(&mut self, board: &Board) -> Option<Move>;

    /// Chooses the next jump of a pending capture chain.
    ///
    /// `options` is never empty and holds every jump available to the piece
    /// that just captured. Implementations must return one of them.
    fn continue_capture(&mut self, board: &Board, options: &[Move]) -> Move;
}
