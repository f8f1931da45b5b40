//! Move application.
//!
//! Applies a single step or jump to a board in place, handling promotion and
//! capture removal, and reports whether the moved piece must keep capturing.

use crate::board::{Board, Cell, Move, Player, Square};
use crate::movegen::{capture_continuations, is_legal_move};

/// Result of applying one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was illegal; the board is unchanged.
    Rejected,
    /// The move was applied and the turn is over.
    Completed,
    /// A jump was applied and the piece on this square has a further jump
    /// available, which the same player must take before the turn ends.
    ContinueFrom(Square),
}

/// Applies `mv` for `player`.
///
/// The destination receives a king if the moving piece already was one or
/// it lands on the player's crowning row. A jump clears the square it passes
/// over. With `capture_only` set, steps are rejected.
pub fn apply_move(board: &mut Board, mv: Move, player: Player, capture_only: bool) -> MoveOutcome {
    if !is_legal_move(board, player, mv, capture_only) {
        return MoveOutcome::Rejected;
    }

    let crowned = board.get(mv.from).is_king() || mv.to.row() == player.crowning_row();
    board.set(mv.from, Cell::Empty);
    board.set(mv.to, if crowned { Cell::King(player) } else { Cell::Man(player) });

    let Some(mid) = mv.midpoint() else {
        return MoveOutcome::Completed;
    };
    board.set(mid, Cell::Empty);

    if capture_continuations(board, player, mv.to).is_empty() {
        MoveOutcome::Completed
    } else {
        MoveOutcome::ContinueFrom(mv.to)
    }
}
