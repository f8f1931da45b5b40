//! Legal move generation.
//!
//! Decides whether a single step or jump is legal for a player and
//! enumerates every legal move on a board. Men only move forward; kings may
//! additionally use the mirrored (backward) directions.

use crate::board::{Board, Cell, Move, Player, Square};

/// Checks a move against one direction of travel.
///
/// `forward` is the row delta of a single step in the direction being
/// checked: the player's own direction, or its negation for a king moving
/// backward.
fn legal_in_direction(board: &Board, player: Player, mv: Move, capture_only: bool, forward: i8) -> bool {
    let dr = mv.row_delta();
    let dc = mv.col_delta();

    if dr == forward && dc.abs() == 1 {
        return !capture_only;
    }

    if dr == 2 * forward && dc.abs() == 2 {
        return match mv.from.offset(forward, dc / 2) {
            Some(mid) => board.get(mid).belongs_to(player.opponent()),
            None => false,
        };
    }

    false
}

/// Returns whether `mv` is a legal step or jump for `player`.
///
/// The origin must hold one of the player's pieces and the destination must
/// be an empty playable square. With `capture_only` set, only jumps qualify.
/// A king passes if either the forward or the backward check passes.
pub fn is_legal_move(board: &Board, player: Player, mv: Move, capture_only: bool) -> bool {
    let piece = board.get(mv.from);
    if !piece.belongs_to(player) {
        return false;
    }
    if board.get(mv.to) != Cell::Empty {
        return false;
    }

    let forward = player.forward();
    if legal_in_direction(board, player, mv, capture_only, forward) {
        return true;
    }
    piece.is_king() && legal_in_direction(board, player, mv, capture_only, -forward)
}

/// Candidate destinations for a piece in one direction, in the fixed order
/// right step, left step, right jump, left jump.
fn candidates(from: Square, forward: i8) -> impl Iterator<Item = Square> {
    [(forward, 1), (forward, -1), (2 * forward, 2), (2 * forward, -2)]
        .into_iter()
        .filter_map(move |(dr, dc)| from.offset(dr, dc))
}

/// Appends the legal moves for the piece on `from` to `out`.
fn moves_from(board: &Board, player: Player, from: Square, piece: Cell, capture_only: bool, out: &mut Vec<Move>) {
    let forward = player.forward();
    for to in candidates(from, forward) {
        let mv = Move::new(from, to);
        if is_legal_move(board, player, mv, capture_only) {
            out.push(mv);
        }
    }
    if piece.is_king() {
        for to in candidates(from, -forward) {
            let mv = Move::new(from, to);
            if is_legal_move(board, player, mv, capture_only) {
                out.push(mv);
            }
        }
    }
}

/// Generates all legal moves for `player`.
///
/// Origins are scanned row-major; per origin the forward candidates come
/// first, then (for kings) the backward ones. The order is deterministic.
pub fn legal_moves_for(board: &Board, player: Player) -> Vec<Move> {
    let mut moves = Vec::new();
    for (from, piece) in board.pieces(player) {
        moves_from(board, player, from, piece, false, &mut moves);
    }
    moves
}

/// Returns the jumps available to the piece standing on `from`.
///
/// Used after a capture to decide whether the chain must continue. Empty if
/// the square does not hold one of `player`'s pieces.
pub fn capture_continuations(board: &Board, player: Player, from: Square) -> Vec<Move> {
    let piece = board.get(from);
    let mut moves = Vec::new();
    if piece.belongs_to(player) {
        moves_from(board, player, from, piece, true, &mut moves);
    }
    moves
}

/// Returns true if `player` has at least one legal move.
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    !legal_moves_for(board, player).is_empty()
}
