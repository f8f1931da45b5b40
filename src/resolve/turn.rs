//! Turn resolution.
//!
//! A turn is one opening move followed by any jumps the capture chain
//! forces. The chain is driven by an explicit loop: each pending
//! continuation is handed back to the same agent until none remain.

use tracing::{debug, warn};

use crate::agent::Agent;
use crate::board::{Board, Move};
use crate::movegen::capture_continuations;

use super::apply::{apply_move, MoveOutcome};

/// Moves played during a single turn, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    pub moves: Vec<Move>,
}

impl TurnRecord {
    /// The move that opened the turn.
    pub fn first(&self) -> Move {
        self.moves[0]
    }

    /// Number of pieces captured during the turn.
    pub fn captures(&self) -> usize {
        self.moves.iter().filter(|m| m.is_jump()).count()
    }
}

/// Plays one full turn for `agent` on `board`.
///
/// Returns `None` without touching the board if the agent has no move or
/// its opening move is illegal.
pub fn play_turn<A: Agent + ?Sized>(board: &mut Board, agent: &mut A) -> Option<TurnRecord> {
    let player = agent.player();
    let opening = agent.select_move(board)?;

    let mut outcome = apply_move(board, opening, player, false);
    if outcome == MoveOutcome::Rejected {
        warn!(?player, mv = %opening, "agent proposed an illegal move");
        return None;
    }

    let mut moves = vec![opening];
    while let MoveOutcome::ContinueFrom(from) = outcome {
        let options = capture_continuations(board, player, from);
        let Some(&fallback) = options.first() else {
            break;
        };
        let mut next = agent.continue_capture(board, &options);
        if !options.contains(&next) {
            warn!(?player, mv = %next, "continuation outside the offered jumps, forcing {}", fallback);
            next = fallback;
        }
        debug!(?player, mv = %next, "forced capture continues");
        outcome = apply_move(board, next, player, true);
        moves.push(next);
    }

    Some(TurnRecord { moves })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::square::mv;
    use crate::board::{Cell, Player, Square};
    use crate::movegen::legal_moves_for;

    /// Plays the first legal move and the first offered continuation.
    struct FirstMove(Player);

    impl Agent for FirstMove {
        fn player(&self) -> Player {
            self.0
        }

        fn select_move(&mut self, board: &Board) -> Option<Move> {
            legal_moves_for(board, self.0).first().copied()
        }

        fn continue_capture(&mut self, _board: &Board, options: &[Move]) -> Move {
            options[0]
        }
    }

    /// Always answers with a fixed move, legal or not.
    struct Stubborn(Player, Move);

    impl Agent for Stubborn {
        fn player(&self) -> Player {
            self.0
        }

        fn select_move(&mut self, _board: &Board) -> Option<Move> {
            Some(self.1)
        }

        fn continue_capture(&mut self, _board: &Board, _options: &[Move]) -> Move {
            self.1
        }
    }

    fn sq(r: i32, c: i32) -> Square {
        Square::new(r, c).unwrap()
    }

    fn double_jump_board() -> Board {
        let mut board = Board::empty();
        board.set(sq(6, 1), Cell::Man(Player::One));
        board.set(sq(5, 0), Cell::Man(Player::Two));
        board.set(sq(5, 2), Cell::Man(Player::Two));
        board.set(sq(3, 4), Cell::Man(Player::Two));
        board
    }

    #[test]
    fn forced_chain_takes_both_pieces() {
        let mut board = double_jump_board();
        let turn = play_turn(&mut board, &mut FirstMove(Player::One)).unwrap();
        assert_eq!(turn.moves, vec![mv(6, 1, 4, 3), mv(4, 3, 2, 5)]);
        assert_eq!(turn.captures(), 2);
        assert_eq!(board.piece_counts(Player::Two), (1, 0));
        assert_eq!(board.get(sq(2, 5)), Cell::Man(Player::One));
    }

    #[test]
    fn off_menu_continuation_is_replaced() {
        let mut board = double_jump_board();
        let mut agent = Stubborn(Player::One, mv(6, 1, 4, 3));
        let turn = play_turn(&mut board, &mut agent).unwrap();
        assert_eq!(turn.moves, vec![mv(6, 1, 4, 3), mv(4, 3, 2, 5)]);
    }

    #[test]
    fn illegal_opening_is_no_turn() {
        let mut board = Board::initial();
        let before = board;
        assert!(play_turn(&mut board, &mut Stubborn(Player::One, mv(5, 0, 3, 2))).is_none());
        assert_eq!(board, before);
    }

    #[test]
    fn no_moves_is_no_turn() {
        let mut board = Board::empty();
        assert!(play_turn(&mut board, &mut FirstMove(Player::Two)).is_none());
    }

    #[test]
    fn promoted_piece_keeps_capturing_backward() {
        // Player one jumps onto the crowning row and, now a king, has a
        // backward jump available.
        let mut board = Board::empty();
        board.set(sq(2, 1), Cell::Man(Player::One));
        board.set(sq(1, 0), Cell::Man(Player::Two));
        board.set(sq(1, 2), Cell::Man(Player::Two));
        board.set(sq(1, 4), Cell::Man(Player::Two));
        let turn = play_turn(&mut board, &mut FirstMove(Player::One)).unwrap();
        assert_eq!(turn.moves, vec![mv(2, 1, 0, 3), mv(0, 3, 2, 5)]);
        assert_eq!(board.get(sq(2, 5)), Cell::King(Player::One));
    }
}
