//! Material evaluation.

use crate::board::{Board, Cell, Player};

/// Value of a man.
pub const MAN_VALUE: i32 = 1;
/// Value of a king.
pub const KING_VALUE: i32 = 4;

/// Scores the board for `player`: own material minus opponent material.
pub fn evaluate_material(board: &Board, player: Player) -> i32 {
    board
        .cells()
        .map(|cell| match cell {
            Cell::Man(p) if p == player => MAN_VALUE,
            Cell::King(p) if p == player => KING_VALUE,
            Cell::Man(_) => -MAN_VALUE,
            Cell::King(_) => -KING_VALUE,
            Cell::Empty | Cell::Unplayable => 0,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    #[test]
    fn initial_position_is_balanced() {
        let board = Board::initial();
        assert_eq!(evaluate_material(&board, Player::One), 0);
        assert_eq!(evaluate_material(&board, Player::Two), 0);
    }

    #[test]
    fn kings_count_four() {
        let mut board = Board::empty();
        board.set(Square::new(0, 1).unwrap(), Cell::King(Player::One));
        board.set(Square::new(5, 2).unwrap(), Cell::Man(Player::One));
        board.set(Square::new(2, 3).unwrap(), Cell::Man(Player::Two));
        assert_eq!(evaluate_material(&board, Player::One), 4);
        assert_eq!(evaluate_material(&board, Player::Two), -4);
    }

    #[test]
    fn evaluation_is_antisymmetric() {
        let mut board = Board::initial();
        board.set(Square::new(5, 0).unwrap(), Cell::Empty);
        board.set(Square::new(0, 1).unwrap(), Cell::King(Player::Two));
        for p in [Player::One, Player::Two] {
            assert_eq!(evaluate_material(&board, p), -evaluate_material(&board, p.opponent()));
        }
    }
}
