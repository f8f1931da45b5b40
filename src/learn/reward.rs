//! Reward signal for the learning agent.

use crate::board::{Board, Player};
use crate::eval::evaluate_material;

/// Deltas at or above this threshold are clamped to [`REWARD_CAP`].
pub const REWARD_THRESHOLD: i32 = 5;
pub const REWARD_CAP: f64 = 10.0;

/// Scores the transition `prev -> next` for `player`.
///
/// The reward is the change in the opponent's material score, taken as is
/// below [`REWARD_THRESHOLD`] and clamped to [`REWARD_CAP`] otherwise. A
/// capture by `player` lowers the opponent's score and so yields a negative
/// reward.
pub fn evaluate_reward(prev: &Board, next: &Board, player: Player) -> f64 {
    let opponent = player.opponent();
    let delta = evaluate_material(next, opponent) - evaluate_material(prev, opponent);
    if delta < REWARD_THRESHOLD {
        delta as f64
    } else {
        REWARD_CAP
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Square};

    /// A board where player two has `men` men and player one has none.
    fn board_with_two_men(men: usize) -> Board {
        let mut board = Board::empty();
        let squares = (0..8)
            .flat_map(|r| (0..8).map(move |c| (r, c)))
            .filter_map(|(r, c)| Square::new(r, c))
            .filter(|sq| sq.is_playable());
        for sq in squares.take(men) {
            board.set(sq, Cell::Man(Player::Two));
        }
        board
    }

    #[test]
    fn capture_of_five_gives_minus_five() {
        let prev = board_with_two_men(8);
        let next = board_with_two_men(3);
        assert_eq!(evaluate_material(&prev, Player::Two), 8);
        assert_eq!(evaluate_material(&next, Player::Two), 3);
        assert_eq!(evaluate_reward(&prev, &next, Player::One), -5.0);
    }

    #[test]
    fn large_gain_is_clamped() {
        let prev = board_with_two_men(1);
        let next = board_with_two_men(7);
        assert_eq!(evaluate_reward(&prev, &next, Player::One), REWARD_CAP);
    }

    #[test]
    fn just_below_threshold_is_kept() {
        let prev = board_with_two_men(1);
        let next = board_with_two_men(5);
        assert_eq!(evaluate_reward(&prev, &next, Player::One), 4.0);
    }

    #[test]
    fn quiet_move_scores_zero() {
        let board = Board::initial();
        assert_eq!(evaluate_reward(&board, &board, Player::One), 0.0);
    }
}
