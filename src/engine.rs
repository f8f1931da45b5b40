//! Game session state.
//!
//! Owns the live board, the side to move and the half-move counter for one
//! game, and hands turns to agents. Nothing here is global: a driver creates
//! one session per game and passes agents in explicitly.

use serde::Serialize;
use tracing::warn;

use crate::agent::Agent;
use crate::board::{Board, Player};
use crate::movegen::has_legal_move;
use crate::resolve::{play_turn, TurnRecord};

/// Default half-move cap after which a game is abandoned.
pub const DEFAULT_MAX_HALF_MOVES: u32 = 300;

/// Why a game stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameEnd {
    /// The side to move had no legal move and loses.
    NoMoves { loser: Player },
    /// The half-move cap was reached.
    MoveCap,
}

impl GameEnd {
    pub fn winner(self) -> Option<Player> {
        match self {
            GameEnd::NoMoves { loser } => Some(loser.opponent()),
            GameEnd::MoveCap => None,
        }
    }
}

/// One game in progress.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    to_move: Player,
    half_moves: u32,
    max_half_moves: u32,
}

impl GameSession {
    /// Starts a game from the standard position with player one to move.
    pub fn new(max_half_moves: u32) -> Self {
        GameSession::with_position(Board::initial(), Player::One, max_half_moves)
    }

    /// Starts a game from an arbitrary position.
    pub fn with_position(board: Board, to_move: Player, max_half_moves: u32) -> Self {
        GameSession {
            board,
            to_move,
            half_moves: 0,
            max_half_moves,
        }
    }

    /// Resets to the standard starting position.
    pub fn new_game(&mut self) {
        self.board = Board::initial();
        self.to_move = Player::One;
        self.half_moves = 0;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn half_moves(&self) -> u32 {
        self.half_moves
    }

    /// Returns how the game ended, or `None` while it is still running.
    pub fn status(&self) -> Option<GameEnd> {
        if self.half_moves >= self.max_half_moves {
            return Some(GameEnd::MoveCap);
        }
        if !has_legal_move(&self.board, self.to_move) {
            return Some(GameEnd::NoMoves {
                loser: self.to_move,
            });
        }
        None
    }

    /// Lets `agent` play the side to move, then passes the turn.
    ///
    /// The turn passes even if the agent produced no move.
    pub fn play<A: Agent + ?Sized>(&mut self, agent: &mut A) -> Option<TurnRecord> {
        let turn = if agent.player() == self.to_move {
            play_turn(&mut self.board, agent)
        } else {
            warn!(agent = ?agent.player(), to_move = ?self.to_move, "agent asked to play out of turn");
            None
        };
        self.to_move = self.to_move.opponent();
        self.half_moves += 1;
        turn
    }
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new(DEFAULT_MAX_HALF_MOVES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchAgent;

    #[test]
    fn new_session_starts_with_player_one() {
        let session = GameSession::default();
        assert_eq!(session.to_move(), Player::One);
        assert_eq!(session.half_moves(), 0);
        assert_eq!(*session.board(), Board::initial());
        assert_eq!(session.status(), None);
    }

    #[test]
    fn play_passes_turn() {
        let mut session = GameSession::default();
        let mut agent = SearchAgent::new(Player::One, 1);
        let turn = session.play(&mut agent).unwrap();
        assert_eq!(turn.moves.len(), 1);
        assert_eq!(session.to_move(), Player::Two);
        assert_eq!(session.half_moves(), 1);
        assert_ne!(*session.board(), Board::initial());
    }

    #[test]
    fn out_of_turn_agent_does_not_move() {
        let mut session = GameSession::default();
        let mut agent = SearchAgent::new(Player::Two, 1);
        assert!(session.play(&mut agent).is_none());
        assert_eq!(*session.board(), Board::initial());
        assert_eq!(session.to_move(), Player::Two);
    }

    #[test]
    fn cap_ends_game() {
        let mut session = GameSession::new(1);
        let mut agent = SearchAgent::new(Player::One, 1);
        session.play(&mut agent);
        assert_eq!(session.status(), Some(GameEnd::MoveCap));
        assert_eq!(GameEnd::MoveCap.winner(), None);
    }

    #[test]
    fn side_without_moves_loses() {
        let session = GameSession::with_position(Board::empty(), Player::Two, 10);
        let end = session.status().unwrap();
        assert_eq!(end, GameEnd::NoMoves { loser: Player::Two });
        assert_eq!(end.winner(), Some(Player::One));
    }

    #[test]
    fn new_game_resets() {
        let mut session = GameSession::with_position(Board::empty(), Player::Two, 10);
        session.new_game();
        assert_eq!(*session.board(), Board::initial());
        assert_eq!(session.to_move(), Player::One);
    }
}
