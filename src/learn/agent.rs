//! Epsilon-greedy tabular Q-learning agent.
//!
//! Explores uniformly at random with probability epsilon and otherwise plays
//! the recorded move with the highest value. After each turn the driver feeds
//! the observed transition back through [`QAgent::update_q_value`].

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::agent::Agent;
use crate::board::{Board, Move, Player};
use crate::movegen::legal_moves_for;

use super::table::QTable;

/// Hyperparameters of the learner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LearningParams {
    /// Probability of picking a random move (epsilon).
    pub exploration_rate: f64,
    /// Step size of the value update (alpha).
    pub learning_rate: f64,
    /// Weight of the best follow-up value (gamma).
    pub discount_factor: f64,
}

impl Default for LearningParams {
    fn default() -> Self {
        LearningParams {
            exploration_rate: 0.4,
            learning_rate: 0.1,
            discount_factor: 0.9,
        }
    }
}

/// A Q-learning agent owning its value table.
#[derive(Debug, Clone)]
pub struct QAgent {
    player: Player,
    params: LearningParams,
    table: QTable,
    rng: SmallRng,
}

impl QAgent {
    /// Creates an agent. A `seed` of 0 draws the generator from entropy.
    pub fn new(player: Player, params: LearningParams, table: QTable, seed: u64) -> Self {
        let rng = if seed != 0 {
            SmallRng::seed_from_u64(seed)
        } else {
            SmallRng::from_entropy()
        };
        QAgent {
            player,
            params,
            table,
            rng,
        }
    }

    pub fn table(&self) -> &QTable {
        &self.table
    }

    pub fn into_table(self) -> QTable {
        self.table
    }

    /// Picks a move for `state`, epsilon-greedily.
    ///
    /// Falls back to a random legal move when nothing legal is recorded for
    /// the state. Returns `None` only when the agent has no legal move.
    pub fn choose_action(&mut self, state: &Board) -> Option<Move> {
        let legal = legal_moves_for(state, self.player);
        self.choose_among(state, &legal)
    }

    fn choose_among(&mut self, state: &Board, candidates: &[Move]) -> Option<Move> {
        if candidates.is_empty() {
            return None;
        }
        if self.rng.gen::<f64>() < self.params.exploration_rate {
            return self.choose_random(candidates);
        }
        match self.choose_best(state, candidates) {
            Some(mv) => Some(mv),
            None => self.choose_random(candidates),
        }
    }

    fn choose_random(&mut self, candidates: &[Move]) -> Option<Move> {
        if candidates.is_empty() {
            return None;
        }
        let idx = self.rng.gen_range(0..candidates.len());
        Some(candidates[idx])
    }

    /// The recorded candidate with the highest value; the last maximum wins.
    fn choose_best(&self, state: &Board, candidates: &[Move]) -> Option<Move> {
        let mut best: Option<(Move, f64)> = None;
        for (&mv, &value) in self.table.moves(state)? {
            if !candidates.contains(&mv) {
                continue;
            }
            match best {
                Some((_, b)) if value < b => {}
                _ => best = Some((mv, value)),
            }
        }
        best.map(|(mv, _)| mv)
    }

    /// One-step Q-learning update of `(state, action)`.
    ///
    /// The current value is read (materializing the default entry) before
    /// the best follow-up value of `next` is looked up.
    pub fn update_q_value(&mut self, state: &Board, action: Move, reward: f64, next: &Board) {
        let current = self.table.value(state, action);
        let max_future = self.table.max_value(next).unwrap_or(0.0);
        let LearningParams {
            learning_rate: alpha,
            discount_factor: gamma,
            ..
        } = self.params;
        let updated = (1.0 - alpha) * current + alpha * (reward + gamma * max_future);
        self.table.set(state, action, updated);
    }
}

impl Agent for QAgent {
    fn player(&self) -> Player {
        self.player
    }

    fn select_move(&mut self, board: &Board) -> Option<Move> {
        self.choose_action(board)
    }

    fn continue_capture(&mut self, board: &Board, options: &[Move]) -> Move {
        self.choose_among(board, options).unwrap_or(options[0])
    }
}
