//! Self-play training.
//!
//! Plays full games between the Q-learning agent and the alpha-beta search
//! agent. After every learner turn the observed transition is fed back into
//! the learner's table; the table carries over from game to game.

use std::io::{self, Write};
use std::time::Instant;

use serde::Serialize;
use tracing::info;

use crate::agent::Agent;
use crate::board::Player;
use crate::engine::{GameEnd, GameSession, DEFAULT_MAX_HALF_MOVES};
use crate::eval::evaluate_material;
use crate::learn::{evaluate_reward, LearningParams, QAgent, QTable};
use crate::search::{SearchAgent, DEFAULT_DEPTH};

/// Configuration for a training run.
#[derive(Debug, Clone)]
pub struct TrainingConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Half-move cap per game.
    pub max_half_moves: u32,
    /// Search depth of the alpha-beta opponent.
    pub search_depth: u32,
    /// Side played by the learner; the search agent takes the other.
    pub learner_side: Player,
    pub params: LearningParams,
    /// Random seed (0 = use entropy).
    pub seed: u64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        TrainingConfig {
            num_games: 10,
            max_half_moves: DEFAULT_MAX_HALF_MOVES,
            search_depth: DEFAULT_DEPTH,
            learner_side: Player::One,
            params: LearningParams::default(),
            seed: 0,
        }
    }
}

impl TrainingConfig {
    /// Builds the learner around an existing table.
    pub fn learner(&self, table: QTable) -> QAgent {
        QAgent::new(self.learner_side, self.params, table, self.seed)
    }

    /// Builds the search opponent.
    pub fn searcher(&self) -> SearchAgent {
        SearchAgent::new(self.learner_side.opponent(), self.search_depth)
    }
}

/// Summary of one finished game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameRecord {
    pub game_id: usize,
    pub half_moves: u32,
    pub end: GameEnd,
    pub winner: Option<Player>,
    /// Final material balance from the learner's side.
    pub learner_material: i32,
    /// Sum of the rewards the learner received.
    pub total_reward: f64,
    pub learner_captures: usize,
    pub searcher_captures: usize,
    /// States in the learner's table after the game.
    pub table_states: usize,
}

/// Plays a single game and updates the learner's table along the way.
pub fn play_game(
    config: &TrainingConfig,
    game_id: usize,
    learner: &mut QAgent,
    searcher: &mut SearchAgent,
) -> GameRecord {
    let mut session = GameSession::new(config.max_half_moves);
    let learner_side = learner.player();
    let mut total_reward = 0.0;
    let mut learner_captures = 0;
    let mut searcher_captures = 0;

    let end = loop {
        if let Some(end) = session.status() {
            break end;
        }

        if session.to_move() == learner_side {
            let before = *session.board();
            let Some(turn) = session.play(learner) else {
                continue;
            };
            let after = *session.board();
            let reward = evaluate_reward(&before, &after, learner_side);
            learner.update_q_value(&before, turn.first(), reward, &after);
            total_reward += reward;
            learner_captures += turn.captures();
        } else if let Some(turn) = session.play(searcher) {
            searcher_captures += turn.captures();
        }
    };

    GameRecord {
        game_id,
        half_moves: session.half_moves(),
        end,
        winner: end.winner(),
        learner_material: evaluate_material(session.board(), learner_side),
        total_reward,
        learner_captures,
        searcher_captures,
        table_states: learner.table().len(),
    }
}

/// Runs `config.num_games` games, calling `on_game` with each record.
///
/// Games are played one after another; the learner's table is shared by all
/// of them.
pub fn run_training<F>(config: &TrainingConfig, learner: &mut QAgent, mut on_game: F)
where
    F: FnMut(GameRecord),
{
    let mut searcher = config.searcher();

    for i in 0..config.num_games {
        let game_start = Instant::now();
        let game = play_game(config, i, learner, &mut searcher);
        let outcome = match game.winner {
            Some(w) if w == learner.player() => "learner wins",
            Some(_) => "search wins",
            None => "move cap",
        };
        info!(
            "Game {}/{}: {} after {} half-moves, reward {:.1}, {} states ({:.1}s)",
            i + 1,
            config.num_games,
            outcome,
            game.half_moves,
            game.total_reward,
            game.table_states,
            game_start.elapsed().as_secs_f64(),
        );
        on_game(game);
    }
}

/// Writes game records as JSONL (one JSON object per game, one per line).
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> io::Result<()> {
    for game in games {
        serde_json::to_writer(&mut *out, game)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Logs a summary of a training run.
pub fn print_summary(games: &[GameRecord], learner_side: Player) {
    let total = games.len();
    let learner_wins = games.iter().filter(|g| g.winner == Some(learner_side)).count();
    let search_wins = games
        .iter()
        .filter(|g| g.winner == Some(learner_side.opponent()))
        .count();
    let capped = games.iter().filter(|g| g.end == GameEnd::MoveCap).count();
    let half_moves: u64 = games.iter().map(|g| g.half_moves as u64).sum();
    let reward: f64 = games.iter().map(|g| g.total_reward).sum();

    info!("=== Training Summary ===");
    info!("Games: {}", total);
    info!("Learner wins: {}", learner_wins);
    info!("Search wins: {}", search_wins);
    info!("Move cap reached: {}", capped);
    info!("Avg half-moves/game: {:.1}", half_moves as f64 / total.max(1) as f64);
    info!("Avg reward/game: {:.2}", reward / total.max(1) as f64);
}
