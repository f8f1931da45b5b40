//! Draughtsman -- trains a Q-learning draughts player against alpha-beta search.
//!
//! Loads the Q-table (starting empty if the file does not exist yet), plays
//! the requested number of self-play games, and writes the table back.
//! A corrupt table file aborts the run rather than being overwritten.

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use draughtsman::learn::{LearningParams, QTable};
use draughtsman::protocol::{load_or_cold_start, save_table, DEFAULT_TABLE_PATH};
use draughtsman::selfplay::{self, TrainingConfig};

/// Q-learning self-play training for English draughts
#[derive(Parser, Debug)]
#[command(name = "draughtsman")]
#[command(about = "Trains a tabular Q-learning agent against alpha-beta search", long_about = None)]
struct Args {
    /// Number of games to play
    #[arg(long, default_value_t = 10)]
    games: usize,

    /// Search depth of the alpha-beta opponent, in plies
    #[arg(long, default_value_t = draughtsman::search::DEFAULT_DEPTH)]
    depth: u32,

    /// Half-move cap per game
    #[arg(long, default_value_t = draughtsman::engine::DEFAULT_MAX_HALF_MOVES)]
    max_half_moves: u32,

    /// Exploration rate (epsilon)
    #[arg(long, default_value_t = LearningParams::default().exploration_rate)]
    epsilon: f64,

    /// Learning rate (alpha)
    #[arg(long, default_value_t = LearningParams::default().learning_rate)]
    alpha: f64,

    /// Discount factor (gamma)
    #[arg(long, default_value_t = LearningParams::default().discount_factor)]
    gamma: f64,

    /// Random seed, 0 for entropy
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Q-table file, read before training and overwritten after
    #[arg(long, default_value = DEFAULT_TABLE_PATH)]
    table: PathBuf,

    /// Ignore any existing table and start empty
    #[arg(long, default_value_t = false)]
    fresh: bool,

    /// Write one JSON record per game to this file
    #[arg(long)]
    record: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let default_level = if args.quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = TrainingConfig {
        num_games: args.games,
        max_half_moves: args.max_half_moves,
        search_depth: args.depth,
        params: LearningParams {
            exploration_rate: args.epsilon,
            learning_rate: args.alpha,
            discount_factor: args.gamma,
        },
        seed: args.seed,
        ..Default::default()
    };

    let table = if args.fresh {
        QTable::new()
    } else {
        load_or_cold_start(&args.table)?
    };

    tracing::info!(
        games = config.num_games,
        depth = config.search_depth,
        max_half_moves = config.max_half_moves,
        epsilon = config.params.exploration_rate,
        alpha = config.params.learning_rate,
        gamma = config.params.discount_factor,
        "starting training"
    );

    let mut learner = config.learner(table);
    let mut games = Vec::with_capacity(config.num_games);
    selfplay::run_training(&config, &mut learner, |game| games.push(game));
    selfplay::print_summary(&games, config.learner_side);

    save_table(&args.table, learner.table())?;

    if let Some(path) = args.record {
        let mut writer = BufWriter::new(File::create(&path)?);
        selfplay::write_jsonl(&games, &mut writer)?;
        tracing::info!(path = %path.display(), games = games.len(), "wrote game records");
    }

    Ok(())
}
