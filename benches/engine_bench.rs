use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;

use draughtsman::board::{Board, Player};
use draughtsman::eval::evaluate_material;
use draughtsman::learn::{evaluate_reward, LearningParams, QAgent, QTable};
use draughtsman::movegen::legal_moves_for;
use draughtsman::protocol::{encode_state, parse_state, table_from_json, table_to_json};
use draughtsman::resolve::play_turn;
use draughtsman::search::{search, SearchAgent, DEFAULT_DEPTH};

/// Plays a few shallow-search turns from the opening to reach a mid-game board.
fn midgame() -> Board {
    let mut board = Board::initial();
    let mut one = SearchAgent::new(Player::One, 2);
    let mut two = SearchAgent::new(Player::Two, 3);
    for _ in 0..8 {
        play_turn(&mut board, &mut one);
        play_turn(&mut board, &mut two);
    }
    board
}

/// A table filled by a handful of learner turns against a depth-1 opponent.
fn trained_table() -> QTable {
    let mut learner = QAgent::new(Player::One, LearningParams::default(), QTable::new(), 3);
    let mut opponent = SearchAgent::new(Player::Two, 1);
    for _ in 0..20 {
        let mut board = Board::initial();
        for _ in 0..15 {
            let before = board;
            let Some(turn) = play_turn(&mut board, &mut learner) else {
                break;
            };
            let reward = evaluate_reward(&before, &board, Player::One);
            learner.update_q_value(&before, turn.first(), reward, &board);
            if play_turn(&mut board, &mut opponent).is_none() {
                break;
            }
        }
    }
    learner.into_table()
}

fn bench_evaluate(c: &mut Criterion) {
    let board = midgame();
    c.bench_function("evaluate_material", |b| {
        b.iter(|| evaluate_material(black_box(&board), black_box(Player::One)))
    });
}

fn bench_movegen_initial(c: &mut Criterion) {
    let board = Board::initial();
    c.bench_function("movegen_initial", |b| {
        b.iter(|| legal_moves_for(black_box(&board), black_box(Player::One)))
    });
}

fn bench_movegen_midgame(c: &mut Criterion) {
    let board = midgame();
    c.bench_function("movegen_midgame", |b| {
        b.iter(|| legal_moves_for(black_box(&board), black_box(Player::Two)))
    });
}

fn bench_search_default_depth(c: &mut Criterion) {
    let board = Board::initial();
    let mut group = c.benchmark_group("search");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(10));
    group.bench_function("initial_depth_5", |b| {
        b.iter(|| search(black_box(&board), Player::Two, DEFAULT_DEPTH))
    });
    let mid = midgame();
    group.bench_function("midgame_depth_5", |b| {
        b.iter(|| search(black_box(&mid), Player::One, DEFAULT_DEPTH))
    });
    group.finish();
}

fn bench_state_key(c: &mut Criterion) {
    let board = midgame();
    let key = encode_state(&board);
    c.bench_function("encode_state", |b| b.iter(|| encode_state(black_box(&board))));
    c.bench_function("parse_state", |b| b.iter(|| parse_state(black_box(&key))));
}

fn bench_table_json(c: &mut Criterion) {
    let table = trained_table();
    let text = table_to_json(&table).unwrap();
    let mut group = c.benchmark_group("table_json");
    group.sample_size(20);
    group.bench_function("serialize", |b| b.iter(|| table_to_json(black_box(&table))));
    group.bench_function("deserialize", |b| b.iter(|| table_from_json(black_box(&text))));
    group.finish();
}

criterion_group!(
    benches,
    bench_evaluate,
    bench_movegen_initial,
    bench_movegen_midgame,
    bench_search_default_depth,
    bench_state_key,
    bench_table_json,
);
criterion_main!(benches);
