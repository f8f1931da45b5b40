//! Draughtsman engine library.
//!
//! Exposes the board representation, rules engine, alpha-beta search,
//! Q-learning agent, and Q-table persistence for use by integration tests
//! and the training binary.

pub mod agent;
pub mod board;
pub mod engine;
pub mod eval;
pub mod learn;
pub mod movegen;
pub mod protocol;
pub mod resolve;
pub mod search;
pub mod selfplay;
