//! Search and planning.
//!
//! Explores the game tree to a fixed depth to pick strong moves for the
//! search-driven side.

pub mod alphabeta;

pub use alphabeta::{alpha_beta, search, search_continuation, SearchAgent, SearchResult, DEFAULT_DEPTH};
