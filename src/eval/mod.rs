//! Position evaluation.
//!
//! Scores a board from a given player's perspective by material count.
//! Used as the static evaluation of the search and as the basis of the
//! learning agent's reward.

pub(crate) mod material;

pub use material::{evaluate_material, KING_VALUE, MAN_VALUE};
