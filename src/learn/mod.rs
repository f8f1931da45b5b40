//! Tabular Q-learning.
//!
//! The value table, the epsilon-greedy agent built on it, and the reward
//! signal computed from material swings.

pub mod agent;
pub mod reward;
pub mod table;

pub use agent::{LearningParams, QAgent};
pub use reward::evaluate_reward;
pub use table::{MoveValues, QTable};
