//! The Q-value table.
//!
//! Maps exact board snapshots to per-move value estimates. Entries that were
//! never written read as `0.0`. Per-state maps are ordered so iteration, and
//! therefore greedy tie-breaking, is reproducible.

use std::collections::{BTreeMap, HashMap};

use crate::board::{Board, Move};

/// Value estimates for the moves recorded in one state.
pub type MoveValues = BTreeMap<Move, f64>;

/// State -> move -> value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QTable {
    states: HashMap<Board, MoveValues>,
}

impl QTable {
    pub fn new() -> Self {
        QTable::default()
    }

    /// Number of distinct states recorded.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Total number of (state, move) entries.
    pub fn entry_count(&self) -> usize {
        self.states.values().map(BTreeMap::len).sum()
    }

    /// Reads a value without materializing anything.
    pub fn get(&self, state: &Board, mv: Move) -> Option<f64> {
        self.states.get(state).and_then(|moves| moves.get(&mv)).copied()
    }

    /// Reads a value, inserting the default `0.0` entry on first access.
    pub fn value(&mut self, state: &Board, mv: Move) -> f64 {
        *self.state_entry(state).entry(mv).or_insert(0.0)
    }

    pub fn set(&mut self, state: &Board, mv: Move, value: f64) {
        self.state_entry(state).insert(mv, value);
    }

    /// Returns the recorded moves of `state`, creating an empty map if needed.
    pub fn state_entry(&mut self, state: &Board) -> &mut MoveValues {
        self.states.entry(*state).or_default()
    }

    /// Returns the recorded moves of `state`, if any were ever recorded.
    pub fn moves(&self, state: &Board) -> Option<&MoveValues> {
        self.states.get(state)
    }

    /// Highest recorded value in `state`, or `None` if nothing is recorded.
    pub fn max_value(&self, state: &Board) -> Option<f64> {
        self.states
            .get(state)?
            .values()
            .copied()
            .fold(None, |best, v| match best {
                Some(b) if b > v => Some(b),
                _ => Some(v),
            })
    }

    /// Iterates over every recorded state and its move values.
    pub fn iter(&self) -> impl Iterator<Item = (&Board, &MoveValues)> {
        self.states.iter()
    }
}
