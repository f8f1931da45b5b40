//! Loading and saving the Q-table as JSON.
//!
//! The file holds a single JSON object mapping state keys to objects that
//! map move keys to numbers (see [`super::keys`] for the key formats).
//! Loading is all-or-nothing: any malformed key aborts with an error and no
//! partially populated table is returned.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::learn::QTable;

use super::keys::{encode_move, encode_state, parse_move, parse_state, FormatError};

/// File name used when none is configured.
pub const DEFAULT_TABLE_PATH: &str = "qtable.json";

/// The on-disk shape: state key -> move key -> value.
type JsonTable = BTreeMap<String, BTreeMap<String, f64>>;

/// Errors that can occur while loading or saving a Q-table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("failed to access Q-table file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed Q-table JSON: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode Q-table: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("malformed Q-table entry: {0}")]
    Format(#[from] FormatError),
}

impl TableError {
    /// True when the table file simply does not exist yet.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TableError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Converts a table into its JSON text.
pub fn table_to_json(table: &QTable) -> Result<String, TableError> {
    let json: JsonTable = table
        .iter()
        .map(|(state, moves)| {
            let moves = moves.iter().map(|(&mv, &v)| (encode_move(mv), v)).collect();
            (encode_state(state), moves)
        })
        .collect();
    serde_json::to_string_pretty(&json).map_err(TableError::Encode)
}

/// Parses JSON text into a table.
pub fn table_from_json(text: &str) -> Result<QTable, TableError> {
    let json: JsonTable = serde_json::from_str(text).map_err(TableError::Decode)?;

    let mut table = QTable::new();
    for (state_key, moves) in &json {
        let state = parse_state(state_key)?;
        let entry = table.state_entry(&state);
        for (move_key, &value) in moves {
            entry.insert(parse_move(move_key)?, value);
        }
    }
    Ok(table)
}

/// Loads a table from `path`.
pub fn load_table(path: &Path) -> Result<QTable, TableError> {
    let text = fs::read_to_string(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = table_from_json(&text)?;
    info!(path = %path.display(), states = table.len(), entries = table.entry_count(), "loaded Q-table");
    Ok(table)
}

/// Loads a table from `path`, starting empty if the file does not exist.
///
/// Every other failure, including a corrupt file, is returned to the caller.
pub fn load_or_cold_start(path: &Path) -> Result<QTable, TableError> {
    match load_table(path) {
        Ok(table) => Ok(table),
        Err(e) if e.is_not_found() => {
            warn!(path = %path.display(), "no Q-table found, starting from an empty table");
            Ok(QTable::new())
        }
        Err(e) => Err(e),
    }
}

/// Writes `table` to `path`, replacing any existing file.
pub fn save_table(path: &Path, table: &QTable) -> Result<(), TableError> {
    let mut text = table_to_json(table)?;
    text.push('\n');
    fs::write(path, text).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), states = table.len(), entries = table.entry_count(), "saved Q-table");
    Ok(())
}
