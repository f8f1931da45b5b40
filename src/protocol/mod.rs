//! Q-table persistence.
//!
//! Encodes boards and moves as the string keys of the persisted table and
//! reads/writes the table as a JSON file.

pub mod keys;
pub mod persist;

pub use keys::{encode_move, encode_state, parse_move, parse_state, FormatError};
pub use persist::{
    load_or_cold_start, load_table, save_table, table_from_json, table_to_json, TableError,
    DEFAULT_TABLE_PATH,
};
