//! String keys of the persisted Q-table.
//!
//! A state is written as its 64 cell codes in row-major order, each followed
//! by a comma, so splitting on `,` yields 65 tokens with the last one empty:
//!
//! `0,2,0,2,0,2,0,2,2,0,...,1,0,`
//!
//! A move is written as `from_row,from_col,to_row,to_col`.

use std::fmt::Write as _;

use crate::board::{Board, Cell, Move, Square, BOARD_SIZE};

const N: usize = BOARD_SIZE as usize;

/// Number of tokens in a state key, including the empty trailing one.
pub const STATE_TOKENS: usize = N * N + 1;

/// Number of tokens in a move key.
pub const MOVE_TOKENS: usize = 4;

/// Errors that can occur while parsing a state or move key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("invalid state string: expected 65 tokens, got {0}")]
    StateTokenCount(usize),

    #[error("invalid move string: expected 4 tokens, got {0}")]
    MoveTokenCount(usize),

    #[error("invalid state string: expected a trailing ',', found '{0}'")]
    MissingTrailingSeparator(String),

    #[error("invalid integer value '{0}'")]
    NotAnInteger(String),

    #[error("integer '{0}' is not written in canonical form")]
    NonCanonicalInteger(String),

    #[error("invalid cell code {0}")]
    InvalidCellCode(i64),

    #[error("move coordinate {0} is off the board")]
    CoordinateOffBoard(i64),
}

/// Parses a token, accepting only the form `encode_*` writes (no sign, no
/// leading zeros), so distinct keys never decode to the same value.
fn parse_int(token: &str) -> Result<i64, FormatError> {
    let value = token
        .parse::<i64>()
        .map_err(|_| FormatError::NotAnInteger(token.to_string()))?;
    if value.to_string() != token {
        return Err(FormatError::NonCanonicalInteger(token.to_string()));
    }
    Ok(value)
}

/// Encodes a board as a state key.
pub fn encode_state(board: &Board) -> String {
    let mut out = String::with_capacity(2 * N * N);
    for cell in board.cells() {
        // Writing into a String cannot fail.
        let _ = write!(out, "{},", cell.code());
    }
    out
}

/// Parses a state key back into a board.
pub fn parse_state(s: &str) -> Result<Board, FormatError> {
    let tokens: Vec<&str> = s.split(',').collect();
    if tokens.len() != STATE_TOKENS {
        return Err(FormatError::StateTokenCount(tokens.len()));
    }
    let trailing = tokens[N * N];
    if !trailing.is_empty() {
        return Err(FormatError::MissingTrailingSeparator(trailing.to_string()));
    }

    let mut cells = [[Cell::Unplayable; N]; N];
    for (i, token) in tokens[..N * N].iter().enumerate() {
        let code = parse_int(token)?;
        cells[i / N][i % N] = Cell::from_code(code).ok_or(FormatError::InvalidCellCode(code))?;
    }
    Ok(Board::from_cells(cells))
}

/// Encodes a move as a move key.
pub fn encode_move(mv: Move) -> String {
    format!("{},{},{},{}", mv.from.row(), mv.from.col(), mv.to.row(), mv.to.col())
}

/// Parses a move key.
pub fn parse_move(s: &str) -> Result<Move, FormatError> {
    let tokens: Vec<&str> = s.split(',').collect();
    if tokens.len() != MOVE_TOKENS {
        return Err(FormatError::MoveTokenCount(tokens.len()));
    }

    let mut coords = [0i64; MOVE_TOKENS];
    for (slot, token) in coords.iter_mut().zip(&tokens) {
        *slot = parse_int(token)?;
    }
    let square = |row: i64, col: i64| -> Result<Square, FormatError> {
        let row_i32 = i32::try_from(row).map_err(|_| FormatError::CoordinateOffBoard(row))?;
        let col_i32 = i32::try_from(col).map_err(|_| FormatError::CoordinateOffBoard(col))?;
        Square::new(row_i32, col_i32).ok_or_else(|| {
            let bad = if (0..N as i64).contains(&row) { col } else { row };
            FormatError::CoordinateOffBoard(bad)
        })
    };

    Ok(Move::new(square(coords[0], coords[1])?, square(coords[2], coords[3])?))
}
