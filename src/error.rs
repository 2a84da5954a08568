use thiserror::Error;

use crate::chess::moves::Move;

/// Errors surfaced to callers that hand the engine unchecked input.
///
/// Rule queries themselves never fail; these only come from parsing, layout construction and
/// matching a request against the legal moves.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Coordinate notation could not be read.
    #[error("cannot parse move {input:?}: {reason}")]
    ParseMove { input: String, reason: &'static str },

    /// A well-formed move request matched no legal move.
    #[error("illegal move {mv:?}")]
    IllegalMove { mv: Move },

    /// A checked square constructor got an out-of-range coordinate.
    #[error("square ({row}, {col}) is off the board")]
    OffBoard { row: i32, col: i32 },

    /// A textual board layout was malformed.
    #[error("invalid board layout at row {row}: {reason}")]
    InvalidLayout { row: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, ChessError>;
