//! Error types for rules-engine operations.

use thiserror::Error;

/// Errors raised by a [`RulesAdapter`](crate::RulesAdapter).
///
/// Any of these surfacing mid-search means the apply/undo stack can no longer
/// be trusted; callers treat them as fatal for the current decision.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdapterError {
    /// A move that is not legal in the current position was applied.
    #[error("illegal move {notation} in current position")]
    IllegalMove { notation: String },

    /// `undo` was called with no applied move left to take back.
    #[error("undo called with an empty move stack")]
    EmptyUndoStack,

    /// FEN text could not be turned into a position.
    #[error("invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },

    /// Coordinate text did not match any legal move.
    #[error("no legal move matches '{text}'")]
    UnknownMove { text: String },
}
