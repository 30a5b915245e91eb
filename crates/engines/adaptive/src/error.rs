//! Error types for move selection.

use std::path::PathBuf;

use chess_core::AdapterError;
use thiserror::Error;

/// Errors returned by [`AdaptiveEngine`](crate::AdaptiveEngine).
#[derive(Error, Debug)]
pub enum EngineError {
    /// Move selection was asked for on a position with no legal moves.
    #[error("no legal moves in position")]
    NoLegalMoves,

    /// The rules engine failed to apply or take back a move. The position
    /// may be left inconsistent.
    #[error("rules engine failure: {0}")]
    Adapter(#[from] AdapterError),

    /// A configuration value is out of range.
    #[error("invalid engine config: {0}")]
    Config(String),

    #[error("failed to read config {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
