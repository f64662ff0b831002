//! Error types.
//!
//! Nothing in the round loop is fatal. These errors only surface at the
//! input boundary (`GameError`) and from storage backends (`StoreError`),
//! where callers log them and fall back to a safe default.

use std::path::PathBuf;

/// Rejected input at the presentation boundary.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("player name must not be empty")]
    EmptyName,

    #[error("unknown choice: {0:?}")]
    UnknownChoice(String),
}

/// Failure reading or writing a persisted leaderboard.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("leaderboard i/o failed at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("leaderboard encoding failed")]
    Encode(#[from] serde_json::Error),
}
