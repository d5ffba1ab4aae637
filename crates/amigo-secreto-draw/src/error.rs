//! Error types for the draw generator.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`DrawError`].
pub type Result<T> = std::result::Result<T, DrawError>;

#[derive(Error, Debug)]
pub enum DrawError {
    /// A cycle needs at least a giver and a receiver.
    #[error("at least 2 participants are required, got {count}")]
    NotEnoughParticipants { count: usize },

    /// No valid assignment was found within the attempt budget.
    #[error("no valid assignment found after {attempts} attempts; the restrictions look impossible to satisfy")]
    AttemptsExhausted { attempts: u32 },

    /// Every code of the configured length is already taken.
    #[error("no unique access codes left ({used} of length {length} in use)")]
    CodesExhausted { used: usize, length: usize },

    #[error("code length must be at least 1")]
    InvalidCodeLength,

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
