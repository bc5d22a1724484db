//! Error types for the letters game
//!
//! "Not found" situations (looking up or erasing an absent word) are reported
//! as `false` by the dictionary, not as errors. Only contract violations and
//! input problems end up here.

use std::io;
use std::path::PathBuf;

/// Errors raised by the letters game engine and its loaders
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("cannot extract from an empty collection")]
    EmptyCollection,

    #[error("requested {requested} letters but only {available} remain in the bag")]
    InvalidLetterCount { requested: usize, available: usize },

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, GameError>;
