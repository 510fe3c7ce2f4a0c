//! Error types for lexicon loading

use std::io;
use thiserror::Error;

/// Lexicon loading error type
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}
