//! Error types for vocabulary loading

use std::io;
use thiserror::Error;

/// Vocabulary catalog error type
#[derive(Error, Debug)]
pub enum VocabError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
