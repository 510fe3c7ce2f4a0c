//! Lexicon file discovery and parsing

use crate::document::LexiconDoc;
use crate::error::LexiconError;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

impl LexiconDoc {
    /// Parse a lexicon document from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let doc: LexiconDoc = serde_json::from_str(&contents)?;
        debug!(id = %doc.id, defs = doc.defs.len(), "loaded lexicon");
        Ok(doc)
    }
}

/// Find all `.json` lexicon files under a directory, sorted by path.
pub fn find_lexicons(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, LexiconError> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(dir.as_ref()).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext == "json")
        {
            paths.push(entry.path().to_path_buf());
        }
    }
    paths.sort();
    Ok(paths)
}
