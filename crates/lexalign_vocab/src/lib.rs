//! Darwin Core term catalog
//!
//! Loads the TDWG `term_versions.csv` export and exposes the recommended
//! property terms as an immutable, name-keyed catalog. Terms belong to a
//! DwC class (`Occurrence`, `Event`, `Location`, ...) derived from the
//! `organized_in` URI; terms with no class segment fall under `Record-level`.
//!
//! The catalog is loaded once at startup and never mutated afterwards.

mod error;
mod loader;
mod types;

pub use error::VocabError;
pub use types::{extract_class, DwcTerm, Vocabulary, RECORD_LEVEL_CLASS};
