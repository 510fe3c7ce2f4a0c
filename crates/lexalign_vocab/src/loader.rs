//! CSV loader for the TDWG `term_versions.csv` export
//!
//! The export lists every version of every term, newest first. Only the
//! current recommended property terms are useful for alignment, so rows
//! are filtered down before they enter the catalog:
//!
//! - `status` must be `recommended`
//! - class definitions (`rdf_type` containing `Class`) are skipped
//! - IRI-only variants (`organized_in` containing `UseWithIRI`) are skipped
//! - the first surviving row per `term_localName` wins

use crate::error::VocabError;
use crate::types::{extract_class, DwcTerm, Vocabulary};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// One raw row of `term_versions.csv`. Columns not used for alignment are
/// ignored by serde.
#[derive(Debug, Deserialize)]
struct TermRow {
    #[serde(rename = "term_localName")]
    local_name: String,
    #[serde(default)]
    label: String,
    #[serde(default)]
    definition: String,
    #[serde(default)]
    term_iri: String,
    #[serde(default)]
    rdf_type: String,
    #[serde(default)]
    organized_in: String,
    #[serde(default)]
    status: String,
}

impl TermRow {
    fn is_recommended_property(&self) -> bool {
        self.status == "recommended"
            && !self.rdf_type.contains("Class")
            && !self.organized_in.contains("UseWithIRI")
    }

    fn into_term(self) -> DwcTerm {
        let class = extract_class(&self.organized_in);
        DwcTerm {
            name: self.local_name,
            label: self.label,
            class,
            term_iri: self.term_iri,
            definition: self.definition,
        }
    }
}

impl Vocabulary {
    /// Load the catalog from a `term_versions.csv` file.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, VocabError> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_csv_reader(file)
    }

    /// Load the catalog from any CSV reader with a `term_versions.csv`
    /// header row.
    pub fn from_csv_reader(reader: impl Read) -> Result<Self, VocabError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let mut terms = Vec::new();
        for row in csv_reader.deserialize::<TermRow>() {
            let row = row?;
            if row.is_recommended_property() {
                terms.push(row.into_term());
            }
        }

        let vocab = Vocabulary::from_terms(terms);
        debug!(terms = vocab.len(), "loaded DwC term catalog");
        Ok(vocab)
    }
}
