//! Core types for the Darwin Core term catalog

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Class assigned to terms whose `organized_in` URI carries no class
/// segment (Dublin Core namespaces and empty values).
pub const RECORD_LEVEL_CLASS: &str = "Record-level";

/// One recommended Darwin Core property term.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DwcTerm {
    /// Local name, e.g. `eventDate` (catalog key)
    pub name: String,
    /// Human-readable label, e.g. "Event Date"
    pub label: String,
    /// Owning DwC class, e.g. `Occurrence`, or `Record-level`
    pub class: String,
    /// Canonical term IRI
    pub term_iri: String,
    /// Normative definition text
    pub definition: String,
}

/// The immutable term catalog, keyed by term local name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vocabulary {
    terms: BTreeMap<String, DwcTerm>,
}

impl Vocabulary {
    /// Build a catalog from already-filtered terms. The first term seen per
    /// name wins; later duplicates are ignored.
    pub fn from_terms(terms: impl IntoIterator<Item = DwcTerm>) -> Self {
        let mut map = BTreeMap::new();
        for term in terms {
            map.entry(term.name.clone()).or_insert(term);
        }
        Self { terms: map }
    }

    /// Look up a term by local name.
    pub fn get(&self, name: &str) -> Option<&DwcTerm> {
        self.terms.get(name)
    }

    /// Whether the catalog contains a term with this local name.
    pub fn contains(&self, name: &str) -> bool {
        self.terms.contains_key(name)
    }

    /// Iterate all terms in name order.
    pub fn terms(&self) -> impl Iterator<Item = &DwcTerm> {
        self.terms.values()
    }

    /// Iterate the terms of one class, in name order.
    pub fn terms_in_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a DwcTerm> {
        self.terms.values().filter(move |t| t.class == class)
    }

    /// Number of terms in the catalog.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Extract the DwC class name from an `organized_in` URI.
///
/// The class is the final path segment, e.g.
/// `http://rs.tdwg.org/dwc/terms/Occurrence` -> `Occurrence`.
/// Dublin Core namespaces end in `1.1` or `terms` and have no class
/// segment; those, and empty URIs, map to [`RECORD_LEVEL_CLASS`].
pub fn extract_class(organized_in: &str) -> String {
    if organized_in.is_empty() {
        return RECORD_LEVEL_CLASS.to_string();
    }
    let last = organized_in
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or("");
    if last.is_empty() || last == "1.1" || last == "terms" {
        return RECORD_LEVEL_CLASS.to_string();
    }
    last.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(name: &str, class: &str) -> DwcTerm {
        DwcTerm {
            name: name.to_string(),
            label: name.to_string(),
            class: class.to_string(),
            term_iri: format!("http://rs.tdwg.org/dwc/terms/{}", name),
            definition: String::new(),
        }
    }

    #[test]
    fn test_extract_class() {
        assert_eq!(
            extract_class("http://rs.tdwg.org/dwc/terms/Occurrence"),
            "Occurrence"
        );
        assert_eq!(
            extract_class("http://rs.tdwg.org/dwc/terms/Location/"),
            "Location"
        );
        assert_eq!(extract_class(""), RECORD_LEVEL_CLASS);
        assert_eq!(
            extract_class("http://purl.org/dc/elements/1.1"),
            RECORD_LEVEL_CLASS
        );
        assert_eq!(
            extract_class("http://purl.org/dc/terms"),
            RECORD_LEVEL_CLASS
        );
    }

    #[test]
    fn test_first_term_per_name_wins() {
        let first = term("eventDate", "Event");
        let mut second = term("eventDate", "Event");
        second.definition = "older version".to_string();

        let vocab = Vocabulary::from_terms([first.clone(), second]);
        assert_eq!(vocab.len(), 1);
        assert_eq!(vocab.get("eventDate"), Some(&first));
    }

    #[test]
    fn test_terms_in_class() {
        let vocab = Vocabulary::from_terms([
            term("eventDate", "Event"),
            term("decimalLatitude", "Location"),
            term("decimalLongitude", "Location"),
        ]);

        let names: Vec<&str> = vocab
            .terms_in_class("Location")
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["decimalLatitude", "decimalLongitude"]);
        assert!(vocab.terms_in_class("Taxon").next().is_none());
    }
}
