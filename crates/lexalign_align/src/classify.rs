//! Field-by-field classification against the term catalog
//!
//! Every non-infrastructure field resolves a term name through the rename
//! table and lands in exactly one bucket: matched (the catalog has that
//! term) or extension (it does not). Infrastructure fields are invisible
//! to matching entirely. Catalog terms with no matching field are missing.

use crate::config::AlignmentConfig;
use lexalign_lexicon::document::FieldDescriptor;
use lexalign_lexicon::flatten::FlattenedField;
use lexalign_vocab::Vocabulary;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::warn;

/// A lexicon field matched to a DwC term.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchedField {
    /// The lexicon field name (may differ from the term name via rename)
    pub field_name: String,
    /// The field's descriptor, for display alongside the term
    pub descriptor: FieldDescriptor,
    /// Whether the owning definition requires the field
    pub required: bool,
}

/// A lexicon field with no corresponding DwC term.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtensionField {
    pub field_name: String,
    pub descriptor: FieldDescriptor,
}

/// Result of classifying one lexicon's flattened fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Classification {
    matched: BTreeMap<String, MatchedField>,
    extensions: Vec<ExtensionField>,
}

impl Classification {
    /// The field matched to a term, if any. `None` means the term is
    /// missing from this lexicon.
    pub fn match_for_term(&self, term_name: &str) -> Option<&MatchedField> {
        self.matched.get(term_name)
    }

    /// Whether a term has a matching field.
    pub fn is_matched(&self, term_name: &str) -> bool {
        self.matched.contains_key(term_name)
    }

    /// Matched (term name, field) pairs in term-name order.
    pub fn matched(&self) -> impl Iterator<Item = (&str, &MatchedField)> {
        self.matched.iter().map(|(term, field)| (term.as_str(), field))
    }

    /// Names of all matched terms.
    pub fn matched_term_names(&self) -> BTreeSet<String> {
        self.matched.keys().cloned().collect()
    }

    /// Fields with no corresponding term, in field-name order.
    pub fn extensions(&self) -> &[ExtensionField] {
        &self.extensions
    }

    /// Count of all classified (non-infrastructure) fields.
    pub fn field_count(&self) -> usize {
        self.matched.len() + self.extensions.len()
    }
}

/// Classify a flattened field table against the term catalog.
///
/// Infrastructure fields are dropped before matching: they are neither
/// matched nor extensions and never reach a coverage denominator. A
/// rename entry pointing at a name the catalog lacks is not a fault; the
/// field simply classifies as an extension.
///
/// The rename table is expected to be injective. If two fields resolve to
/// the same term, the first in name order claims it and later fields fall
/// back to extension status, so no field disappears from the partition.
pub fn classify(
    fields: &BTreeMap<String, FlattenedField>,
    vocabulary: &Vocabulary,
    config: &AlignmentConfig,
) -> Classification {
    let mut result = Classification::default();

    for (field_name, field) in fields {
        if config.is_infrastructure(field_name) {
            continue;
        }

        let term_name = config.term_for_field(field_name);
        if vocabulary.contains(term_name) {
            if let Some(existing) = result.matched.get(term_name) {
                warn!(
                    term = term_name,
                    first = %existing.field_name,
                    second = %field_name,
                    "two fields resolve to one term; keeping the first"
                );
            } else {
                result.matched.insert(
                    term_name.to_string(),
                    MatchedField {
                        field_name: field_name.clone(),
                        descriptor: field.descriptor.clone(),
                        required: field.required,
                    },
                );
                continue;
            }
        }

        result.extensions.push(ExtensionField {
            field_name: field_name.clone(),
            descriptor: field.descriptor.clone(),
        });
    }

    result
}
