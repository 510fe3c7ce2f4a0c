//! Coverage statistics over the term catalog
//!
//! Coverage counts how many catalog terms in a set of classes have a
//! matching field, per class and in total. The global variant unions the
//! matched terms of several lexicons first, so a term mapped by any one
//! lexicon counts once. Everything is recomputed in full on every call;
//! inputs are small and static, so correctness wins over caching.

use crate::classify::Classification;
use lexalign_vocab::Vocabulary;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Mapped/total counts for one DwC class.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassCoverage {
    pub mapped: usize,
    pub total: usize,
}

/// Coverage of the catalog terms in a set of classes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoverageStats {
    /// Breakdown per class, keyed by class name
    pub per_class: BTreeMap<String, ClassCoverage>,
    /// Terms in the class set with a matching field
    pub mapped: usize,
    /// Terms in the class set without one
    pub missing: usize,
    /// All terms in the class set
    pub total: usize,
    /// `100 * mapped / total`; defined as 0 when `total` is 0
    pub pct: f64,
    /// Non-infrastructure fields across the contributing lexicons
    pub total_fields: usize,
}

/// Coverage of one lexicon's classification over the given classes.
pub fn coverage(
    vocabulary: &Vocabulary,
    classification: &Classification,
    classes: &[String],
) -> CoverageStats {
    compute(
        vocabulary,
        &classification.matched_term_names(),
        classes,
        classification.field_count(),
    )
}

/// Coverage across several lexicons at once.
///
/// Matched-term sets are unioned before counting, so global `mapped` is
/// at least the `mapped` of any single contributing classification.
pub fn global_coverage(
    vocabulary: &Vocabulary,
    classifications: &[&Classification],
    classes: &[String],
) -> CoverageStats {
    let mut matched_names = BTreeSet::new();
    let mut total_fields = 0;
    for classification in classifications {
        matched_names.extend(classification.matched_term_names());
        total_fields += classification.field_count();
    }
    compute(vocabulary, &matched_names, classes, total_fields)
}

fn compute(
    vocabulary: &Vocabulary,
    matched_names: &BTreeSet<String>,
    classes: &[String],
    total_fields: usize,
) -> CoverageStats {
    let class_set: BTreeSet<&str> = classes.iter().map(String::as_str).collect();

    let mut per_class: BTreeMap<String, ClassCoverage> = classes
        .iter()
        .map(|class| (class.clone(), ClassCoverage::default()))
        .collect();
    let mut mapped = 0;
    let mut total = 0;

    for term in vocabulary.terms() {
        if !class_set.contains(term.class.as_str()) {
            continue;
        }
        total += 1;
        let class_entry = per_class.entry(term.class.clone()).or_default();
        class_entry.total += 1;
        if matched_names.contains(&term.name) {
            mapped += 1;
            class_entry.mapped += 1;
        }
    }

    let pct = if total == 0 {
        0.0
    } else {
        100.0 * mapped as f64 / total as f64
    };

    CoverageStats {
        per_class,
        mapped,
        missing: total - mapped,
        total,
        pct,
        total_fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::config::AlignmentConfig;
    use lexalign_lexicon::document::LexiconDoc;
    use lexalign_lexicon::flatten;
    use lexalign_vocab::DwcTerm;

    fn term(name: &str, class: &str) -> DwcTerm {
        DwcTerm {
            name: name.to_string(),
            label: name.to_string(),
            class: class.to_string(),
            term_iri: format!("http://rs.tdwg.org/dwc/terms/{}", name),
            definition: String::new(),
        }
    }

    fn classify_doc(json: &str, vocabulary: &Vocabulary) -> Classification {
        let doc: LexiconDoc = serde_json::from_str(json).unwrap();
        classify(&flatten(&doc), vocabulary, &AlignmentConfig::default())
    }

    fn classes(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_coverage_is_100_pct() {
        let vocab = Vocabulary::from_terms([
            term("eventDate", "Occurrence"),
            term("decimalLatitude", "Occurrence"),
            term("decimalLongitude", "Occurrence"),
        ]);
        let classification = classify_doc(
            r#"{
                "lexicon": 1,
                "id": "bio.lexicons.occurrence",
                "defs": {
                    "main": {
                        "type": "object",
                        "properties": {
                            "eventDate": {"type": "string"},
                            "decimalLatitude": {"type": "string"},
                            "decimalLongitude": {"type": "string"}
                        }
                    }
                }
            }"#,
            &vocab,
        );

        let stats = coverage(&vocab, &classification, &classes(&["Occurrence"]));
        assert_eq!(stats.mapped, 3);
        assert_eq!(stats.missing, 0);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.pct, 100.0);
        assert_eq!(stats.per_class["Occurrence"], ClassCoverage { mapped: 3, total: 3 });
    }

    #[test]
    fn test_extension_fields_do_not_affect_percentages() {
        let vocab = Vocabulary::from_terms([term("eventDate", "Event")]);
        let classification = classify_doc(
            r#"{
                "lexicon": 1,
                "id": "bio.lexicons.occurrence",
                "defs": {
                    "main": {
                        "type": "object",
                        "properties": {
                            "eventDate": {"type": "string"},
                            "caste": {"type": "string"}
                        }
                    }
                }
            }"#,
            &vocab,
        );

        let stats = coverage(&vocab, &classification, &classes(&["Event"]));
        assert_eq!(stats.mapped, 1);
        assert_eq!(stats.total, 1);
        assert_eq!(stats.pct, 100.0);
        // The extension still counts as a field, just not as coverage.
        assert_eq!(stats.total_fields, 2);
    }

    #[test]
    fn test_empty_class_set_yields_zero_not_a_fault() {
        let vocab = Vocabulary::from_terms([term("eventDate", "Event")]);
        let classification = Classification::default();

        let stats = coverage(&vocab, &classification, &classes(&["Taxon"]));
        assert_eq!(stats.total, 0);
        assert_eq!(stats.pct, 0.0);
        assert_eq!(stats.per_class["Taxon"], ClassCoverage::default());
    }

    #[test]
    fn test_pct_stays_within_bounds() {
        let vocab = Vocabulary::from_terms([
            term("eventDate", "Event"),
            term("eventRemarks", "Event"),
            term("habitat", "Event"),
        ]);
        let classification = classify_doc(
            r#"{
                "lexicon": 1,
                "id": "bio.lexicons.occurrence",
                "defs": {
                    "main": {
                        "type": "object",
                        "properties": {"eventDate": {"type": "string"}}
                    }
                }
            }"#,
            &vocab,
        );

        let stats = coverage(&vocab, &classification, &classes(&["Event"]));
        assert!(stats.pct >= 0.0 && stats.pct <= 100.0);
        assert_eq!(stats.mapped, 1);
        assert_eq!(stats.missing, 2);
    }

    #[test]
    fn test_global_coverage_unions_matched_terms() {
        let vocab = Vocabulary::from_terms([
            term("eventDate", "Event"),
            term("scientificName", "Taxon"),
        ]);

        let occurrence = classify_doc(
            r#"{
                "lexicon": 1,
                "id": "bio.lexicons.occurrence",
                "defs": {
                    "main": {
                        "type": "object",
                        "properties": {"eventDate": {"type": "string"}}
                    }
                }
            }"#,
            &vocab,
        );
        let identification = classify_doc(
            r#"{
                "lexicon": 1,
                "id": "bio.lexicons.identification",
                "defs": {
                    "main": {
                        "type": "object",
                        "properties": {
                            "eventDate": {"type": "string"},
                            "scientificName": {"type": "string"}
                        }
                    }
                }
            }"#,
            &vocab,
        );

        let class_list = classes(&["Event", "Taxon"]);
        let global = global_coverage(&vocab, &[&occurrence, &identification], &class_list);

        // eventDate counts once despite being mapped by both lexicons.
        assert_eq!(global.mapped, 2);
        assert_eq!(global.total, 2);
        assert_eq!(global.total_fields, 3);

        // Global mapped is never below any single contribution.
        for single in [&occurrence, &identification] {
            let stats = coverage(&vocab, single, &class_list);
            assert!(global.mapped >= stats.mapped);
        }
    }
}
