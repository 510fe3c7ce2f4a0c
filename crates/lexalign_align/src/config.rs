//! Static alignment tables
//!
//! The rename table, infrastructure exclusion set, GBIF priority overlays,
//! and class profiles are configuration, not derived data. The built-in
//! defaults cover the shipped bio lexicons; a TOML file can replace any
//! table for other lexicon families.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Error type for config operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// GBIF publishing priority of a term. Annotation only: priority never
/// changes whether a term is matched or missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Required for GBIF publication
    Required,
    /// Recommended for GBIF publication
    Recommended,
    /// No publishing requirement
    None,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "gbif req",
            Self::Recommended => "gbif rec",
            Self::None => "",
        }
    }
}

/// The static tables driving classification and coverage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignmentConfig {
    /// Field name -> DwC term name, for fields whose names differ from
    /// their term. Absent entries mean identity.
    #[serde(default = "default_renames")]
    pub renames: BTreeMap<String, String>,

    /// AT Protocol infrastructure fields: never mapped, never extensions,
    /// never counted.
    #[serde(default = "default_infrastructure")]
    pub infrastructure: BTreeSet<String>,

    /// Terms GBIF requires for publication
    #[serde(default = "default_gbif_required")]
    pub gbif_required: BTreeSet<String>,

    /// Terms GBIF recommends for publication
    #[serde(default = "default_gbif_recommended")]
    pub gbif_recommended: BTreeSet<String>,

    /// DwC classes counted in global coverage denominators
    #[serde(default = "default_relevant_classes")]
    pub relevant_classes: BTreeSet<String>,

    /// Per-lexicon class profiles, keyed by a substring of the lexicon id
    /// (e.g. `occurrence` -> the classes that lexicon is measured against)
    #[serde(default = "default_lexicon_classes")]
    pub lexicon_classes: BTreeMap<String, Vec<String>>,
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            renames: default_renames(),
            infrastructure: default_infrastructure(),
            gbif_required: default_gbif_required(),
            gbif_recommended: default_gbif_recommended(),
            relevant_classes: default_relevant_classes(),
            lexicon_classes: default_lexicon_classes(),
        }
    }
}

impl AlignmentConfig {
    /// Load tables from a TOML file. Tables absent from the file keep
    /// their built-in defaults.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&contents)?)
    }

    /// Resolve the DwC term name a field is matched under.
    pub fn term_for_field<'a>(&'a self, field_name: &'a str) -> &'a str {
        self.renames
            .get(field_name)
            .map(String::as_str)
            .unwrap_or(field_name)
    }

    /// Whether a field is protocol infrastructure.
    pub fn is_infrastructure(&self, field_name: &str) -> bool {
        self.infrastructure.contains(field_name)
    }

    /// GBIF publishing priority of a term.
    pub fn priority_of(&self, term_name: &str) -> Priority {
        if self.gbif_required.contains(term_name) {
            Priority::Required
        } else if self.gbif_recommended.contains(term_name) {
            Priority::Recommended
        } else {
            Priority::None
        }
    }

    /// The DwC classes a lexicon is measured against: the first profile
    /// whose key occurs in the lexicon id, else the relevant-class set.
    pub fn classes_for_lexicon(&self, lexicon_id: &str) -> Vec<String> {
        for (key, classes) in &self.lexicon_classes {
            if lexicon_id.contains(key.as_str()) {
                return classes.clone();
            }
        }
        self.relevant_classes.iter().cloned().collect()
    }
}

fn default_renames() -> BTreeMap<String, String> {
    [
        ("notes", "occurrenceRemarks"),
        ("comment", "identificationRemarks"),
        ("blobs", "associatedMedia"),
        ("createdAt", "dateIdentified"),
    ]
    .into_iter()
    .map(|(field, term)| (field.to_string(), term.to_string()))
    .collect()
}

fn default_infrastructure() -> BTreeSet<String> {
    [
        "subject",
        "subjectIndex",
        "isAgreement",
        "confidence",
        "taxonId",
        "taxon",
        "location",
        "image",
        "alt",
        "aspectRatio",
        "width",
        "height",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

fn default_gbif_required() -> BTreeSet<String> {
    ["occurrenceID", "basisOfRecord", "scientificName", "eventDate"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn default_gbif_recommended() -> BTreeSet<String> {
    [
        "taxonRank",
        "kingdom",
        "decimalLatitude",
        "decimalLongitude",
        "geodeticDatum",
        "countryCode",
        "individualCount",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

fn default_relevant_classes() -> BTreeSet<String> {
    [
        "Occurrence",
        "Event",
        "Location",
        "Taxon",
        "Identification",
        "Organism",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

fn default_lexicon_classes() -> BTreeMap<String, Vec<String>> {
    let mut profiles = BTreeMap::new();
    profiles.insert(
        "occurrence".to_string(),
        ["Occurrence", "Event", "Location", "Record-level"]
            .into_iter()
            .map(str::to_string)
            .collect(),
    );
    profiles.insert(
        "identification".to_string(),
        ["Identification", "Taxon"]
            .into_iter()
            .map(str::to_string)
            .collect(),
    );
    profiles
}
