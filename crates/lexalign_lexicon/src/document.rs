//! Serde model of AT Protocol lexicon documents
//!
//! Mirrors the lexicon JSON wire shape: a document carries an id and a map
//! of definitions; each definition either holds its property map directly
//! (object shapes) or one level down under `record` (record types).
//!
//! Field descriptors are a closed sum over the primitive kinds that occur
//! in published lexicons. `knownValues` is an open set of suggestions, not
//! an enum: values outside the list are valid and must never be rejected
//! by anything built on top of this model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A lexicon document: a named, versioned collection of definitions.
///
/// Identity is the `id` (e.g. `bio.lexicons.occurrence`). Immutable once
/// parsed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexiconDoc {
    /// Lexicon schema language version (currently always 1)
    pub lexicon: u32,
    /// NSID of this lexicon, e.g. `bio.lexicons.occurrence`
    pub id: String,
    /// Definitions by name; `main` is the primary record type
    #[serde(default)]
    pub defs: BTreeMap<String, LexiconDef>,
}

/// One definition within a lexicon: a record type or a reusable sub-shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LexiconDef {
    /// Definition kind tag from the document (`record`, `object`, ...)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub def_type: Option<String>,

    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Names of required fields (direct shape)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    /// Property map (direct shape)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, FieldDescriptor>,

    /// Nested record body (record types keep their properties here)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<RecordBody>,
}

/// The nested body of a record-type definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecordBody {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub body_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, FieldDescriptor>,
}

impl LexiconDef {
    /// Effective property map and required set for this definition.
    ///
    /// Exactly one shape supplies the fields: the direct `properties` map,
    /// or, when that is empty, the nested record's. Never both merged.
    pub fn effective_properties(&self) -> (&BTreeMap<String, FieldDescriptor>, &[String]) {
        if !self.properties.is_empty() {
            return (&self.properties, &self.required);
        }
        match &self.record {
            Some(record) => (&record.properties, &record.required),
            None => (&self.properties, &self.required),
        }
    }

    /// Description of the definition, falling back to the record body's.
    pub fn effective_description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .or_else(|| self.record.as_ref()?.description.as_deref())
    }
}

/// Type and constraint metadata for one property of a definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldDescriptor {
    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The primitive kind and its constraints
    #[serde(flatten)]
    pub kind: FieldKind,
}

/// The closed set of primitive kinds occurring in lexicon documents.
///
/// Tagged by the document's `type` field. Exhaustive matching downstream
/// keeps unrecognized kinds from falling through silently.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FieldKind {
    String {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        format: Option<String>,
        #[serde(rename = "maxLength", default, skip_serializing_if = "Option::is_none")]
        max_length: Option<u64>,
        /// Open, non-exhaustive set of suggested values
        #[serde(rename = "knownValues", default, skip_serializing_if = "Option::is_none")]
        known_values: Option<Vec<String>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<serde_json::Value>,
    },
    Integer {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        minimum: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        maximum: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<serde_json::Value>,
    },
    Boolean {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<serde_json::Value>,
    },
    Blob {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        accept: Option<Vec<String>>,
        #[serde(rename = "maxSize", default, skip_serializing_if = "Option::is_none")]
        max_size: Option<u64>,
    },
    Ref {
        /// Local (`#name`) or cross-lexicon (`ns.id#name`) target
        #[serde(rename = "ref")]
        target: String,
    },
    Array {
        /// Inner descriptor; one level of nesting only
        #[serde(default, skip_serializing_if = "Option::is_none")]
        items: Option<Box<FieldDescriptor>>,
        #[serde(rename = "maxLength", default, skip_serializing_if = "Option::is_none")]
        max_length: Option<u64>,
    },
    Bytes {
        #[serde(rename = "maxLength", default, skip_serializing_if = "Option::is_none")]
        max_length: Option<u64>,
    },
    CidLink,
    Unknown,
}

impl FieldKind {
    /// Primitive kind name as written in lexicon documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String { .. } => "string",
            Self::Integer { .. } => "integer",
            Self::Boolean { .. } => "boolean",
            Self::Blob { .. } => "blob",
            Self::Ref { .. } => "ref",
            Self::Array { .. } => "array",
            Self::Bytes { .. } => "bytes",
            Self::CidLink => "cid-link",
            Self::Unknown => "unknown",
        }
    }

    /// Declared `maxLength`, for kinds that carry one.
    pub fn max_length(&self) -> Option<u64> {
        match self {
            Self::String { max_length, .. }
            | Self::Array { max_length, .. }
            | Self::Bytes { max_length } => *max_length,
            _ => None,
        }
    }

    /// Declared `minimum` bound.
    pub fn minimum(&self) -> Option<i64> {
        match self {
            Self::Integer { minimum, .. } => *minimum,
            _ => None,
        }
    }

    /// Declared `maximum` bound.
    pub fn maximum(&self) -> Option<i64> {
        match self {
            Self::Integer { maximum, .. } => *maximum,
            _ => None,
        }
    }

    /// Declared default value.
    pub fn default_value(&self) -> Option<&serde_json::Value> {
        match self {
            Self::String { default, .. }
            | Self::Integer { default, .. }
            | Self::Boolean { default } => default.as_ref(),
            _ => None,
        }
    }

    /// The open set of known values, if declared.
    pub fn known_values(&self) -> Option<&[String]> {
        match self {
            Self::String { known_values, .. } => known_values.as_deref(),
            _ => None,
        }
    }
}
