//! Flattening a lexicon's definitions into one field table
//!
//! Every definition contributes its effective property map; the result is
//! a single name-keyed table carrying each field's descriptor, required
//! flag, and owning definition. Definitions are visited in name order and
//! the last writer wins on a name collision — distinct definitions are not
//! expected to redeclare field names, so a collision silently overwrites
//! rather than erroring.

use crate::document::{FieldDescriptor, LexiconDoc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One field of a flattened lexicon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlattenedField {
    /// The field's type and constraint metadata
    pub descriptor: FieldDescriptor,
    /// Whether the owning definition lists the field as required
    pub required: bool,
    /// Name of the definition the field came from
    pub owning_def: String,
}

/// Flatten a lexicon's definitions into a single field table.
///
/// Pure: depends only on the document. Definitions with no effective
/// properties (empty, or neither shape present) contribute zero fields;
/// that is a valid outcome, not an error.
pub fn flatten(doc: &LexiconDoc) -> BTreeMap<String, FlattenedField> {
    let mut fields = BTreeMap::new();

    for (def_name, def) in &doc.defs {
        let (props, required) = def.effective_properties();
        for (field_name, descriptor) in props {
            fields.insert(
                field_name.clone(),
                FlattenedField {
                    descriptor: descriptor.clone(),
                    required: required.iter().any(|r| r == field_name),
                    owning_def: def_name.clone(),
                },
            );
        }
    }

    fields
}
