//! AT Protocol lexicon model
//!
//! A lexicon is a named, versioned collection of record-type definitions.
//! This crate deserializes lexicon JSON documents, flattens a document's
//! definitions into a single field table, and derives the human-readable
//! type and constraint labels used when fields are displayed.
//!
//! Flattening and labeling are pure functions; documents are immutable
//! once parsed.
//!
//! # Modules
//!
//! - [`document`]: serde model of lexicon documents and field descriptors
//! - [`flatten`]: one flat field table per lexicon
//! - [`label`]: type and constraint labels for display
//! - [`loader`]: lexicon file discovery and parsing

pub mod document;
pub mod flatten;
pub mod label;
mod error;
mod loader;

pub use document::{FieldDescriptor, FieldKind, LexiconDef, LexiconDoc, RecordBody};
pub use error::LexiconError;
pub use flatten::{flatten, FlattenedField};
pub use label::{constraints_label, type_label};
pub use loader::find_lexicons;
