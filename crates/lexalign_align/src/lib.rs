//! Darwin Core alignment
//!
//! # Philosophy: classification is policy, not failure
//!
//! The alignment core answers one question: how well do a lexicon's fields
//! line up with the Darwin Core term catalog? Every field is excluded
//! (protocol infrastructure), mapped (a term of the same resolved name
//! exists), or an extension (no such term). Every term is matched or
//! missing. None of these outcomes is an error — absence is an answer.
//!
//! All computations are pure functions of their explicit inputs; the
//! static tables (rename overrides, exclusions, GBIF overlays, class
//! profiles) travel in an [`AlignmentConfig`] value rather than living in
//! globals, so the core is trivially testable with alternate tables.
//!
//! # Modules
//!
//! - [`config`]: the static alignment tables, TOML-loadable
//! - [`classify`]: field-by-field classification against the catalog
//! - [`coverage`]: per-class and global coverage statistics

pub mod classify;
pub mod config;
pub mod coverage;

pub use classify::{classify, Classification, ExtensionField, MatchedField};
pub use config::{AlignmentConfig, ConfigError, Priority};
pub use coverage::{coverage, global_coverage, ClassCoverage, CoverageStats};
