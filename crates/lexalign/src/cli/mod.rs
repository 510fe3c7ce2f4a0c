//! CLI commands for lexalign
//!
//! Each command owns its clap `Args` struct and a `run` entry point;
//! shared input loading and table formatting live in [`inputs`] and
//! [`output`].

pub mod coverage;
pub mod fields;
pub mod inputs;
pub mod output;
pub mod report;
