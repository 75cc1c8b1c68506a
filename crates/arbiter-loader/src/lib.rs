//! Arbiter Loader - Rule document loading and validation
//!
//! Rule collections have two lifecycle stages: an untrusted document (JSON
//! or YAML text) and a validated in-memory [`RuleSet`]. This crate is the
//! one-way step between them. Shape violations reject the whole document
//! with a typed [`LoadError`]; nothing unvalidated ever reaches the engine.

pub mod defaults;
pub mod document;
pub mod error;

// Re-export main entry points
pub use defaults::default_rules;
pub use document::{load_or_default, parse_json_str, parse_yaml_str, validate_document};
pub use error::{LoadError, Result};

// Re-export the validated types callers receive
pub use arbiter_core::{Rule, RuleSet};
