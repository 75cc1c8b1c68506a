//! Arbiter Core - Core types for the Arbiter decision engine
//!
//! This crate provides the fundamental types shared across the Arbiter
//! workspace:
//! - `Value` for runtime facts and opaque action payloads
//! - `Operator`, `Condition`, `Rule` and `RuleSet` for the rule data model
//! - Error types

pub mod condition;
pub mod error;
pub mod operator;
pub mod rule;
pub mod value;

// Re-export commonly used types
pub use condition::Condition;
pub use error::{CoreError, Result};
pub use operator::Operator;
pub use rule::{Rule, RuleSet};
pub use value::{Facts, Value};
