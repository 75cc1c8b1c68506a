//! Arbiter Engine - Condition evaluation and priority ranking
//!
//! Given a validated rule set and a fact mapping, determines which rules
//! match, ranks them by priority, and returns the governing action together
//! with the full ranked match list for audit.

pub mod engine;
pub mod error;
pub mod evaluator;
pub mod outcome;

// Re-export main types
pub use engine::RuleEngine;
pub use error::{EngineError, Result};
pub use evaluator::{evaluate_condition, EvalMode};
pub use outcome::{Outcome, FALLBACK_DECISION, FALLBACK_REASON};

// Re-export commonly used types from the core crate
pub use arbiter_core::{Condition, Facts, Operator, Rule, RuleSet, Value};
