//! Evaluation outcome types

use arbiter_core::{Rule, Value};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Decision label of the fallback outcome
pub const FALLBACK_DECISION: &str = "REVIEW";

/// Reason string of the fallback outcome
pub const FALLBACK_REASON: &str = "No rule matched";

/// The result of one evaluation: the governing action and the full ranked
/// list of matched rules, kept for audit and explainability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Action of the highest-ranked matched rule, or the fallback action
    pub action: Value,

    /// All matched rules, priority descending, input order among ties
    pub matched: Vec<Rule>,
}

impl Outcome {
    /// The outcome when no rule matched: a neutral "needs review" decision
    /// with an empty audit list. Never a default accept or reject.
    pub fn fallback() -> Self {
        let mut action = HashMap::new();
        action.insert("decision".to_string(), Value::from(FALLBACK_DECISION));
        action.insert("reason".to_string(), Value::from(FALLBACK_REASON));
        Outcome {
            action: Value::Object(action),
            matched: Vec::new(),
        }
    }

    /// Returns true if this is the no-match fallback
    pub fn is_fallback(&self) -> bool {
        self.matched.is_empty()
    }

    /// Convenience accessor for the conventional `decision` label inside the
    /// action payload. The engine itself never relies on this shape.
    pub fn decision(&self) -> Option<&str> {
        self.action.as_object()?.get("decision")?.as_str()
    }

    /// Convenience accessor for the conventional `reason` string
    pub fn reason(&self) -> Option<&str> {
        self.action.as_object()?.get("reason")?.as_str()
    }
}
