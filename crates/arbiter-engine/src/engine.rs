//! Rule matching, ranking and fallback
//!
//! The engine is a pure function of its two inputs: identical facts and
//! rules always produce an identical outcome. It holds no state beyond the
//! evaluation mode, so one engine may serve any number of concurrent
//! evaluations.

use crate::error::Result;
use crate::evaluator::{evaluate_condition, EvalMode};
use crate::outcome::Outcome;
use arbiter_core::{Facts, Rule, RuleSet};

/// Priority-ranked rule engine
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleEngine {
    mode: EvalMode,
}

impl RuleEngine {
    /// Create an engine with the default lenient evaluation mode
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with the given evaluation mode
    pub fn with_mode(mode: EvalMode) -> Self {
        RuleEngine { mode }
    }

    /// The engine's evaluation mode
    pub fn mode(&self) -> EvalMode {
        self.mode
    }

    /// Evaluate a rule set against a fact mapping.
    ///
    /// Matched rules are ranked by priority descending; equal priorities
    /// keep their input order (stable sort), which fixes the governing rule
    /// deterministically when several top-priority rules match. When nothing
    /// matches the outcome is [`Outcome::fallback`].
    ///
    /// In lenient mode this never errors; in strict mode a type-mismatched
    /// condition aborts the whole evaluation.
    pub fn run(&self, facts: &Facts, rules: &RuleSet) -> Result<Outcome> {
        let mut matched: Vec<Rule> = Vec::new();
        for rule in rules {
            if self.rule_matches(facts, rule)? {
                tracing::debug!(rule = %rule.name, priority = rule.priority, "rule matched");
                matched.push(rule.clone());
            }
        }

        if matched.is_empty() {
            tracing::debug!("no rule matched, returning fallback outcome");
            return Ok(Outcome::fallback());
        }

        // Stable: input order breaks ties among equal priorities
        matched.sort_by(|a, b| b.priority.cmp(&a.priority));

        Ok(Outcome {
            action: matched[0].action.clone(),
            matched,
        })
    }

    /// A rule matches iff every condition holds; short-circuits on the
    /// first condition that does not. Empty conditions match vacuously.
    fn rule_matches(&self, facts: &Facts, rule: &Rule) -> Result<bool> {
        for condition in &rule.conditions {
            if !evaluate_condition(facts, condition, self.mode)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
