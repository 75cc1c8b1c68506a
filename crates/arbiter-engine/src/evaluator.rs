//! Condition evaluation
//!
//! The leaf of the engine: one fact mapping, one condition, a boolean out.
//! Pure and side-effect free; safe to call concurrently.

use crate::error::{EngineError, Result};
use arbiter_core::{Condition, Facts, Operator, Value};
use serde::{Deserialize, Serialize};

/// Evaluation policy for conditions whose operand types do not line up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EvalMode {
    /// A type-incompatible comparison evaluates to false (the condition
    /// simply does not hold). Favors availability: a malformed condition
    /// never aborts evaluation of the whole rule set.
    #[default]
    Lenient,
    /// A type-incompatible comparison is a typed error.
    Strict,
}

/// Evaluate a single condition against a fact mapping
///
/// A field absent from the facts never matches, in either mode: an absent
/// fact is not a type error, it is a rule that does not apply.
pub fn evaluate_condition(facts: &Facts, condition: &Condition, mode: EvalMode) -> Result<bool> {
    let Some(actual) = facts.get(&condition.field) else {
        tracing::debug!(field = %condition.field, "fact absent, condition does not hold");
        return Ok(false);
    };

    match compare(actual, condition.operator, &condition.value) {
        Some(holds) => Ok(holds),
        None => match mode {
            EvalMode::Lenient => {
                tracing::debug!(
                    field = %condition.field,
                    operator = %condition.operator,
                    left = ?actual,
                    right = ?condition.value,
                    "type-incompatible comparison, condition does not hold"
                );
                Ok(false)
            }
            EvalMode::Strict => Err(EngineError::TypeMismatch {
                operator: condition.operator,
                left: actual.clone(),
                right: condition.value.clone(),
            }),
        },
    }
}

/// Apply an operator to (fact value, literal), fact value on the left.
///
/// Returns `None` when the operand types are not comparable under the
/// operator; the caller decides whether that is a non-match or an error.
fn compare(left: &Value, op: Operator, right: &Value) -> Option<bool> {
    match (left, op, right) {
        (Value::Number(l), Operator::Eq, Value::Number(r)) => Some(l == r),
        (Value::Number(l), Operator::Ne, Value::Number(r)) => Some(l != r),
        (Value::Number(l), Operator::Gt, Value::Number(r)) => Some(l > r),
        (Value::Number(l), Operator::Ge, Value::Number(r)) => Some(l >= r),
        (Value::Number(l), Operator::Lt, Value::Number(r)) => Some(l < r),
        (Value::Number(l), Operator::Le, Value::Number(r)) => Some(l <= r),

        // Strings order lexicographically
        (Value::String(l), Operator::Eq, Value::String(r)) => Some(l == r),
        (Value::String(l), Operator::Ne, Value::String(r)) => Some(l != r),
        (Value::String(l), Operator::Gt, Value::String(r)) => Some(l > r),
        (Value::String(l), Operator::Ge, Value::String(r)) => Some(l >= r),
        (Value::String(l), Operator::Lt, Value::String(r)) => Some(l < r),
        (Value::String(l), Operator::Le, Value::String(r)) => Some(l <= r),

        (Value::Bool(l), Operator::Eq, Value::Bool(r)) => Some(l == r),
        (Value::Bool(l), Operator::Ne, Value::Bool(r)) => Some(l != r),

        // Membership: substring for string-in-string, element otherwise
        (Value::String(l), Operator::In, Value::String(r)) => Some(r.contains(l.as_str())),
        (Value::String(l), Operator::NotIn, Value::String(r)) => Some(!r.contains(l.as_str())),
        (val, Operator::In, Value::Array(items)) => Some(items.iter().any(|v| v == val)),
        (val, Operator::NotIn, Value::Array(items)) => Some(!items.iter().any(|v| v == val)),

        _ => None,
    }
}
