//! Condition types
//!
//! A condition is an immutable (field, operator, literal) triple. On the
//! wire it is the 3-element array `[field, symbol, literal]`; in memory the
//! operator is the closed [`Operator`] enum, so a validated condition can
//! never carry an unrecognized symbol.

use crate::error::CoreError;
use crate::operator::Operator;
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// Wire form of a condition: `[field, operator symbol, literal]`
type ConditionRepr = (String, String, Value);

/// A single condition against one fact field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ConditionRepr", into = "ConditionRepr")]
pub struct Condition {
    /// Fact field identifier (e.g. "cgpa")
    pub field: String,
    /// Comparison or membership operator
    pub operator: Operator,
    /// Literal right-hand operand
    pub value: Value,
}

impl Condition {
    /// Create a new condition
    pub fn new(field: impl Into<String>, operator: Operator, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }
}

impl TryFrom<ConditionRepr> for Condition {
    type Error = CoreError;

    fn try_from((field, symbol, value): ConditionRepr) -> Result<Self, Self::Error> {
        let operator = symbol.parse::<Operator>()?;
        Ok(Condition {
            field,
            operator,
            value,
        })
    }
}

impl From<Condition> for ConditionRepr {
    fn from(cond: Condition) -> Self {
        (cond.field, cond.operator.symbol().to_string(), cond.value)
    }
}
