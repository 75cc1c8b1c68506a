//! Rule document parsing and shape validation
//!
//! Rule collections arrive as untrusted text (JSON, or YAML for hand-edited
//! documents) and leave as validated in-memory [`RuleSet`]s. The engine only
//! ever sees the validated form; every structural fault rejects the whole
//! document here at the boundary.

use crate::defaults::default_rules;
use crate::error::{LoadError, Result};
use arbiter_core::{Condition, Operator, Rule, RuleSet, Value};

/// Parse and validate a JSON rule document
pub fn parse_json_str(text: &str) -> Result<RuleSet> {
    let doc: serde_json::Value = serde_json::from_str(text)?;
    validate_document(doc)
}

/// Parse and validate a YAML rule document
pub fn parse_yaml_str(text: &str) -> Result<RuleSet> {
    let doc: serde_json::Value = serde_yaml::from_str(text)?;
    validate_document(doc)
}

/// Parse a JSON rule document, reverting to the default rule set on failure
///
/// The failure is surfaced as a warning, not an error: callers that must
/// always have an evaluable rule set get the known-good defaults instead of
/// a partially loaded document. Callers that would rather refuse to evaluate
/// use [`parse_json_str`] directly.
pub fn load_or_default(text: &str) -> RuleSet {
    match parse_json_str(text) {
        Ok(rules) => rules,
        Err(error) => {
            tracing::warn!(%error, "invalid rule document, reverting to default rules");
            default_rules().clone()
        }
    }
}

/// Validate the shape of a parsed rule document
pub fn validate_document(doc: serde_json::Value) -> Result<RuleSet> {
    let entries = match doc {
        serde_json::Value::Array(entries) => entries,
        _ => return Err(LoadError::NotAnArray),
    };

    let mut rules = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        rules.push(validate_rule(index, entry)?);
    }
    Ok(RuleSet::from(rules))
}

fn validate_rule(index: usize, entry: serde_json::Value) -> Result<Rule> {
    let obj = match entry {
        serde_json::Value::Object(obj) => obj,
        _ => return Err(LoadError::NotAnObject { index }),
    };

    // The name labels subsequent errors, so it is pulled first; a rule
    // without one is reported by its position.
    let label = obj
        .get("name")
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{index}"));

    let name = match obj.get("name") {
        Some(serde_json::Value::String(name)) => name.clone(),
        Some(_) => {
            return Err(LoadError::InvalidField {
                rule: label,
                field: "name".to_string(),
                message: "expected a string".to_string(),
            })
        }
        None => {
            return Err(LoadError::MissingField {
                rule: label,
                field: "name".to_string(),
            })
        }
    };

    let priority = match obj.get("priority") {
        Some(value) => value.as_i64().ok_or_else(|| LoadError::InvalidField {
            rule: label.clone(),
            field: "priority".to_string(),
            message: "expected an integer".to_string(),
        })?,
        None => {
            return Err(LoadError::MissingField {
                rule: label,
                field: "priority".to_string(),
            })
        }
    };
    let priority = i32::try_from(priority).map_err(|_| LoadError::InvalidField {
        rule: label.clone(),
        field: "priority".to_string(),
        message: "out of range for a 32-bit integer".to_string(),
    })?;

    let conditions = match obj.get("conditions") {
        Some(serde_json::Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| validate_condition(&label, i, item))
            .collect::<Result<Vec<Condition>>>()?,
        Some(_) => {
            return Err(LoadError::InvalidField {
                rule: label,
                field: "conditions".to_string(),
                message: "expected an array of condition triples".to_string(),
            })
        }
        None => {
            return Err(LoadError::MissingField {
                rule: label,
                field: "conditions".to_string(),
            })
        }
    };

    let action = match obj.get("action") {
        Some(action) => Value::from(action.clone()),
        None => {
            return Err(LoadError::MissingField {
                rule: label,
                field: "action".to_string(),
            })
        }
    };

    Ok(Rule {
        name,
        priority,
        conditions,
        action,
    })
}

fn validate_condition(rule: &str, index: usize, item: &serde_json::Value) -> Result<Condition> {
    let triple = match item {
        serde_json::Value::Array(triple) => triple,
        _ => {
            return Err(LoadError::InvalidField {
                rule: rule.to_string(),
                field: format!("conditions[{index}]"),
                message: "expected a [field, operator, literal] triple".to_string(),
            })
        }
    };
    if triple.len() != 3 {
        return Err(LoadError::InvalidConditionArity {
            rule: rule.to_string(),
            index,
            found: triple.len(),
        });
    }

    let field = triple[0].as_str().ok_or_else(|| LoadError::InvalidField {
        rule: rule.to_string(),
        field: format!("conditions[{index}].field"),
        message: "expected a string".to_string(),
    })?;

    let symbol = triple[1].as_str().ok_or_else(|| LoadError::InvalidField {
        rule: rule.to_string(),
        field: format!("conditions[{index}].operator"),
        message: "expected a string".to_string(),
    })?;
    let operator = symbol
        .parse::<Operator>()
        .map_err(|_| LoadError::UnknownOperator {
            rule: rule.to_string(),
            symbol: symbol.to_string(),
        })?;

    Ok(Condition::new(field, operator, Value::from(triple[2].clone())))
}
