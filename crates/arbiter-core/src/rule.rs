//! Rule and rule set definitions

use crate::condition::Condition;
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// A single decision rule
///
/// Conditions are AND-ed: the rule matches iff every condition holds. A rule
/// with no conditions is vacuously true and matches every fact set, which is
/// how catch-all rules are written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Human-readable name, for display and audit only
    pub name: String,

    /// Precedence among matched rules; higher wins
    pub priority: i32,

    /// Conditions that must all hold for the rule to match
    pub conditions: Vec<Condition>,

    /// Opaque payload returned verbatim when this rule governs the outcome.
    /// The engine never inspects its contents.
    pub action: Value,
}

impl Rule {
    /// Create a new rule with no conditions and a null action
    pub fn new(name: impl Into<String>, priority: i32) -> Self {
        Rule {
            name: name.into(),
            priority,
            conditions: Vec::new(),
            action: Value::Null,
        }
    }

    /// Add a condition
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Replace all conditions
    pub fn with_conditions(mut self, conditions: Vec<Condition>) -> Self {
        self.conditions = conditions;
        self
    }

    /// Set the action payload
    pub fn with_action(mut self, action: Value) -> Self {
        self.action = action;
        self
    }
}

/// An ordered collection of rules
///
/// Input order carries no required relationship to priority, but it is the
/// tie-breaker among equal-priority matches, so it is preserved as supplied.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Create an empty rule set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Append a rule, builder-style
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Iterate over the rules in input order
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// The rules in input order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the set holds no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        RuleSet { rules }
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operator::Operator;
    use std::collections::HashMap;

    fn action(decision: &str) -> Value {
        let mut map = HashMap::new();
        map.insert("decision".to_string(), Value::from(decision));
        Value::Object(map)
    }

    #[test]
    fn test_rule_builder() {
        let rule = Rule::new("Low CGPA", 95)
            .with_condition(Condition::new("cgpa", Operator::Lt, 2.5))
            .with_action(action("REJECT"));

        assert_eq!(rule.name, "Low CGPA");
        assert_eq!(rule.priority, 95);
        assert_eq!(rule.conditions.len(), 1);
        assert_eq!(
            rule.action.as_object().unwrap().get("decision"),
            Some(&Value::String("REJECT".to_string()))
        );
    }

    #[test]
    fn test_rule_with_no_conditions() {
        let rule = Rule::new("catch-all", 0).with_action(action("REVIEW"));
        assert!(rule.conditions.is_empty());
    }

    #[test]
    fn test_ruleset_preserves_input_order() {
        let set = RuleSet::new()
            .with_rule(Rule::new("b", 10))
            .with_rule(Rule::new("a", 99));

        let names: Vec<&str> = set.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_ruleset_serde_transparent() {
        let set = RuleSet::new().with_rule(
            Rule::new("r", 1)
                .with_condition(Condition::new("x", Operator::Eq, 1i64))
                .with_action(action("REVIEW")),
        );
        let json = serde_json::to_string(&set).unwrap();
        assert!(json.starts_with('['));

        let parsed: RuleSet = serde_json::from_str(&json).unwrap();
        assert_eq!(set, parsed);
    }
}
