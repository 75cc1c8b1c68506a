//! Built-in default rule set
//!
//! The scholarship eligibility rules the system ships with. Built once at
//! first use and shared read-only; callers that want to evolve a rule set
//! clone it and edit the clone.

use arbiter_core::{Condition, Operator, Rule, RuleSet, Value};
use std::collections::HashMap;
use std::sync::OnceLock;

static DEFAULT_RULES: OnceLock<RuleSet> = OnceLock::new();

fn action(decision: &str, reason: &str) -> Value {
    let mut map = HashMap::new();
    map.insert("decision".to_string(), Value::from(decision));
    map.insert("reason".to_string(), Value::from(reason));
    Value::Object(map)
}

/// The built-in scholarship rule set
pub fn default_rules() -> &'static RuleSet {
    DEFAULT_RULES.get_or_init(|| {
        RuleSet::new()
            .with_rule(
                Rule::new("Top merit candidate", 100)
                    .with_condition(Condition::new("cgpa", Operator::Ge, 3.7))
                    .with_condition(Condition::new("co_curricular_score", Operator::Ge, 80i64))
                    .with_condition(Condition::new("family_income", Operator::Le, 8000i64))
                    .with_condition(Condition::new("disciplinary_actions", Operator::Eq, 0i64))
                    .with_action(action(
                        "AWARD_FULL",
                        "Excellent academic & co-curricular performance with acceptable need",
                    )),
            )
            .with_rule(
                Rule::new("Good candidate - partial scholarship", 80)
                    .with_condition(Condition::new("cgpa", Operator::Ge, 3.3))
                    .with_condition(Condition::new("co_curricular_score", Operator::Ge, 60i64))
                    .with_condition(Condition::new("family_income", Operator::Le, 12000i64))
                    .with_condition(Condition::new("disciplinary_actions", Operator::Le, 1i64))
                    .with_action(action(
                        "AWARD_PARTIAL",
                        "Good academic & involvement record with moderate need",
                    )),
            )
            .with_rule(
                Rule::new("Need-based review", 70)
                    .with_condition(Condition::new("cgpa", Operator::Ge, 2.5))
                    .with_condition(Condition::new("family_income", Operator::Le, 4000i64))
                    .with_action(action(
                        "REVIEW",
                        "High need but borderline academic score",
                    )),
            )
            .with_rule(
                Rule::new("Low CGPA - not eligible", 95)
                    .with_condition(Condition::new("cgpa", Operator::Lt, 2.5))
                    .with_action(action(
                        "REJECT",
                        "CGPA below minimum scholarship requirement",
                    )),
            )
            .with_rule(
                Rule::new("Serious disciplinary record", 90)
                    .with_condition(Condition::new("disciplinary_actions", Operator::Ge, 2i64))
                    .with_action(action("REJECT", "Too many disciplinary records")),
            )
    })
}
