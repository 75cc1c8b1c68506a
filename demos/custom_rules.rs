//! Load a caller-edited rule document and evaluate it in strict mode

use arbiter_core::{Facts, Value};
use arbiter_engine::{EvalMode, RuleEngine};
use arbiter_loader::{load_or_default, parse_json_str};
use std::collections::HashMap;

const RULES: &str = r#"[
    {
        "name": "VIP customer",
        "priority": 90,
        "conditions": [["tier", "in", ["gold", "platinum"]]],
        "action": {"decision": "APPROVE", "reason": "Trusted tier"}
    },
    {
        "name": "Large order",
        "priority": 50,
        "conditions": [["amount", ">", 10000]],
        "action": {"decision": "REVIEW", "reason": "Manual check for large orders"}
    },
    {
        "name": "Default",
        "priority": 0,
        "conditions": [],
        "action": {"decision": "APPROVE", "reason": "Nothing flagged"}
    }
]"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Strict callers validate up front and refuse to run on a bad document
    let rules = parse_json_str(RULES)?;

    let mut facts: Facts = HashMap::new();
    facts.insert("tier".to_string(), Value::from("gold"));
    facts.insert("amount".to_string(), Value::Number(25000.0));

    let engine = RuleEngine::with_mode(EvalMode::Strict);
    let outcome = engine.run(&facts, &rules)?;
    println!(
        "strict: {} ({} rule(s) matched)",
        outcome.decision().unwrap_or("(opaque)"),
        outcome.matched.len()
    );

    // Lenient callers can instead fall back to the known-good defaults when
    // a hand-edited document does not validate
    let fallback_rules = load_or_default("{ this is not a rule document");
    let outcome = RuleEngine::new().run(&facts, &fallback_rules)?;
    println!(
        "fallback defaults: {}",
        outcome.decision().unwrap_or("(opaque)")
    );

    Ok(())
}
