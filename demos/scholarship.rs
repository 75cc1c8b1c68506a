//! Evaluate a scholarship applicant against the built-in rule set

use arbiter_core::{Facts, Value};
use arbiter_engine::RuleEngine;
use arbiter_loader::default_rules;
use std::collections::HashMap;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut facts: Facts = HashMap::new();
    facts.insert("cgpa".to_string(), Value::Number(3.8));
    facts.insert("co_curricular_score".to_string(), Value::Number(85.0));
    facts.insert("family_income".to_string(), Value::Number(5000.0));
    facts.insert("disciplinary_actions".to_string(), Value::Number(0.0));

    let engine = RuleEngine::new();
    let outcome = engine.run(&facts, default_rules())?;

    println!("Decision: {}", outcome.decision().unwrap_or("(opaque)"));
    if let Some(reason) = outcome.reason() {
        println!("Reason:   {reason}");
    }

    println!("\nMatched rules (by priority):");
    for rule in &outcome.matched {
        println!("  [{:>3}] {}", rule.priority, rule.name);
    }

    println!("\nFull outcome:\n{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
