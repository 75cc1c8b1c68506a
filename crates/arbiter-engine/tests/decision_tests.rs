//! Integration tests for end-to-end decision making
//!
//! Exercises the default scholarship rule set through the full path:
//! facts + validated rules in, governing action + ranked audit list out.

use arbiter_core::{Facts, Value};
use arbiter_engine::{EvalMode, RuleEngine};
use arbiter_loader::{default_rules, parse_json_str};
use std::collections::HashMap;

fn applicant(cgpa: f64, co_curricular: f64, income: f64, disciplinary: f64) -> Facts {
    let mut facts = HashMap::new();
    facts.insert("cgpa".to_string(), Value::Number(cgpa));
    facts.insert("co_curricular_score".to_string(), Value::Number(co_curricular));
    facts.insert("family_income".to_string(), Value::Number(income));
    facts.insert("disciplinary_actions".to_string(), Value::Number(disciplinary));
    facts
}

// ============================================================================
// Default rule set scenarios
// ============================================================================

#[test]
fn top_merit_applicant_gets_full_award() {
    let facts = applicant(3.8, 85.0, 5000.0, 0.0);
    let outcome = RuleEngine::new().run(&facts, default_rules()).unwrap();

    assert_eq!(outcome.decision(), Some("AWARD_FULL"));
    assert_eq!(outcome.matched[0].name, "Top merit candidate");
    assert_eq!(outcome.matched[0].priority, 100);
}

#[test]
fn low_cgpa_outranks_need_based_review() {
    let facts = applicant(2.0, 0.0, 3000.0, 0.0);
    let outcome = RuleEngine::new().run(&facts, default_rules()).unwrap();

    assert_eq!(outcome.decision(), Some("REJECT"));
    assert_eq!(outcome.matched[0].name, "Low CGPA - not eligible");
    // Need-based review does not match here (cgpa >= 2.5 fails), so the
    // reject rule is the sole match.
    let names: Vec<&str> = outcome.matched.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Low CGPA - not eligible"]);
}

#[test]
fn disciplinary_record_beats_strong_academics() {
    let facts = applicant(3.9, 90.0, 5000.0, 3.0);
    let outcome = RuleEngine::new().run(&facts, default_rules()).unwrap();

    assert_eq!(outcome.decision(), Some("REJECT"));
    assert_eq!(outcome.matched[0].name, "Serious disciplinary record");
    // The full-merit rule fails its disciplinary condition, so it is absent
    // from the audit list entirely.
    assert!(outcome
        .matched
        .iter()
        .all(|r| r.name != "Top merit candidate"));
}

#[test]
fn unmatched_applicant_is_routed_to_review() {
    let facts = applicant(3.0, 10.0, 20000.0, 0.0);
    let outcome = RuleEngine::new().run(&facts, default_rules()).unwrap();

    assert!(outcome.is_fallback());
    assert_eq!(outcome.decision(), Some("REVIEW"));
    assert_eq!(outcome.reason(), Some("No rule matched"));
    assert!(outcome.matched.is_empty());
}

#[test]
fn partial_award_applicant_also_matches_lower_rules() {
    // Matches both the partial-award rule (80) and, with low enough income,
    // the need-based review rule (70); the higher priority governs.
    let facts = applicant(3.4, 65.0, 3500.0, 1.0);
    let outcome = RuleEngine::new().run(&facts, default_rules()).unwrap();

    assert_eq!(outcome.decision(), Some("AWARD_PARTIAL"));
    let names: Vec<&str> = outcome.matched.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Good candidate - partial scholarship", "Need-based review"]
    );
}

// ============================================================================
// Engine properties
// ============================================================================

#[test]
fn evaluation_is_deterministic() {
    let facts = applicant(3.8, 85.0, 5000.0, 0.0);
    let engine = RuleEngine::new();

    let first = engine.run(&facts, default_rules()).unwrap();
    for _ in 0..10 {
        assert_eq!(engine.run(&facts, default_rules()).unwrap(), first);
    }
}

#[test]
fn ranked_list_is_sorted_by_priority_descending() {
    let facts = applicant(3.4, 65.0, 3500.0, 1.0);
    let outcome = RuleEngine::new().run(&facts, default_rules()).unwrap();

    let priorities: Vec<i32> = outcome.matched.iter().map(|r| r.priority).collect();
    let mut sorted = priorities.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(priorities, sorted);
}

#[test]
fn governing_action_equals_top_ranked_action() {
    let facts = applicant(3.8, 85.0, 5000.0, 0.0);
    let outcome = RuleEngine::new().run(&facts, default_rules()).unwrap();

    assert!(!outcome.matched.is_empty());
    assert_eq!(outcome.action, outcome.matched[0].action);
}

#[test]
fn strict_and_lenient_agree_on_well_typed_input() {
    let facts = applicant(3.8, 85.0, 5000.0, 0.0);
    let lenient = RuleEngine::new().run(&facts, default_rules()).unwrap();
    let strict = RuleEngine::with_mode(EvalMode::Strict)
        .run(&facts, default_rules())
        .unwrap();
    assert_eq!(lenient, strict);
}

#[test]
fn serialization_round_trip_preserves_outcomes() {
    let json = serde_json::to_string(default_rules()).unwrap();
    let reloaded = parse_json_str(&json).unwrap();

    let engine = RuleEngine::new();
    for facts in [
        applicant(3.8, 85.0, 5000.0, 0.0),
        applicant(2.0, 0.0, 3000.0, 0.0),
        applicant(3.9, 90.0, 5000.0, 3.0),
        applicant(3.0, 10.0, 20000.0, 0.0),
    ] {
        assert_eq!(
            engine.run(&facts, default_rules()).unwrap(),
            engine.run(&facts, &reloaded).unwrap()
        );
    }
}
