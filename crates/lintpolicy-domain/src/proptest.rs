//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Dependency ordering on arbitrary acyclic graphs
//! - Cycle reports on arbitrary graphs
//! - Severity folding against an independent model of the rules

use crate::engine::{evaluate, execution_order};
use crate::error::{DependencyError, EngineError};
use crate::model::Rule;
use crate::test_support::{policy, rule, with_precondition};
use lintpolicy_types::RuleStatus;
use proptest::prelude::*;
use proptest::sample::Index;
use std::collections::BTreeMap;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Booleans and severity for one rule.
#[derive(Clone, Debug)]
struct Facts {
    conditions: Vec<bool>,
    cases: Option<Vec<bool>>,
    level: &'static str,
}

fn arb_facts() -> impl Strategy<Value = Facts> {
    (
        prop::collection::vec(any::<bool>(), 0..4),
        prop::option::of(prop::collection::vec(any::<bool>(), 0..3)),
        prop_oneof![Just("ERROR"), Just("WARN")],
    )
        .prop_map(|(conditions, cases, level)| Facts {
            conditions,
            cases,
            level,
        })
}

fn build_rule(name: &str, deps: &[String], facts: &Facts) -> Rule {
    let deps: Vec<&str> = deps.iter().map(String::as_str).collect();
    let r = rule(name, &deps, &facts.conditions, facts.level);
    match &facts.cases {
        Some(cases) => with_precondition(r, cases),
        None => r,
    }
}

/// Rules whose dependencies only point at lower topological ranks, declared in shuffled order.
fn arb_acyclic_rules() -> impl Strategy<Value = Vec<Rule>> {
    (1usize..12)
        .prop_flat_map(|n| {
            (
                prop::collection::vec(prop::collection::vec(any::<Index>(), 0..4), n),
                Just((0..n).collect::<Vec<usize>>()).prop_shuffle(),
                prop::collection::vec(arb_facts(), n),
            )
        })
        .prop_map(|(picks, declaration, facts)| {
            let ranked: Vec<Rule> = picks
                .iter()
                .enumerate()
                .map(|(rank, picks)| {
                    let deps: Vec<String> = if rank == 0 {
                        Vec::new()
                    } else {
                        picks.iter().map(|p| format!("r{}", p.index(rank))).collect()
                    };
                    build_rule(&format!("r{rank}"), &deps, &facts[rank])
                })
                .collect();
            declaration.into_iter().map(|i| ranked[i].clone()).collect()
        })
}

/// Rules with arbitrary dependency edges, cycles included.
fn arb_any_rules() -> impl Strategy<Value = Vec<Rule>> {
    (1usize..8)
        .prop_flat_map(|n| {
            (
                prop::collection::vec(prop::collection::vec(any::<Index>(), 0..3), n),
                prop::collection::vec(arb_facts(), n),
            )
        })
        .prop_map(|(picks, facts)| {
            let n = picks.len();
            picks
                .iter()
                .enumerate()
                .map(|(i, picks)| {
                    let deps: Vec<String> =
                        picks.iter().map(|p| format!("r{}", p.index(n))).collect();
                    build_rule(&format!("r{i}"), &deps, &facts[i])
                })
                .collect()
        })
}

fn expected_status(rule: &Rule) -> RuleStatus {
    let eligible = rule
        .precondition
        .as_ref()
        .is_none_or(|p| !p.cases.contains(&false));
    if !eligible {
        RuleStatus::Skipped
    } else if rule.conditions.contains(&false) {
        RuleStatus::Failed
    } else {
        RuleStatus::Passed
    }
}

// ============================================================================
// Property tests: ordering
// ============================================================================

proptest! {
    /// Every rule runs after all of its dependencies, and each rule runs exactly once.
    #[test]
    fn order_respects_dependencies(rules in arb_acyclic_rules()) {
        let p = policy(rules.clone());
        let order = execution_order(&p).expect("acyclic policy orders");

        prop_assert_eq!(order.len(), rules.len());
        let position: BTreeMap<&str, usize> =
            order.iter().enumerate().map(|(i, name)| (*name, i)).collect();
        prop_assert_eq!(position.len(), rules.len());

        for r in &rules {
            for dep in &r.dependencies {
                prop_assert!(
                    position[dep.as_str()] < position[r.name.as_str()],
                    "{} must run after {}",
                    r.name,
                    dep
                );
            }
        }
    }

    /// Ordering is a pure function of the policy.
    #[test]
    fn order_is_deterministic(rules in arb_acyclic_rules()) {
        let p = policy(rules);
        let first = execution_order(&p).expect("orders");
        let second = execution_order(&p).expect("orders");
        prop_assert_eq!(first, second);
    }

    /// Either the graph orders, or the reported cycle is made of real edges.
    #[test]
    fn cycles_are_reported_along_real_edges(rules in arb_any_rules()) {
        let p = policy(rules.clone());
        let deps: BTreeMap<&str, &Vec<String>> =
            rules.iter().map(|r| (r.name.as_str(), &r.dependencies)).collect();

        match execution_order(&p) {
            Ok(order) => prop_assert_eq!(order.len(), rules.len()),
            Err(EngineError::Dependency(DependencyError::Cycle { path })) => {
                prop_assert!(path.len() >= 2);
                prop_assert_eq!(path.first(), path.last());
                for pair in path.windows(2) {
                    prop_assert!(
                        deps[pair[0].as_str()].contains(&pair[1]),
                        "{} does not depend on {}",
                        pair[0],
                        pair[1]
                    );
                }
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}

// ============================================================================
// Property tests: result folding
// ============================================================================

proptest! {
    /// Success is false iff an eligible ERROR rule has a false condition.
    #[test]
    fn success_matches_independent_model(rules in arb_acyclic_rules()) {
        let p = policy(rules.clone());
        let report = evaluate(&p).expect("evaluates");

        let expected_success = !rules
            .iter()
            .any(|r| r.report.level == "ERROR" && expected_status(r) == RuleStatus::Failed);
        prop_assert_eq!(report.success, expected_success);
        prop_assert_eq!(report.verdict.is_success(), expected_success);
    }

    /// One diagnostic per failed rule, in execution order, regardless of level.
    #[test]
    fn diagnostics_follow_execution_order(rules in arb_acyclic_rules()) {
        let p = policy(rules.clone());
        let report = evaluate(&p).expect("evaluates");
        let by_name: BTreeMap<&str, &Rule> =
            rules.iter().map(|r| (r.name.as_str(), r)).collect();

        let expected: Vec<&str> = report
            .execution_order()
            .into_iter()
            .filter(|name| expected_status(by_name[name]) == RuleStatus::Failed)
            .map(|name| by_name[name].report.message.as_str())
            .collect();
        prop_assert_eq!(report.messages(), expected);

        for result in &report.results {
            prop_assert_eq!(result.status, expected_status(by_name[result.name.as_str()]));
        }
    }
}
