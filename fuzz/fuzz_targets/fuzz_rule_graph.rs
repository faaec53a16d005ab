//! Fuzz target for dependency ordering over arbitrary rule graphs.
//!
//! Goal: the engine never panics, and every successful pass evaluates each rule exactly once
//! after all of its dependencies.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_rule_graph
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lintpolicy_domain::{Config, Policy, Precondition, Report, ReportConfig, Rule};
use std::collections::BTreeMap;

#[derive(Debug, Arbitrary)]
struct FuzzRule {
    deps: Vec<u8>,
    cases: Option<Vec<bool>>,
    conditions: Vec<bool>,
    warn: bool,
}

fuzz_target!(|rules: Vec<FuzzRule>| {
    let n = rules.len().min(64);
    if n == 0 {
        return;
    }

    let rules: Vec<Rule> = rules
        .into_iter()
        .take(n)
        .enumerate()
        .map(|(i, r)| Rule {
            name: format!("r{i}"),
            description: String::new(),
            dependencies: r
                .deps
                .iter()
                .map(|d| format!("r{}", *d as usize % n))
                .collect(),
            precondition: r.cases.map(|cases| Precondition { cases }),
            conditions: r.conditions,
            report: Report {
                level: if r.warn { "WARN" } else { "ERROR" }.to_string(),
                message: format!("r{i} failed"),
            },
            debug: Vec::new(),
        })
        .collect();

    let policy = Policy {
        config: Config {
            report: ReportConfig {
                style: "console".to_string(),
                ..ReportConfig::default()
            },
        },
        rules,
        ..Policy::default()
    };

    let Ok(report) = lintpolicy_domain::evaluate(&policy) else {
        return;
    };

    assert_eq!(report.results.len(), n);
    let position: BTreeMap<&str, usize> = report
        .results
        .iter()
        .enumerate()
        .map(|(i, r)| (r.name.as_str(), i))
        .collect();
    assert_eq!(position.len(), n);
    for rule in &policy.rules {
        for dep in &rule.dependencies {
            assert!(position[dep.as_str()] < position[rule.name.as_str()]);
        }
    }
});
