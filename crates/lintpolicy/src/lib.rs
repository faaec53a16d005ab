//! Load a lint policy document and evaluate it.
//!
//! The engine itself lives in `lintpolicy-domain`; this crate wires document loading in front of
//! it for callers that start from text.

#![forbid(unsafe_code)]

pub use lintpolicy_domain::{
    ConditionSource, DeclaredConditions, DependencyError, Diagnostic, EngineError,
    EvaluationReport, FactTable, Policy, Rule, RuleFacts, RuleResult, ValidationError, evaluate,
    evaluate_with, execution_order,
};
pub use lintpolicy_settings::{Overrides, PolicyDocumentV1, load_policy_toml};
pub use lintpolicy_types::{EvaluationSummary, Level, ReportStyle, RuleStatus, Verdict};

use anyhow::Context;

/// Parse a TOML policy and evaluate it with the booleans it declares.
pub fn check_policy_toml(input: &str, overrides: Overrides) -> anyhow::Result<EvaluationReport> {
    check_policy_toml_with(input, overrides, &DeclaredConditions)
}

/// Parse a TOML policy and evaluate it with booleans from `source`.
pub fn check_policy_toml_with<S>(
    input: &str,
    overrides: Overrides,
    source: &S,
) -> anyhow::Result<EvaluationReport>
where
    S: ConditionSource + ?Sized,
{
    let policy = load_policy_toml(input, overrides).context("load policy")?;
    let report = evaluate_with(&policy, source).context("evaluate policy")?;
    Ok(report)
}
