//! Per-rule decisions: eligibility and pass/fail.

use crate::conditions::ConditionSource;
use crate::model::Rule;
use lintpolicy_types::RuleStatus;

/// A rule is eligible when it has no precondition or every case holds.
pub fn is_eligible(cases: Option<&[bool]>) -> bool {
    cases.is_none_or(|cases| cases.iter().all(|&case| case))
}

/// Vacuously true for an empty slice.
pub fn rule_passes(conditions: &[bool]) -> bool {
    conditions.iter().all(|&condition| condition)
}

pub fn evaluate_rule<S>(rule: &Rule, source: &S) -> RuleStatus
where
    S: ConditionSource + ?Sized,
{
    if !is_eligible(source.precondition_cases(rule)) {
        return RuleStatus::Skipped;
    }
    if rule_passes(source.conditions(rule)) {
        RuleStatus::Passed
    } else {
        RuleStatus::Failed
    }
}
