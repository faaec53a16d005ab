use crate::conditions::{ConditionSource, DeclaredConditions};
use crate::error::EngineError;
use crate::eval;
use crate::model::Policy;
use crate::order::{self, ExecutionOrder};
use crate::report::{Aggregator, EvaluationReport};
use crate::schema::{self, ValidatedPolicy};
use tracing::{debug, trace};

/// Evaluate a policy using the booleans declared on its rules.
pub fn evaluate(policy: &Policy) -> Result<EvaluationReport, EngineError> {
    evaluate_with(policy, &DeclaredConditions)
}

/// Evaluate a policy with booleans supplied by `source`.
///
/// Fails only when validation or dependency ordering fails, in which case no rule runs.
/// Rule failures never abort the pass.
pub fn evaluate_with<S>(policy: &Policy, source: &S) -> Result<EvaluationReport, EngineError>
where
    S: ConditionSource + ?Sized,
{
    let (validated, order) = prepare(policy)?;

    let mut aggregator = Aggregator::new(validated.report_settings());
    for id in order.iter() {
        let rule = validated.rule(id);
        let status = eval::evaluate_rule(rule, source);
        trace!(rule = %rule.name, ?status, "rule evaluated");
        aggregator.record(id, rule, validated.level(id), status);
    }

    let report = aggregator.finish();
    debug!(
        success = report.success,
        verdict = ?report.verdict,
        diagnostics = report.diagnostics.len(),
        "evaluation aggregated"
    );
    Ok(report)
}

/// Validate and order without evaluating anything.
pub fn execution_order(policy: &Policy) -> Result<Vec<&str>, EngineError> {
    let (validated, order) = prepare(policy)?;
    Ok(order
        .iter()
        .map(|id| validated.rule(id).name.as_str())
        .collect())
}

fn prepare(policy: &Policy) -> Result<(ValidatedPolicy<'_>, ExecutionOrder), EngineError> {
    let validated = schema::validate(policy).inspect_err(|err| {
        debug!(error = %err, "policy validation failed");
    })?;
    debug!(
        rules = validated.len(),
        style = %validated.style(),
        "policy validated"
    );

    let order = order::resolve_order(&validated).inspect_err(|err| {
        debug!(error = %err, "dependency resolution failed");
    })?;
    debug!(rules = order.len(), "execution order resolved");

    Ok((validated, order))
}
