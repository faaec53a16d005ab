use crate::model::{PolicyDocumentV1, RuleBlock, ValueBlock};
use anyhow::Context;
use lintpolicy_domain::{
    Config, DebugDecl, OutputDecl, Policy, Precondition, Report, ReportConfig, Rule,
};
use lintpolicy_types::ids;

/// Caller-supplied report settings that win over the document.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub format: Option<String>,
    pub style: Option<String>,
    pub color: Option<bool>,
}

pub fn resolve_policy(doc: PolicyDocumentV1, overrides: Overrides) -> anyhow::Result<Policy> {
    if let Some(schema) = doc.schema.as_deref() {
        check_schema_id(schema)?;
    }

    let report = doc.config.and_then(|c| c.report).unwrap_or_default();
    let config = Config {
        report: ReportConfig {
            format: overrides.format.or(report.format).unwrap_or_default(),
            style: overrides
                .style
                .or(report.style)
                .unwrap_or_else(|| ids::STYLE_CONSOLE.to_string()),
            color: overrides.color.or(report.color).unwrap_or(false),
        },
    };

    let policy = Policy {
        config,
        rules: doc.rules.into_iter().map(resolve_rule).collect(),
        outputs: doc
            .outputs
            .into_iter()
            .map(|ValueBlock { name, value }| OutputDecl { name, value })
            .collect(),
        debugs: doc
            .debugs
            .into_iter()
            .map(|ValueBlock { name, value }| DebugDecl { name, value })
            .collect(),
        remain: doc.remain,
    };

    lintpolicy_domain::schema::validate(&policy).context("validate policy")?;
    tracing::debug!(
        rules = policy.rules.len(),
        outputs = policy.outputs.len(),
        debugs = policy.debugs.len(),
        "policy resolved"
    );

    Ok(policy)
}

fn resolve_rule(block: RuleBlock) -> Rule {
    Rule {
        name: block.name,
        description: block.description,
        dependencies: block.depends_on,
        precondition: block.precondition.map(|p| Precondition { cases: p.cases }),
        conditions: block.conditions,
        report: Report {
            level: block.report.level,
            message: block.report.message,
        },
        debug: block.debug,
    }
}

fn check_schema_id(schema: &str) -> anyhow::Result<()> {
    if schema != ids::SCHEMA_POLICY_V1 {
        anyhow::bail!(
            "unsupported policy schema: {schema} (expected '{}')",
            ids::SCHEMA_POLICY_V1
        );
    }
    Ok(())
}
