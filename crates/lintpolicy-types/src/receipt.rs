use crate::{Level, ReportStyle};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Stable schema identifier for the evaluation summary.
pub const SCHEMA_SUMMARY_V1: &str = "lintpolicy.summary.v1";

/// Overall outcome of one evaluation pass.
///
/// `Warn` still counts as success: only ERROR-level failures turn a run into `Fail`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

impl Verdict {
    pub fn is_success(self) -> bool {
        !matches!(self, Verdict::Fail)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RuleStatus {
    /// Precondition not met; the rule contributed nothing.
    Skipped,
    Passed,
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StatusCounts {
    pub passed: u32,
    pub skipped: u32,
    pub failed_error: u32,
    pub failed_warn: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Report settings copied from the policy, for the renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReportSettings {
    pub format: String,
    pub style: ReportStyle,
    pub color: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RuleEntry {
    pub name: String,
    pub status: RuleStatus,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DiagnosticEntry {
    pub rule: String,
    pub level: Level,
    pub message: String,
}

/// Serializable receipt of one evaluation pass.
///
/// `rules` is in execution order; `diagnostics` holds one entry per failed rule, same order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EvaluationSummary {
    pub schema: String,
    pub tool: ToolMeta,
    pub success: bool,
    pub verdict: Verdict,
    pub report: ReportSettings,
    pub counts: StatusCounts,
    pub rules: Vec<RuleEntry>,
    pub diagnostics: Vec<DiagnosticEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warn_verdict_is_still_success() {
        assert!(Verdict::Pass.is_success());
        assert!(Verdict::Warn.is_success());
        assert!(!Verdict::Fail.is_success());
    }

    #[test]
    fn summary_serializes_with_lowercase_statuses() {
        let summary = EvaluationSummary {
            schema: SCHEMA_SUMMARY_V1.to_string(),
            tool: ToolMeta {
                name: "lintpolicy".to_string(),
                version: "0.1.0".to_string(),
            },
            success: false,
            verdict: Verdict::Fail,
            report: ReportSettings {
                format: String::new(),
                style: ReportStyle::Console,
                color: false,
            },
            counts: StatusCounts {
                passed: 1,
                skipped: 0,
                failed_error: 1,
                failed_warn: 0,
            },
            rules: vec![RuleEntry {
                name: "b".to_string(),
                status: RuleStatus::Failed,
            }],
            diagnostics: vec![DiagnosticEntry {
                rule: "b".to_string(),
                level: Level::Error,
                message: "b failed".to_string(),
            }],
        };

        let value = serde_json::to_value(&summary).expect("serialize");
        assert_eq!(value["verdict"], "fail");
        assert_eq!(value["rules"][0]["status"], "failed");
        assert_eq!(value["diagnostics"][0]["level"], "ERROR");
        assert_eq!(value["report"]["style"], "console");

        let back: EvaluationSummary = serde_json::from_value(value).expect("deserialize");
        assert_eq!(back, summary);
    }
}
