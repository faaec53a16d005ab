use crate::model::{Rule, RuleId};
use lintpolicy_types::{
    DiagnosticEntry, EvaluationSummary, Level, ReportSettings, RuleEntry, RuleStatus,
    SCHEMA_SUMMARY_V1, StatusCounts, ToolMeta, Verdict,
};

/// Message surfaced for a failed rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub rule: String,
    pub level: Level,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleResult {
    pub id: RuleId,
    pub name: String,
    pub status: RuleStatus,
}

/// Result of one completed evaluation pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvaluationReport {
    /// False iff at least one ERROR-level rule failed.
    pub success: bool,
    pub verdict: Verdict,
    /// One per failed rule, in execution order.
    pub diagnostics: Vec<Diagnostic>,
    /// Every rule, in execution order.
    pub results: Vec<RuleResult>,
    pub counts: StatusCounts,
    pub settings: ReportSettings,
}

impl EvaluationReport {
    pub fn messages(&self) -> Vec<&str> {
        self.diagnostics.iter().map(|d| d.message.as_str()).collect()
    }

    pub fn execution_order(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn status_of(&self, rule: &str) -> Option<RuleStatus> {
        self.results
            .iter()
            .find(|r| r.name == rule)
            .map(|r| r.status)
    }

    pub fn summary(&self) -> EvaluationSummary {
        EvaluationSummary {
            schema: SCHEMA_SUMMARY_V1.to_string(),
            tool: ToolMeta {
                name: "lintpolicy".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            success: self.success,
            verdict: self.verdict,
            report: self.settings.clone(),
            counts: self.counts.clone(),
            rules: self
                .results
                .iter()
                .map(|r| RuleEntry {
                    name: r.name.clone(),
                    status: r.status,
                })
                .collect(),
            diagnostics: self
                .diagnostics
                .iter()
                .map(|d| DiagnosticEntry {
                    rule: d.rule.clone(),
                    level: d.level,
                    message: d.message.clone(),
                })
                .collect(),
        }
    }
}

/// Folds per-rule outcomes in execution order. Private to one pass.
#[derive(Debug)]
pub(crate) struct Aggregator {
    success: bool,
    diagnostics: Vec<Diagnostic>,
    results: Vec<RuleResult>,
    counts: StatusCounts,
    settings: ReportSettings,
}

impl Aggregator {
    pub(crate) fn new(settings: ReportSettings) -> Self {
        Self {
            success: true,
            diagnostics: Vec::new(),
            results: Vec::new(),
            counts: StatusCounts::default(),
            settings,
        }
    }

    pub(crate) fn record(&mut self, id: RuleId, rule: &Rule, level: Level, status: RuleStatus) {
        match status {
            RuleStatus::Skipped => self.counts.skipped += 1,
            RuleStatus::Passed => self.counts.passed += 1,
            RuleStatus::Failed => {
                if level.is_fatal() {
                    self.success = false;
                    self.counts.failed_error += 1;
                } else {
                    self.counts.failed_warn += 1;
                }
                self.diagnostics.push(Diagnostic {
                    rule: rule.name.clone(),
                    level,
                    message: rule.report.message.clone(),
                });
            }
        }

        self.results.push(RuleResult {
            id,
            name: rule.name.clone(),
            status,
        });
    }

    pub(crate) fn finish(self) -> EvaluationReport {
        let verdict = compute_verdict(&self.counts);
        EvaluationReport {
            success: self.success,
            verdict,
            diagnostics: self.diagnostics,
            results: self.results,
            counts: self.counts,
            settings: self.settings,
        }
    }
}

fn compute_verdict(counts: &StatusCounts) -> Verdict {
    if counts.failed_error > 0 {
        return Verdict::Fail;
    }
    if counts.failed_warn > 0 {
        return Verdict::Warn;
    }
    Verdict::Pass
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::rule;
    use lintpolicy_types::ReportStyle;

    fn settings() -> ReportSettings {
        ReportSettings {
            format: String::new(),
            style: ReportStyle::Console,
            color: false,
        }
    }

    fn fold(outcomes: &[(&str, Level, RuleStatus)]) -> EvaluationReport {
        let mut agg = Aggregator::new(settings());
        for (i, (name, level, status)) in outcomes.iter().enumerate() {
            let r = rule(name, &[], &[], level.as_str());
            agg.record(RuleId::new(i), &r, *level, *status);
        }
        agg.finish()
    }

    #[test]
    fn nothing_recorded_is_a_pass() {
        let report = fold(&[]);
        assert!(report.success);
        assert_eq!(report.verdict, Verdict::Pass);
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn failed_error_rule_flips_success() {
        let report = fold(&[
            ("a", Level::Warn, RuleStatus::Passed),
            ("b", Level::Error, RuleStatus::Failed),
        ]);
        assert!(!report.success);
        assert_eq!(report.verdict, Verdict::Fail);
        assert_eq!(report.messages(), ["b failed"]);
        assert_eq!(report.counts.failed_error, 1);
    }

    #[test]
    fn failed_warn_rule_reports_but_keeps_success() {
        let report = fold(&[("a", Level::Warn, RuleStatus::Failed)]);
        assert!(report.success);
        assert_eq!(report.verdict, Verdict::Warn);
        assert_eq!(report.messages(), ["a failed"]);
        assert_eq!(report.diagnostics[0].level, Level::Warn);
    }

    #[test]
    fn every_failure_is_collected_in_order() {
        let report = fold(&[
            ("a", Level::Error, RuleStatus::Failed),
            ("b", Level::Error, RuleStatus::Skipped),
            ("c", Level::Warn, RuleStatus::Failed),
            ("d", Level::Error, RuleStatus::Failed),
        ]);
        assert!(!report.success);
        assert_eq!(report.messages(), ["a failed", "c failed", "d failed"]);
        assert_eq!(report.execution_order(), ["a", "b", "c", "d"]);
        assert_eq!(
            report.counts,
            StatusCounts {
                passed: 0,
                skipped: 1,
                failed_error: 2,
                failed_warn: 1,
            }
        );
    }

    #[test]
    fn skipped_rules_contribute_nothing() {
        let report = fold(&[("a", Level::Error, RuleStatus::Skipped)]);
        assert!(report.success);
        assert_eq!(report.verdict, Verdict::Pass);
        assert!(report.diagnostics.is_empty());
        assert_eq!(report.status_of("a"), Some(RuleStatus::Skipped));
    }

    #[test]
    fn summary_mirrors_report() {
        let report = fold(&[
            ("a", Level::Warn, RuleStatus::Passed),
            ("b", Level::Error, RuleStatus::Failed),
        ]);
        let summary = report.summary();
        assert_eq!(summary.schema, SCHEMA_SUMMARY_V1);
        assert!(!summary.success);
        assert_eq!(summary.rules.len(), 2);
        assert_eq!(summary.rules[1].status, RuleStatus::Failed);
        assert_eq!(summary.diagnostics[0].message, "b failed");
    }
}
