use crate::model::{Config, Policy, Precondition, Report, ReportConfig, Rule};

pub fn rule(name: &str, deps: &[&str], conditions: &[bool], level: &str) -> Rule {
    Rule {
        name: name.to_string(),
        description: format!("{name} description"),
        dependencies: deps.iter().map(|d| d.to_string()).collect(),
        precondition: None,
        conditions: conditions.to_vec(),
        report: Report {
            level: level.to_string(),
            message: format!("{name} failed"),
        },
        debug: Vec::new(),
    }
}

pub fn with_precondition(mut rule: Rule, cases: &[bool]) -> Rule {
    rule.precondition = Some(Precondition {
        cases: cases.to_vec(),
    });
    rule
}

pub fn policy(rules: Vec<Rule>) -> Policy {
    Policy {
        config: Config {
            report: ReportConfig {
                format: "default".to_string(),
                style: "console".to_string(),
                color: false,
            },
        },
        rules,
        ..Policy::default()
    }
}
