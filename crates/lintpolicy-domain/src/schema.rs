//! Structural checks a policy must pass before any rule runs.

use crate::error::ValidationError;
use crate::model::{Policy, Rule, RuleId};
use lintpolicy_types::{Level, ReportSettings, ReportStyle};
use std::collections::BTreeMap;

/// A policy whose text-typed fields have been checked once.
///
/// Levels and style are closed variants from here on, and rule names map to stable ids.
#[derive(Clone, Debug)]
pub struct ValidatedPolicy<'p> {
    policy: &'p Policy,
    style: ReportStyle,
    levels: Vec<Level>,
    ids: BTreeMap<&'p str, RuleId>,
}

pub fn validate(policy: &Policy) -> Result<ValidatedPolicy<'_>, ValidationError> {
    let style = policy
        .config
        .report
        .style
        .parse::<ReportStyle>()
        .map_err(ValidationError::ReportStyle)?;

    let mut ids = BTreeMap::new();
    let mut levels = Vec::with_capacity(policy.rules.len());

    for (index, rule) in policy.rules.iter().enumerate() {
        if rule.name.is_empty() {
            return Err(ValidationError::EmptyRuleName { index });
        }
        if ids.insert(rule.name.as_str(), RuleId::new(index)).is_some() {
            return Err(ValidationError::DuplicateRule(rule.name.clone()));
        }

        let level = rule
            .report
            .level
            .parse::<Level>()
            .map_err(|source| ValidationError::ReportLevel {
                rule: rule.name.clone(),
                source,
            })?;
        levels.push(level);
    }

    Ok(ValidatedPolicy {
        policy,
        style,
        levels,
        ids,
    })
}

impl<'p> ValidatedPolicy<'p> {
    pub fn policy(&self) -> &'p Policy {
        self.policy
    }

    pub fn style(&self) -> ReportStyle {
        self.style
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn id_of(&self, name: &str) -> Option<RuleId> {
        self.ids.get(name).copied()
    }

    /// Look up a rule by id. Ids from another policy may not resolve.
    pub fn get(&self, id: RuleId) -> Option<&'p Rule> {
        self.policy.rules.get(id.index())
    }

    pub fn level_of(&self, id: RuleId) -> Option<Level> {
        self.levels.get(id.index()).copied()
    }

    // Ids handed out by `ids()` and `id_of()` always index in range.
    pub(crate) fn rule(&self, id: RuleId) -> &'p Rule {
        &self.policy.rules[id.index()]
    }

    pub(crate) fn level(&self, id: RuleId) -> Level {
        self.levels[id.index()]
    }

    pub fn ids(&self) -> impl Iterator<Item = RuleId> {
        (0..self.levels.len()).map(RuleId::new)
    }

    pub fn report_settings(&self) -> ReportSettings {
        let report = &self.policy.config.report;
        ReportSettings {
            format: report.format.clone(),
            style: self.style,
            color: report.color,
        }
    }
}
