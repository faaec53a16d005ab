//! Where a rule's booleans come from.
//!
//! The engine never computes conditions; it asks a `ConditionSource` for values an external
//! evaluator already produced.

use crate::model::Rule;
use std::collections::BTreeMap;

pub trait ConditionSource {
    /// `None` means the rule has no precondition and is always eligible.
    fn precondition_cases<'a>(&'a self, rule: &'a Rule) -> Option<&'a [bool]>;

    fn conditions<'a>(&'a self, rule: &'a Rule) -> &'a [bool];
}

impl<T: ConditionSource + ?Sized> ConditionSource for &T {
    fn precondition_cases<'a>(&'a self, rule: &'a Rule) -> Option<&'a [bool]> {
        (**self).precondition_cases(rule)
    }

    fn conditions<'a>(&'a self, rule: &'a Rule) -> &'a [bool] {
        (**self).conditions(rule)
    }
}

/// Uses the booleans stored on each rule by the document loader.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeclaredConditions;

impl ConditionSource for DeclaredConditions {
    fn precondition_cases<'a>(&'a self, rule: &'a Rule) -> Option<&'a [bool]> {
        declared_cases(rule)
    }

    fn conditions<'a>(&'a self, rule: &'a Rule) -> &'a [bool] {
        &rule.conditions
    }
}

fn declared_cases(rule: &Rule) -> Option<&[bool]> {
    rule.precondition.as_ref().map(|p| p.cases.as_slice())
}

/// Externally computed booleans for one rule.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleFacts {
    pub cases: Option<Vec<bool>>,
    pub conditions: Vec<bool>,
}

impl RuleFacts {
    pub fn new(conditions: Vec<bool>) -> Self {
        Self {
            cases: None,
            conditions,
        }
    }

    pub fn with_cases(mut self, cases: Vec<bool>) -> Self {
        self.cases = Some(cases);
        self
    }
}

/// Rule name -> facts.
///
/// An entry replaces the rule's declared booleans wholesale. Rules without an entry fall back
/// to what they declare; entries naming no rule are never consulted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FactTable {
    facts: BTreeMap<String, RuleFacts>,
}

impl FactTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, rule: impl Into<String>, facts: RuleFacts) -> Option<RuleFacts> {
        self.facts.insert(rule.into(), facts)
    }

    pub fn get(&self, rule: &str) -> Option<&RuleFacts> {
        self.facts.get(rule)
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, RuleFacts)> for FactTable {
    fn from_iter<I: IntoIterator<Item = (S, RuleFacts)>>(iter: I) -> Self {
        Self {
            facts: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl ConditionSource for FactTable {
    fn precondition_cases<'a>(&'a self, rule: &'a Rule) -> Option<&'a [bool]> {
        match self.facts.get(&rule.name) {
            Some(facts) => facts.cases.as_deref(),
            None => declared_cases(rule),
        }
    }

    fn conditions<'a>(&'a self, rule: &'a Rule) -> &'a [bool] {
        match self.facts.get(&rule.name) {
            Some(facts) => &facts.conditions,
            None => &rule.conditions,
        }
    }
}
