use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::fmt;

/// A full rule set plus global settings for one linting run.
///
/// Constructed by a document loader; evaluation only ever borrows it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Policy {
    pub config: Config,

    /// Declaration order matters: it is the tie-break for execution order.
    pub rules: Vec<Rule>,

    pub outputs: Vec<OutputDecl>,
    pub debugs: Vec<DebugDecl>,

    /// Top-level material the loader did not model. Never inspected here.
    pub remain: BTreeMap<String, JsonValue>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub report: ReportConfig,
}

/// Renderer settings. Only `style` is checked by the engine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportConfig {
    pub format: String,
    pub style: String,
    pub color: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rule {
    pub name: String,
    pub description: String,

    /// Names of rules that must complete before this one runs.
    pub dependencies: Vec<String>,

    pub precondition: Option<Precondition>,

    /// All must hold for the rule to pass.
    pub conditions: Vec<bool>,

    pub report: Report,

    /// Free-form debug expressions carried for the front end.
    pub debug: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Precondition {
    pub cases: Vec<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    /// `ERROR` or `WARN`.
    pub level: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OutputDecl {
    pub name: String,
    pub value: JsonValue,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DebugDecl {
    pub name: String,
    pub value: JsonValue,
}

/// Stable index of a rule inside `Policy::rules`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuleId(usize);

impl RuleId {
    pub(crate) fn new(index: usize) -> Self {
        RuleId(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl Policy {
    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name == name)
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.name.as_str())
    }
}
