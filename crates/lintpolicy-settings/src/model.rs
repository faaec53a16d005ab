use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// Policy document schema v1.
///
/// This is a *user-facing* model: levels and styles stay text here so the engine can report the
/// offending value instead of a generic parse error.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PolicyDocumentV1 {
    /// Optional schema string for tooling (`lintpolicy.policy.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ConfigBlock>,

    #[serde(default, rename = "rule", skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<RuleBlock>,

    #[serde(default, rename = "output", skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<ValueBlock>,

    #[serde(default, rename = "debug", skip_serializing_if = "Vec::is_empty")]
    pub debugs: Vec<ValueBlock>,

    /// Anything else at the top level, carried untouched. Only the top level has a remainder;
    /// nested blocks reject unknown keys.
    #[serde(flatten)]
    pub remain: BTreeMap<String, JsonValue>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ConfigBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportBlock>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ReportBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// `console` (default) or `inline`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RuleBlock {
    pub name: String,
    pub description: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precondition: Option<PreconditionBlock>,

    pub conditions: Vec<bool>,

    pub report: RuleReportBlock,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub debug: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PreconditionBlock {
    #[serde(default)]
    pub cases: Vec<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RuleReportBlock {
    /// `ERROR` or `WARN`.
    pub level: String,
    pub message: String,
}

/// `output` and `debug` declarations: a label and an uninterpreted value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ValueBlock {
    pub name: String,
    pub value: JsonValue,
}
