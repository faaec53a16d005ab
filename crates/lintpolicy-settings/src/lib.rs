//! Policy document parsing and resolution into the domain `Policy`.
//!
//! This crate is intentionally IO-free: it parses documents provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{
    ConfigBlock, PolicyDocumentV1, PreconditionBlock, ReportBlock, RuleBlock, RuleReportBlock,
    ValueBlock,
};
pub use resolve::Overrides;

use anyhow::Context;
use lintpolicy_domain::Policy;
use serde_json::Value as JsonValue;

/// Parse a TOML policy document into a typed model.
///
/// TOML datetimes in opaque values (remainder, `output`, `debug`) are carried as their
/// RFC 3339 text.
pub fn parse_policy_toml(input: &str) -> anyhow::Result<PolicyDocumentV1> {
    let table: toml::Table = toml::from_str(input)?;
    let doc: PolicyDocumentV1 = serde_json::from_value(toml_to_json(toml::Value::Table(table)))?;
    Ok(doc)
}

/// Parse a JSON policy document (same shape as TOML) into a typed model.
pub fn parse_policy_json(input: &str) -> anyhow::Result<PolicyDocumentV1> {
    let doc: PolicyDocumentV1 = serde_json::from_str(input)?;
    Ok(doc)
}

/// Build the domain policy (defaults + overrides), then validate it once.
pub fn resolve_policy(doc: PolicyDocumentV1, overrides: Overrides) -> anyhow::Result<Policy> {
    resolve::resolve_policy(doc, overrides)
}

/// Parse and resolve in one step.
pub fn load_policy_toml(input: &str, overrides: Overrides) -> anyhow::Result<Policy> {
    let doc = parse_policy_toml(input).context("parse policy")?;
    resolve_policy(doc, overrides).context("resolve policy")
}

fn toml_to_json(value: toml::Value) -> JsonValue {
    match value {
        toml::Value::String(s) => JsonValue::String(s),
        toml::Value::Integer(i) => JsonValue::from(i),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map_or_else(|| JsonValue::String(f.to_string()), JsonValue::Number),
        toml::Value::Boolean(b) => JsonValue::Bool(b),
        toml::Value::Datetime(dt) => JsonValue::String(dt.to_string()),
        toml::Value::Array(items) => items.into_iter().map(toml_to_json).collect(),
        toml::Value::Table(table) => JsonValue::Object(
            table
                .into_iter()
                .map(|(key, value)| (key, toml_to_json(value)))
                .collect(),
        ),
    }
}
