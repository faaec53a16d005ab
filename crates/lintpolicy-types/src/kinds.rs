use crate::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Returned when a policy document names a level or style outside the closed set.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} `{value}` (expected one of: {expected})")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

impl UnknownVariant {
    fn new(kind: &'static str, value: &str, expected: &[&str]) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }
}

/// Severity attached to a rule's report.
///
/// `Error` failures flip the overall verdict; `Warn` failures are surfaced but never do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Level {
    #[serde(rename = "ERROR")]
    Error,
    #[serde(rename = "WARN")]
    Warn,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Error => ids::LEVEL_ERROR,
            Level::Warn => ids::LEVEL_WARN,
        }
    }

    pub fn is_fatal(self) -> bool {
        matches!(self, Level::Error)
    }
}

impl FromStr for Level {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ids::LEVEL_ERROR => Ok(Level::Error),
            ids::LEVEL_WARN => Ok(Level::Warn),
            other => Err(UnknownVariant::new("report level", other, ids::ALL_LEVELS)),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation style requested for the report. Only consumed by renderers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportStyle {
    #[default]
    Console,
    /// Not advertised to users yet.
    Inline,
}

impl ReportStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            ReportStyle::Console => ids::STYLE_CONSOLE,
            ReportStyle::Inline => ids::STYLE_INLINE,
        }
    }
}

impl FromStr for ReportStyle {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ids::STYLE_CONSOLE => Ok(ReportStyle::Console),
            ids::STYLE_INLINE => Ok(ReportStyle::Inline),
            other => Err(UnknownVariant::new("report style", other, ids::ALL_STYLES)),
        }
    }
}

impl fmt::Display for ReportStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
