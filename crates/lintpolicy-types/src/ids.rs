//! Stable identifiers for schemas and the textual forms of enumerations.
//!
//! The textual forms are what policy documents contain; anything else is rejected at validation.

// Schemas
pub const SCHEMA_POLICY_V1: &str = "lintpolicy.policy.v1";

// Report levels
pub const LEVEL_ERROR: &str = "ERROR";
pub const LEVEL_WARN: &str = "WARN";

// Report styles
pub const STYLE_CONSOLE: &str = "console";
pub const STYLE_INLINE: &str = "inline";

pub const ALL_LEVELS: &[&str] = &[LEVEL_ERROR, LEVEL_WARN];
pub const ALL_STYLES: &[&str] = &[STYLE_CONSOLE, STYLE_INLINE];
