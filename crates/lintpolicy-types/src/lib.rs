//! Stable DTOs and IDs used across the lintpolicy workspace.
//!
//! This crate is intentionally boring:
//! - closed enumerations for report levels and styles
//! - stable string IDs for schemas
//! - the serializable summary receipt handed to external renderers

#![forbid(unsafe_code)]

pub mod ids;
pub mod kinds;
pub mod receipt;

pub use kinds::{Level, ReportStyle, UnknownVariant};
pub use receipt::{
    DiagnosticEntry, EvaluationSummary, ReportSettings, RuleEntry, RuleStatus, SCHEMA_SUMMARY_V1,
    StatusCounts, ToolMeta, Verdict,
};
