//! Pure policy evaluation (no IO).
//!
//! Input: a `Policy` constructed elsewhere, plus the booleans each rule is decided on.
//! Output: overall success + ordered diagnostics + per-rule results.

#![forbid(unsafe_code)]

pub mod conditions;
pub mod error;
pub mod eval;
pub mod model;
pub mod order;
pub mod report;
pub mod schema;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use conditions::{ConditionSource, DeclaredConditions, FactTable, RuleFacts};
pub use engine::{evaluate, evaluate_with, execution_order};
pub use error::{DependencyError, EngineError, ValidationError};
pub use model::{
    Config, DebugDecl, OutputDecl, Policy, Precondition, Report, ReportConfig, Rule, RuleId,
};
pub use report::{Diagnostic, EvaluationReport, RuleResult};
