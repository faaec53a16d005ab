use lintpolicy_types::UnknownVariant;

/// The policy document holds a disallowed value. Fatal: no rule runs.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid report config: {0}")]
    ReportStyle(UnknownVariant),

    #[error("rule `{rule}`: {source}")]
    ReportLevel {
        rule: String,
        source: UnknownVariant,
    },

    #[error("rule #{index} has an empty name")]
    EmptyRuleName { index: usize },

    #[error("rule `{0}` is declared more than once")]
    DuplicateRule(String),
}

/// The dependency graph cannot be ordered. Fatal: no rule runs.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DependencyError {
    #[error("rule `{rule}` depends on unknown rule `{dependency}`")]
    UnknownDependency { rule: String, dependency: String },

    /// `path` starts and ends with the same rule, following `depends_on` edges.
    #[error("cyclic dependency: {}", .path.join(" -> "))]
    Cycle { path: Vec<String> },
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Dependency(#[from] DependencyError),
}
