//! Errors raised while inducing or applying rules.

/// Errors of this crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InductionError {
    /// A branch without observations reached the pruning decision.
    #[error("cannot prune `{feature} == {value}`: {reason}")]
    InvalidPruneState {
        /// Column tested by the branch.
        feature: String,
        /// Value tested by the branch.
        value: String,
        /// What made the error estimate undefined.
        reason: String,
    },

    /// A rule string does not follow `a == x , b == y => class == c`.
    #[error("malformed rule `{rule}`: {reason}")]
    MalformedRule {
        /// The offending rule.
        rule: String,
        /// What went wrong while splitting it.
        reason: String,
    },

    /// A column name is not part of the structure.
    #[error("unknown column `{0}`")]
    UnknownColumn(String),

    /// The split strategy picked a column that cannot be split on.
    #[error("cannot split on `{0}`")]
    InvalidSplit(String),

    /// The structure descriptor violates its invariants.
    #[error("invalid structure: {0}")]
    InvalidStructure(String),

    /// No classifier is known under this name.
    #[error("unknown classifier `{0}`")]
    UnknownClassifier(String),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, InductionError>;
