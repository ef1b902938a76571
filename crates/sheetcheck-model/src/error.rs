use thiserror::Error;

/// A fault in the rule set itself, as opposed to a cell that fails a rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("rule has an empty column name")]
    EmptyColumnName,
    #[error("rule {kind} on column {column} requires a value")]
    MissingParameter { column: String, kind: String },
    #[error("rule {kind} on column {column} has a non-integer length: {value:?}")]
    InvalidLength {
        column: String,
        kind: String,
        value: String,
    },
    #[error("rule on column {column} has an invalid pattern {pattern:?}: {reason}")]
    InvalidPattern {
        column: String,
        pattern: String,
        reason: String,
    },
    #[error("rule on column {column} names an unknown identifier scheme: {scheme:?}")]
    UnknownScheme { column: String, scheme: String },
}

pub type Result<T> = std::result::Result<T, RuleError>;
