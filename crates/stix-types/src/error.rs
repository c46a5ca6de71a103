use thiserror::Error;

/// Errors produced by identifier and timestamp operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid timestamp {value:?}: {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("invalid custom property name: {0}")]
    InvalidPropertyName(String),

    #[error("modified {modified} is earlier than created {created}")]
    ModifiedBeforeCreated { created: String, modified: String },
}

/// Result alias for type operations.
pub type TypeResult<T> = Result<T, TypeError>;
