use stix_types::TypeError;

/// Errors from object construction, configuration and encoding.
#[derive(Debug, thiserror::Error)]
pub enum ObjectError {
    /// A timestamp or identifier failed to parse.
    #[error(transparent)]
    Type(#[from] TypeError),

    /// A required construction input is missing or empty.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The configuration file is not valid TOML for [`crate::StixConfig`].
    #[error("invalid configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// I/O error while reading a configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A decoded document is not a bundle envelope.
    #[error("invalid bundle: {0}")]
    InvalidBundle(String),

    /// JSON encoding or decoding failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias for object operations.
pub type ObjectResult<T> = Result<T, ObjectError>;
