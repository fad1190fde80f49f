//! Error types for vertsql

use thiserror::Error;

/// Result type alias for vertsql operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Error types for SQL building and connection management
#[derive(Debug, Error)]
pub enum SqlError {
    /// Invalid identifier or argument
    #[error("Validation error: {0}")]
    Validation(String),

    /// Named connection does not exist
    #[error("Unknown connection '{0}'")]
    UnknownConnection(String),

    /// Named connection already exists and overwrite was not requested
    #[error("Connection '{0}' already exists")]
    ConnectionExists(String),

    /// A connection option referenced an unset environment variable
    #[error("Environment variable '{var}' for connection option '{option}' is not set")]
    MissingEnv { option: String, var: String },

    /// Underlying file I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Connection file could not be parsed or serialized
    #[error("Config error: {0}")]
    Config(String),

    /// Malformed input file
    #[error("Parse error: {0}")]
    Parse(String),
}

impl SqlError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an unknown-connection error
    pub fn is_unknown_connection(&self) -> bool {
        matches!(self, Self::UnknownConnection(_))
    }
}

impl From<toml::de::Error> for SqlError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for SqlError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Config(err.to_string())
    }
}
