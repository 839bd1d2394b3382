//! Error types for tint

use thiserror::Error;

/// Result type alias for tint operations
pub type Result<T> = std::result::Result<T, TintError>;

/// Highlighter error types
///
/// The tokenization engine itself is total and never fails; these errors
/// only arise at the edges (reading input, loading configuration).
#[derive(Error, Debug)]
pub enum TintError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Unknown token kind in theme: {0}")]
    UnknownKind(String),

    #[error("{0}")]
    Message(String),
}
