//! Error types for classification

use thiserror::Error;

/// Error type for a single classification attempt
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// The engine produced a language outside the ISO 639-1 code space
    #[error("No ISO 639-1 code for detected language: {0}")]
    UnmappableLanguage(String),

    /// Internal engine failure
    #[error("Engine failure: {0}")]
    Engine(String),
}

/// Result type for classification operations
pub type Result<T> = std::result::Result<T, ClassifyError>;
