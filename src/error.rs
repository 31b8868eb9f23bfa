//! Error types for the Compliance Validation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The validation core itself is total over well-formed input and never
//! fails; the only fallible surface is loading the rule configuration.

use thiserror::Error;

/// The main error type for the Compliance Validation Engine.
///
/// # Example
///
/// ```
/// use compliance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
