//! Error types for the Emoscan library.
//!
//! All errors are represented by the [`EmoscanError`] enum. Four of its
//! variants are *diagnostics*: conditions under which the classifier cannot
//! decide (missing or empty dictionary, missing or empty input). They are
//! ordinary errors so that `?` short-circuits the computation, and they can be
//! recognised through [`EmoscanError::diagnostic`] so callers can choose
//! between treating them as "not emotional" or as a hard failure.
//!
//! # Examples
//!
//! ```
//! use emoscan::error::{Diagnostic, EmoscanError, Result};
//!
//! fn load() -> Result<()> {
//!     Err(EmoscanError::EmptyDictionary)
//! }
//!
//! let err = load().unwrap_err();
//! assert_eq!(err.diagnostic(), Some(Diagnostic::EmptyDictionary));
//! ```

use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The main error type for Emoscan operations.
#[derive(Error, Debug)]
pub enum EmoscanError {
    /// The keyword source could not be read (missing, unreadable, not UTF-8).
    #[error("Keyword source unavailable: {0}")]
    KeywordSourceUnavailable(String),

    /// The keyword source was read but contained no usable keywords.
    #[error("Keyword dictionary is empty")]
    EmptyDictionary,

    /// The input text source could not be read.
    #[error("Text source unavailable: {0}")]
    TextSourceUnavailable(String),

    /// The input text contains nothing but whitespace.
    #[error("Input text is empty")]
    EmptyInput,

    /// I/O errors outside the two sources (scaffolding, output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with EmoscanError.
pub type Result<T> = std::result::Result<T, EmoscanError>;

impl EmoscanError {
    /// Create a new keyword source error.
    pub fn keyword_source<S: Into<String>>(msg: S) -> Self {
        EmoscanError::KeywordSourceUnavailable(msg.into())
    }

    /// Create a new text source error.
    pub fn text_source<S: Into<String>>(msg: S) -> Self {
        EmoscanError::TextSourceUnavailable(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        EmoscanError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        EmoscanError::Config(msg.into())
    }

    /// The diagnostic condition this error represents, if any.
    pub fn diagnostic(&self) -> Option<Diagnostic> {
        match self {
            EmoscanError::KeywordSourceUnavailable(_) => Some(Diagnostic::KeywordSourceUnavailable),
            EmoscanError::EmptyDictionary => Some(Diagnostic::EmptyDictionary),
            EmoscanError::TextSourceUnavailable(_) => Some(Diagnostic::TextSourceUnavailable),
            EmoscanError::EmptyInput => Some(Diagnostic::EmptyInput),
            _ => None,
        }
    }

    /// Whether this error is a diagnostic ("cannot classify") rather than a fault.
    pub fn is_diagnostic(&self) -> bool {
        self.diagnostic().is_some()
    }
}

/// Conditions under which a classification could not be completed.
///
/// Every diagnostic collapses to flag `0` in lenient mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diagnostic {
    /// Keyword source missing, unreadable or undecodable.
    KeywordSourceUnavailable,
    /// Keyword source yielded zero keywords.
    EmptyDictionary,
    /// Input text source missing, unreadable or undecodable.
    TextSourceUnavailable,
    /// Input text is empty or all whitespace.
    EmptyInput,
}

impl Diagnostic {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Diagnostic::KeywordSourceUnavailable => "keyword_source_unavailable",
            Diagnostic::EmptyDictionary => "empty_dictionary",
            Diagnostic::TextSourceUnavailable => "text_source_unavailable",
            Diagnostic::EmptyInput => "empty_input",
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = EmoscanError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = EmoscanError::keyword_source("missing.txt: not found");
        assert_eq!(
            error.to_string(),
            "Keyword source unavailable: missing.txt: not found"
        );

        let error = EmoscanError::config("bad scope");
        assert_eq!(error.to_string(), "Configuration error: bad scope");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = EmoscanError::from(io_error);

        match error {
            EmoscanError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
        assert!(!error.is_diagnostic());
    }

    #[test]
    fn test_diagnostics_are_distinguishable() {
        let errors = [
            EmoscanError::keyword_source("a"),
            EmoscanError::EmptyDictionary,
            EmoscanError::text_source("b"),
            EmoscanError::EmptyInput,
        ];
        let codes: Vec<&str> = errors
            .iter()
            .map(|e| e.diagnostic().unwrap().code())
            .collect();

        assert_eq!(
            codes,
            vec![
                "keyword_source_unavailable",
                "empty_dictionary",
                "text_source_unavailable",
                "empty_input"
            ]
        );
    }

    #[test]
    fn test_diagnostic_serializes_as_code() {
        let json = serde_json::to_string(&Diagnostic::EmptyInput).unwrap();
        assert_eq!(json, "\"empty_input\"");
    }
}
