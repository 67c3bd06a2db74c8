//! Analyzer configuration.
//!
//! Paths and behaviour switches are passed explicitly into every entry point.
//! A configuration can be read from a JSON file; missing fields take the
//! defaults below.
//!
//! ```json
//! {
//!   "keywords_path": "dictionaries/emotion_words.txt",
//!   "input_path": "notes/today.txt",
//!   "scope": "first-sentence",
//!   "strict": true
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EmoscanError, Result};
use crate::matcher::SpanScope;

/// Default keyword dictionary file name.
pub const DEFAULT_KEYWORDS_PATH: &str = "emotion_words.txt";

/// Default input document file name.
pub const DEFAULT_INPUT_PATH: &str = "input_paragraph.txt";

/// Configuration for one classification run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Keyword dictionary, one keyword per line.
    pub keywords_path: PathBuf,
    /// Document to classify.
    pub input_path: PathBuf,
    /// Which part of the document to analyse.
    pub scope: SpanScope,
    /// Report diagnostics as failures instead of flag 0.
    pub strict: bool,
    /// Create missing source files with example content.
    pub scaffold: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig {
            keywords_path: PathBuf::from(DEFAULT_KEYWORDS_PATH),
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            scope: SpanScope::Document,
            strict: false,
            scaffold: false,
        }
    }
}

impl AnalyzerConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            EmoscanError::config(format!(
                "Failed to read configuration file '{}': {}",
                path.display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            EmoscanError::config(format!(
                "Failed to parse configuration JSON from '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Set the keyword dictionary path.
    pub fn with_keywords_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.keywords_path = path.into();
        self
    }

    /// Set the input document path.
    pub fn with_input_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.input_path = path.into();
        self
    }

    /// Set the span scope.
    pub fn with_scope(mut self, scope: SpanScope) -> Self {
        self.scope = scope;
        self
    }

    /// Enable or disable strict mode.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Enable or disable scaffolding of missing files.
    pub fn scaffold(mut self, scaffold: bool) -> Self {
        self.scaffold = scaffold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.keywords_path, PathBuf::from("emotion_words.txt"));
        assert_eq!(config.input_path, PathBuf::from("input_paragraph.txt"));
        assert_eq!(config.scope, SpanScope::Document);
        assert!(!config.strict);
        assert!(!config.scaffold);
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"input_path": "notes/today.txt", "scope": "first-sentence"}}"#
        )
        .unwrap();

        let config = AnalyzerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.input_path, PathBuf::from("notes/today.txt"));
        assert_eq!(config.scope, SpanScope::FirstSentence);
        assert_eq!(config.keywords_path, PathBuf::from(DEFAULT_KEYWORDS_PATH));
    }

    #[test]
    fn test_from_file_invalid() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"scope": "paragraph"}}"#).unwrap();

        let result = AnalyzerConfig::from_file(file.path());
        assert!(matches!(result, Err(EmoscanError::Config(_))));
    }

    #[test]
    fn test_builder() {
        let config = AnalyzerConfig::default()
            .with_keywords_path("k.txt")
            .with_input_path("i.txt")
            .with_scope(SpanScope::FirstSentence)
            .strict(true)
            .scaffold(true);

        assert_eq!(config.keywords_path, PathBuf::from("k.txt"));
        assert_eq!(config.input_path, PathBuf::from("i.txt"));
        assert!(config.strict);
        assert!(config.scaffold);
    }
}
