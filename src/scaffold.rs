//! Example content for first runs.
//!
//! When asked to, the command-line adapter writes a default dictionary and an
//! example document in place of missing files. Existing files are never
//! touched.

use std::fs;
use std::path::Path;

use log::warn;

use crate::error::Result;
use crate::keyword::DEFAULT_EMOTION_KEYWORDS;
use crate::matcher::SpanScope;

/// Example document for whole-document analysis.
pub const EXAMPLE_DOCUMENT: &str = "I am feeling very happy today. This brings me great joy and excitement!\n\
The weather is quite neutral and calm. Nothing special is happening.\n";

/// Example document for first-sentence analysis.
pub const EXAMPLE_FIRST_SENTENCE_DOCUMENT: &str = "I am feeling very happy today. This brings me great joy and excitement!\n\
However, the next part of the story is quite different. It gets complicated.\n\
And finally, the conclusion arrived. The end.\n";

/// Example document for `scope`.
pub fn example_document(scope: SpanScope) -> &'static str {
    match scope {
        SpanScope::Document => EXAMPLE_DOCUMENT,
        SpanScope::FirstSentence => EXAMPLE_FIRST_SENTENCE_DOCUMENT,
    }
}

/// Write the default dictionary to `path` unless it exists.
///
/// Returns `true` when the file was created.
pub fn ensure_keyword_file<P: AsRef<Path>>(path: P) -> Result<bool> {
    let mut content = DEFAULT_EMOTION_KEYWORDS.join("\n");
    content.push('\n');
    write_if_missing(path.as_ref(), &content)
}

/// Write the example document for `scope` to `path` unless it exists.
///
/// Returns `true` when the file was created.
pub fn ensure_input_file<P: AsRef<Path>>(path: P, scope: SpanScope) -> Result<bool> {
    write_if_missing(path.as_ref(), example_document(scope))
}

fn write_if_missing(path: &Path, content: &str) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    warn!(
        "'{}' not found. Creating an example file; replace its content with your own.",
        path.display()
    );
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::tempdir;

    use crate::keyword::KeywordSetLoader;

    #[test]
    fn test_creates_missing_keyword_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("emotion_words.txt");

        assert!(ensure_keyword_file(&path).unwrap());
        let keywords = KeywordSetLoader::from_file(&path).unwrap();
        assert_eq!(keywords.len(), 13);
        assert!(keywords.contains("glee"));
    }

    #[test]
    fn test_existing_file_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "mine").unwrap();

        assert!(!ensure_input_file(&path, SpanScope::Document).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "mine");
    }

    #[test]
    fn test_example_document_per_scope() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.txt");

        assert!(ensure_input_file(&path, SpanScope::FirstSentence).unwrap());
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("The end."));
        assert_ne!(
            example_document(SpanScope::Document),
            example_document(SpanScope::FirstSentence)
        );
    }
}
