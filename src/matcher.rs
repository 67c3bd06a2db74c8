//! Emotional content matching.
//!
//! One [`MatchEngine`] serves both variants of the classifier; the
//! [`SpanScope`] decides whether it looks at the whole document or only at
//! its first sentence. [`check_files`] is the complete run: load the
//! dictionary, read the input, classify.

use std::path::Path;

use log::info;

use crate::error::Result;
use crate::keyword::KeywordSetLoader;
use crate::source::read_text;

pub mod engine;
pub mod report;
pub mod scope;

pub use engine::{MatchEngine, check_emotional_content};
pub use report::{MatchReport, MatchVerdict, diagnostic_of, flag_of};
pub use scope::SpanScope;

/// Classify the text file at `input_path` against the dictionary at
/// `keywords_path`.
///
/// The dictionary is loaded first; a missing or empty dictionary
/// short-circuits before the input is read.
pub fn check_files<K, I>(keywords_path: K, input_path: I, scope: SpanScope) -> Result<MatchReport>
where
    K: AsRef<Path>,
    I: AsRef<Path>,
{
    let keywords = KeywordSetLoader::from_file(keywords_path)?;
    let text = read_text(input_path.as_ref())?;

    let report = MatchEngine::new(keywords)?.with_scope(scope).check(&text)?;
    info!(
        "Classified '{}' ({}): flag {}",
        input_path.as_ref().display(),
        scope,
        report.flag()
    );
    Ok(report)
}
