//! The keyword match engine.

use std::sync::{Arc, LazyLock};

use log::{debug, warn};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::word::WordAnalyzer;
use crate::error::{EmoscanError, Result};
use crate::keyword::KeywordSet;
use crate::matcher::report::MatchReport;
use crate::matcher::scope::SpanScope;

/// Decides whether a text span contains any keyword of a dictionary.
///
/// The span is analysed into a set of words, which is intersected with the
/// keyword set. Matching is exact per word: `"joyful"` does not match
/// `"joy"`. The engine holds no mutable state, so one engine can serve any
/// number of threads.
///
/// # Examples
///
/// ```
/// use emoscan::keyword::KeywordSet;
/// use emoscan::matcher::{MatchEngine, SpanScope};
///
/// let engine = MatchEngine::new(KeywordSet::from_words(["happy"]))
///     .unwrap()
///     .with_scope(SpanScope::FirstSentence);
///
/// let report = engine.check("The weather is calm. I am happy.").unwrap();
/// assert_eq!(report.span, "The weather is calm.");
/// assert_eq!(report.flag(), 0);
/// ```
#[derive(Clone)]
pub struct MatchEngine {
    keywords: KeywordSet,
    analyzer: Arc<dyn Analyzer>,
    scope: SpanScope,
}

impl MatchEngine {
    /// Create an engine over `keywords` with the word analyzer and document scope.
    ///
    /// Fails with `EmptyDictionary` when `keywords` is empty.
    pub fn new(keywords: KeywordSet) -> Result<Self> {
        if keywords.is_empty() {
            return Err(EmoscanError::EmptyDictionary);
        }

        Ok(MatchEngine {
            keywords,
            analyzer: Arc::new(shared_word_analyzer()?.clone()),
            scope: SpanScope::Document,
        })
    }

    /// Replace the analyzer.
    pub fn with_analyzer(mut self, analyzer: Arc<dyn Analyzer>) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Set the span selection strategy.
    pub fn with_scope(mut self, scope: SpanScope) -> Self {
        self.scope = scope;
        self
    }

    /// Get the keyword set.
    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    /// Get the span selection strategy.
    pub fn scope(&self) -> SpanScope {
        self.scope
    }

    /// Test an already selected span for keywords.
    pub fn is_emotional(&self, span: &str) -> Result<bool> {
        let words = self.analyzer.word_set(span)?;
        Ok(self.keywords.intersects(&words))
    }

    /// Classify a document.
    ///
    /// Fails with `EmptyInput` when the text holds nothing but whitespace;
    /// otherwise selects the span for the configured scope and matches it.
    pub fn check(&self, text: &str) -> Result<MatchReport> {
        if text.trim().is_empty() {
            warn!("Input text is empty; cannot perform check");
            return Err(EmoscanError::EmptyInput);
        }

        let span = self.scope.select(text);
        let words = self.analyzer.word_set(span)?;
        let matched = self.keywords.intersection(&words);

        debug!(
            "Scope {}: {} distinct words, {} matched keywords",
            self.scope,
            words.len(),
            matched.len()
        );

        Ok(MatchReport::new(self.scope, span, matched, words.len()))
    }
}

impl std::fmt::Debug for MatchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchEngine")
            .field("keywords", &self.keywords.len())
            .field("analyzer", &self.analyzer.name())
            .field("scope", &self.scope)
            .finish()
    }
}

static WORD_ANALYZER: LazyLock<std::result::Result<WordAnalyzer, String>> =
    LazyLock::new(|| WordAnalyzer::new().map_err(|e| e.to_string()));

fn shared_word_analyzer() -> Result<&'static WordAnalyzer> {
    WORD_ANALYZER
        .as_ref()
        .map_err(|e| EmoscanError::analysis(e.clone()))
}

/// Whether `span` contains any of `keywords`, using the word analyzer.
///
/// Fails with `EmptyDictionary` when `keywords` is empty.
pub fn check_emotional_content(keywords: &KeywordSet, span: &str) -> Result<bool> {
    if keywords.is_empty() {
        return Err(EmoscanError::EmptyDictionary);
    }

    let words = shared_word_analyzer()?.word_set(span)?;
    Ok(keywords.intersects(&words))
}
