//! Match results.

use serde::{Deserialize, Serialize};

use crate::error::{Diagnostic, Result};
use crate::matcher::scope::SpanScope;

/// Whether a span contains emotional keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchVerdict {
    /// At least one keyword occurs in the span.
    Emotional,
    /// No keyword occurs in the span.
    Neutral,
}

impl MatchVerdict {
    /// Integer flag: 1 for emotional, 0 for neutral.
    pub fn flag(&self) -> u8 {
        match self {
            MatchVerdict::Emotional => 1,
            MatchVerdict::Neutral => 0,
        }
    }

    /// Whether the verdict is emotional.
    pub fn is_emotional(&self) -> bool {
        matches!(self, MatchVerdict::Emotional)
    }
}

impl From<bool> for MatchVerdict {
    fn from(emotional: bool) -> Self {
        if emotional {
            MatchVerdict::Emotional
        } else {
            MatchVerdict::Neutral
        }
    }
}

/// The result of one completed classification.
///
/// The verdict and its flag are fixed by [`MatchReport::new`] and only
/// readable through accessors; both are still written out when serialized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    verdict: MatchVerdict,
    flag: u8,
    pub scope: SpanScope,
    /// The span that was analysed (whole text or first sentence).
    pub span: String,
    /// Keywords found in the span, sorted.
    pub matched_keywords: Vec<String>,
    /// Number of distinct words in the span.
    pub distinct_words: usize,
}

impl MatchReport {
    /// Create a report; the flag is derived from the matched keywords.
    pub fn new(
        scope: SpanScope,
        span: impl Into<String>,
        matched_keywords: Vec<String>,
        distinct_words: usize,
    ) -> Self {
        let verdict = MatchVerdict::from(!matched_keywords.is_empty());
        MatchReport {
            verdict,
            flag: verdict.flag(),
            scope,
            span: span.into(),
            matched_keywords,
            distinct_words,
        }
    }

    /// The verdict for the span.
    pub fn verdict(&self) -> MatchVerdict {
        self.verdict
    }

    /// Integer flag: 1 for emotional, 0 for neutral.
    pub fn flag(&self) -> u8 {
        self.flag
    }

    /// Whether the span is emotional.
    pub fn is_emotional(&self) -> bool {
        self.verdict.is_emotional()
    }
}

/// Collapse a classification outcome to its flag.
///
/// Every error, diagnostics included, yields `0`.
pub fn flag_of(outcome: &Result<MatchReport>) -> u8 {
    outcome.as_ref().map(MatchReport::flag).unwrap_or(0)
}

/// The diagnostic of a failed classification, if it failed with one.
pub fn diagnostic_of(outcome: &Result<MatchReport>) -> Option<Diagnostic> {
    outcome.as_ref().err().and_then(|e| e.diagnostic())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EmoscanError;

    #[test]
    fn test_report_flag_follows_matches() {
        let report = MatchReport::new(SpanScope::Document, "I feel joy!", vec!["joy".into()], 3);
        assert_eq!(report.flag(), 1);
        assert_eq!(report.verdict(), MatchVerdict::Emotional);

        let report = MatchReport::new(SpanScope::Document, "calm", Vec::new(), 1);
        assert_eq!(report.flag(), 0);
        assert_eq!(report.verdict().flag(), report.flag());
        assert!(!report.is_emotional());
    }

    #[test]
    fn test_flag_of_errors_is_zero() {
        let outcome: Result<MatchReport> = Err(EmoscanError::EmptyInput);
        assert_eq!(flag_of(&outcome), 0);
        assert_eq!(diagnostic_of(&outcome), Some(Diagnostic::EmptyInput));

        let outcome: Result<MatchReport> = Err(EmoscanError::analysis("boom"));
        assert_eq!(flag_of(&outcome), 0);
        assert_eq!(diagnostic_of(&outcome), None);
    }

    #[test]
    fn test_report_serialization() {
        let report = MatchReport::new(
            SpanScope::FirstSentence,
            "I am happy.",
            vec!["happy".into()],
            3,
        );
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["verdict"], "emotional");
        assert_eq!(value["flag"], 1);
        assert_eq!(value["scope"], "first-sentence");
        assert_eq!(value["matched_keywords"][0], "happy");
    }
}
