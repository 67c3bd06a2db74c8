//! Span selection: which part of a document the match engine looks at.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::sentence::first_sentence;

/// Span selection strategy for the match engine.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpanScope {
    /// Scan the whole document.
    #[default]
    Document,
    /// Scan only the first sentence.
    FirstSentence,
}

impl SpanScope {
    /// Select the span of `text` this scope analyses.
    pub fn select<'a>(&self, text: &'a str) -> &'a str {
        match self {
            SpanScope::Document => text,
            SpanScope::FirstSentence => first_sentence(text),
        }
    }

    /// Short human description used in narration.
    pub fn subject(&self) -> &'static str {
        match self {
            SpanScope::Document => "The input text",
            SpanScope::FirstSentence => "The first sentence of the input text",
        }
    }
}

impl fmt::Display for SpanScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanScope::Document => f.write_str("document"),
            SpanScope::FirstSentence => f.write_str("first-sentence"),
        }
    }
}
