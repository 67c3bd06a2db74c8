//! Word analyzer: the default analysis used for keyword matching.
//!
//! # Pipeline
//!
//! 1. LowercaseCharFilter (case-fold the whole span)
//! 2. RegexTokenizer (maximal runs of letters, numbers and `_`)
//!
//! No stemming and no stop words: `"joyful"` stays `"joyful"`.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::lowercase::LowercaseCharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;

/// The default analyzer for emotional keyword matching.
#[derive(Clone, Debug)]
pub struct WordAnalyzer {
    inner: PipelineAnalyzer,
}

impl WordAnalyzer {
    /// Create a new word analyzer.
    pub fn new() -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::new()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_char_filter(Arc::new(LowercaseCharFilter::new()))
            .with_name("word");

        Ok(WordAnalyzer { inner: analyzer })
    }
}

impl Analyzer for WordAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "word"
    }
}
