//! Analyzers that turn a text span into the tokens compared against keywords.
//!
//! ```text
//! Text span → Char filters → Tokenizer → Token stream
//! ```
//!
//! # Available Implementations
//!
//! - [`PipelineAnalyzer`](pipeline::PipelineAnalyzer) - Custom char filters + tokenizer
//! - [`WordAnalyzer`](word::WordAnalyzer) - Lower-case, then extract word runs
//!
//! # Examples
//!
//! ```
//! use emoscan::analysis::analyzer::Analyzer;
//! use emoscan::analysis::analyzer::word::WordAnalyzer;
//!
//! let analyzer = WordAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("I Feel JOY!").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "i");
//! assert_eq!(tokens[2].text, "joy");
//! ```

use std::collections::HashSet;

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so one analyzer can serve analyses on
/// several threads at once.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Analyze the text and collect the distinct token texts.
    ///
    /// Order and frequency of tokens are discarded.
    fn word_set(&self, text: &str) -> Result<HashSet<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }
}

pub mod pipeline;
pub mod word;

pub use pipeline::PipelineAnalyzer;
pub use word::WordAnalyzer;
