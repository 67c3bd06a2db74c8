//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step after char filtering: they split a text span
//! into word tokens. Separators (whitespace, punctuation) are discarded, never
//! emitted as tokens.
//!
//! # Available Tokenizers
//!
//! - [`regex::RegexTokenizer`] - Regex-based word extraction (letters, numbers and `_` by default)
//!
//! # Examples
//!
//! ```
//! use emoscan::analysis::tokenizer::Tokenizer;
//! use emoscan::analysis::tokenizer::regex::RegexTokenizer;
//!
//! let tokenizer = RegexTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("I feel joy!").unwrap().collect();
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[2].text, "joy");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a tokenizer can be shared by analyses
/// running on several threads.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod regex;

pub use self::regex::RegexTokenizer;
