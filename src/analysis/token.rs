//! Token types for text analysis.
//!
//! A [`Token`] is one word extracted from a text span: a maximal run of word
//! characters, case-folded by the analysis pipeline before it is compared
//! against the keyword dictionary. Tokens are ephemeral; the match engine
//! materialises them only long enough to build a set for one intersection
//! test.
//!
//! # Examples
//!
//! ```
//! use emoscan::analysis::token::Token;
//!
//! let token = Token::with_offsets("joy", 3, 12, 15);
//! assert_eq!(token.text, "joy");
//! assert_eq!(token.position, 3);
//! assert_eq!(token.to_string(), "joy");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the analysed text
    pub start_offset: usize,

    /// The byte offset where this token ends in the analysed text
    pub end_offset: usize,
}

impl Token {
    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
