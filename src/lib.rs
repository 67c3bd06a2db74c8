//! # Emoscan
//!
//! Detects whether a text, or just its first sentence, contains any word from
//! an emotional keyword dictionary.
//!
//! Matching is exact and case-insensitive: the text is lower-cased, split
//! into word runs, and the resulting word set is intersected with the
//! normalised dictionary.
//!
//! ## Features
//!
//! - Pure functions over in-memory strings, safe to share across threads
//! - Whole-document or first-sentence analysis with one engine
//! - Typed diagnostics for missing or empty dictionaries and inputs
//! - A command-line front end with human, JSON and CSV output
//!
//! # Examples
//!
//! ```
//! use emoscan::keyword::KeywordSetLoader;
//! use emoscan::matcher::{MatchEngine, SpanScope};
//!
//! let keywords = KeywordSetLoader::from_lines(["happy", "joy"]).unwrap();
//! let engine = MatchEngine::new(keywords).unwrap();
//!
//! assert_eq!(engine.check("Calm morning. Then I felt joy.").unwrap().flag(), 1);
//!
//! let engine = engine.with_scope(SpanScope::FirstSentence);
//! assert_eq!(engine.check("Calm morning. Then I felt joy.").unwrap().flag(), 0);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod keyword;
pub mod matcher;
pub mod scaffold;
pub mod sentence;
pub mod source;

pub mod prelude {
    pub use crate::error::{Diagnostic, EmoscanError, Result};
    pub use crate::keyword::{KeywordSet, KeywordSetLoader};
    pub use crate::matcher::{MatchEngine, MatchReport, MatchVerdict, SpanScope};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
