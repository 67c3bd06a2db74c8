//! Text analysis module for Emoscan.
//!
//! This module turns a text span into the set of words that is intersected
//! with the keyword dictionary: char filters normalise the span, a tokenizer
//! extracts word runs, and an analyzer ties the two together.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use char_filter::*;
pub use token::*;
pub use tokenizer::*;
