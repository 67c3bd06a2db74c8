//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the raw text span before it is passed to the
//! tokenizer. The only normalisation the classifier needs is case folding,
//! which must happen on the whole span so that every word the tokenizer
//! extracts is already lower case.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseCharFilter`] - Unicode lower-casing of the span

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod lowercase;

pub use lowercase::LowercaseCharFilter;
