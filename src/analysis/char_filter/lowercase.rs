//! Lowercase char filter implementation.
//!
//! # Examples
//!
//! ```
//! use emoscan::analysis::char_filter::CharFilter;
//! use emoscan::analysis::char_filter::lowercase::LowercaseCharFilter;
//!
//! let filter = LowercaseCharFilter::new();
//! assert_eq!(filter.filter("I Feel JOY!"), "i feel joy!");
//! ```

use crate::analysis::char_filter::CharFilter;

/// A char filter that lower-cases the whole span.
///
/// Uses Unicode-aware lower-casing, with a fast path for ASCII text.
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    /// Create a new lowercase char filter.
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> String {
        if input.is_ascii() {
            input.to_ascii_lowercase()
        } else {
            input.to_lowercase()
        }
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
