//! Emotional keyword dictionaries.
//!
//! A dictionary is a line-oriented list of keywords, one per line. Loading it
//! produces a normalised [`KeywordSet`]: trimmed, lower-cased, deduplicated,
//! blank lines skipped. A dictionary that yields no keywords is an error
//! ([`EmptyDictionary`](crate::error::EmoscanError::EmptyDictionary)), never
//! an empty set that silently matches nothing.

pub mod loader;
pub mod set;

pub use loader::{DEFAULT_EMOTION_KEYWORDS, KeywordSetLoader};
pub use set::KeywordSet;
