//! Normalised keyword set.

use std::collections::HashSet;
use std::sync::Arc;

/// An immutable set of normalised keywords.
///
/// Every entry is trimmed, lower-cased and non-empty. The set is cheap to
/// clone so that one dictionary can back analyses on several threads.
///
/// # Examples
///
/// ```
/// use emoscan::keyword::KeywordSet;
///
/// let keywords = KeywordSet::from_words(["  Happy ", "JOY", "", "joy"]);
/// assert_eq!(keywords.len(), 2);
/// assert!(keywords.contains("happy"));
/// assert!(keywords.contains("joy"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeywordSet {
    words: Arc<HashSet<String>>,
}

impl KeywordSet {
    /// Build a set from raw words, normalising each one and dropping blanks.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|word| Self::normalize(word.as_ref()))
            .collect();

        KeywordSet {
            words: Arc::new(words),
        }
    }

    /// Normalise a single dictionary line; `None` for blank lines.
    pub fn normalize(line: &str) -> Option<String> {
        let word = line.trim().to_lowercase();
        if word.is_empty() { None } else { Some(word) }
    }

    /// Check whether a (normalised) word is in the set.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the number of keywords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the keywords in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// The keywords in lexicographic order.
    pub fn sorted(&self) -> Vec<String> {
        let mut words: Vec<String> = self.words.iter().cloned().collect();
        words.sort();
        words
    }

    /// Keywords present in `words`, sorted.
    pub fn intersection(&self, words: &HashSet<String>) -> Vec<String> {
        // Iterate over the smaller side.
        let mut matched: Vec<String> = if words.len() < self.words.len() {
            words
                .iter()
                .filter(|w| self.words.contains(*w))
                .cloned()
                .collect()
        } else {
            self.words
                .iter()
                .filter(|w| words.contains(*w))
                .cloned()
                .collect()
        };
        matched.sort();
        matched
    }

    /// Whether any of `words` is a keyword.
    pub fn intersects(&self, words: &HashSet<String>) -> bool {
        if words.len() < self.words.len() {
            words.iter().any(|w| self.words.contains(w))
        } else {
            self.words.iter().any(|w| words.contains(w))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(KeywordSet::normalize("  Joy\t"), Some("joy".to_string()));
        assert_eq!(KeywordSet::normalize("ANXIETY\r"), Some("anxiety".to_string()));
        assert_eq!(KeywordSet::normalize("   "), None);
        assert_eq!(KeywordSet::normalize(""), None);
    }

    #[test]
    fn test_duplicates_collapse() {
        let keywords = KeywordSet::from_words(["sad", "Sad", " SAD ", "angry"]);
        assert_eq!(keywords.len(), 2);
        assert_eq!(keywords.sorted(), vec!["angry", "sad"]);
    }

    #[test]
    fn test_order_irrelevant() {
        let a = KeywordSet::from_words(["joy", "fear", "love"]);
        let b = KeywordSet::from_words(["love", "joy", "fear", "joy"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_intersection() {
        let keywords = KeywordSet::from_words(["joy", "fear", "love"]);
        let words: HashSet<String> = ["i", "love", "joy"].iter().map(|s| s.to_string()).collect();

        assert!(keywords.intersects(&words));
        assert_eq!(keywords.intersection(&words), vec!["joy", "love"]);

        let neutral: HashSet<String> = ["calm"].iter().map(|s| s.to_string()).collect();
        assert!(!keywords.intersects(&neutral));
        assert!(keywords.intersection(&neutral).is_empty());
    }

    #[test]
    fn test_multi_word_lines_are_kept_whole() {
        // A line with inner spaces can never equal a single token.
        let keywords = KeywordSet::from_words(["very happy"]);
        assert!(keywords.contains("very happy"));
        assert!(!keywords.contains("happy"));
    }
}
