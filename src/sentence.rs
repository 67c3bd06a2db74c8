//! First-sentence extraction.
//!
//! A sentence ends at the first `.`, `!` or `?` that is followed by
//! whitespace or by the end of the text. Newlines are ordinary whitespace, not
//! boundaries. A terminator that is the very first character of the text
//! never closes a sentence: a sentence holds at least one character before its
//! terminator.
//!
//! There is no abbreviation or number awareness. `"Dr. Smith"` and `"3. 14"`
//! split after the period; `"3.14"` does not, since the period is not
//! followed by whitespace.
//!
//! # Examples
//!
//! ```
//! use emoscan::sentence::first_sentence;
//!
//! assert_eq!(first_sentence("I am happy. The weather is calm."), "I am happy.");
//! assert_eq!(first_sentence("  feeling great today  "), "feeling great today");
//! ```

/// Characters that may terminate a sentence.
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Byte offset just past the terminator of the first sentence, if any.
pub fn first_sentence_end(text: &str) -> Option<usize> {
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if idx == 0 || !SENTENCE_TERMINATORS.contains(&c) {
            continue;
        }

        let at_boundary = match chars.peek() {
            None => true,
            Some(&(_, next)) => next.is_whitespace(),
        };
        if at_boundary {
            return Some(idx + c.len_utf8());
        }
    }

    None
}

/// Return the first sentence of `text`, trimmed.
///
/// Falls back to the whole trimmed text when no terminator qualifies.
pub fn first_sentence(text: &str) -> &str {
    match first_sentence_end(text) {
        Some(end) => text[..end].trim(),
        None => text.trim(),
    }
}
