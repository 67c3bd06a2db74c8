//! Keyword dictionary loading.
//!
//! [`KeywordSetLoader::from_lines`] is pure: it only normalises lines that
//! were already read. The reader and file variants add the I/O and map every
//! read or decoding failure to `KeywordSourceUnavailable`.
//!
//! Lines end at `\n`, `\r\n` or a lone `\r`.
//!
//! # Examples
//!
//! ```
//! use emoscan::error::EmoscanError;
//! use emoscan::keyword::KeywordSetLoader;
//!
//! let keywords = KeywordSetLoader::from_lines(["happy", "", "  Sad  "]).unwrap();
//! assert_eq!(keywords.len(), 2);
//!
//! let empty = KeywordSetLoader::from_lines(["", "   "]);
//! assert!(matches!(empty, Err(EmoscanError::EmptyDictionary)));
//! ```

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use log::{debug, warn};

use crate::error::{EmoscanError, Result};
use crate::keyword::set::KeywordSet;

/// Emotion words written by dictionary scaffolding.
pub const DEFAULT_EMOTION_KEYWORDS: &[&str] = &[
    "happy",
    "sad",
    "angry",
    "joy",
    "fear",
    "love",
    "frustration",
    "delight",
    "sorrow",
    "excited",
    "depressed",
    "glee",
    "anxiety",
];

/// Builds [`KeywordSet`]s from line-oriented sources.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeywordSetLoader;

impl KeywordSetLoader {
    /// Build a keyword set from lines that have already been read.
    ///
    /// Returns `EmptyDictionary` when no line holds a keyword.
    pub fn from_lines<I, S>(lines: I) -> Result<KeywordSet>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = KeywordSet::from_words(lines);
        if keywords.is_empty() {
            warn!("No emotional keywords found in the dictionary; cannot perform check");
            return Err(EmoscanError::EmptyDictionary);
        }

        debug!("Loaded {} emotional keywords", keywords.len());
        Ok(keywords)
    }

    /// Read a keyword set from any reader, one keyword per line.
    pub fn from_reader<R: Read>(reader: R) -> Result<KeywordSet> {
        let lines = read_lines(reader)
            .map_err(|e| EmoscanError::keyword_source(format!("Failed to read keywords: {e}")))?;

        Self::from_lines(lines)
    }

    /// Read a keyword set from a UTF-8 file, one keyword per line.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<KeywordSet> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            warn!("Emotion keywords file not found at '{}'", path.display());
            EmoscanError::keyword_source(format!("{}: {e}", path.display()))
        })?;

        let lines = read_lines(file).map_err(|e| {
            warn!("Error reading emotion keywords file '{}': {e}", path.display());
            EmoscanError::keyword_source(format!("{}: {e}", path.display()))
        })?;

        debug!(
            "Read {} dictionary lines from '{}'",
            lines.len(),
            path.display()
        );
        Self::from_lines(lines)
    }

    /// The built-in demonstration dictionary.
    pub fn defaults() -> KeywordSet {
        KeywordSet::from_words(DEFAULT_EMOTION_KEYWORDS)
    }
}

/// Read UTF-8 text and split it into lines on `\n`, `\r\n` or `\r`.
fn read_lines<R: Read>(reader: R) -> io::Result<Vec<String>> {
    let mut text = String::new();
    BufReader::new(reader).read_to_string(&mut text)?;

    Ok(text
        .split(['\r', '\n'])
        .map(str::to_string)
        .collect())
}
