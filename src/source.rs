//! Reading input documents.
//!
//! The core classifier works on strings; this module is the I/O boundary for
//! documents, mapping every read or UTF-8 decoding failure to
//! `TextSourceUnavailable`. Keyword files are read by
//! [`KeywordSetLoader`](crate::keyword::KeywordSetLoader).

use std::fs;
use std::io::Read;
use std::path::Path;

use log::{debug, warn};

use crate::error::{EmoscanError, Result};

/// Read a UTF-8 text document.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        warn!("Error reading input text file '{}': {e}", path.display());
        EmoscanError::text_source(format!("{}: {e}", path.display()))
    })?;

    debug!("Read {} bytes from '{}'", text.len(), path.display());
    Ok(text)
}

/// Read a UTF-8 text document from any reader.
pub fn read_text_from<R: Read>(mut reader: R) -> Result<String> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| EmoscanError::text_source(format!("Failed to read text: {e}")))?;
    Ok(text)
}
