//! The HTML exports are single-byte Hebrew (ISO-8859-8), not UTF-8.

use encoding_rs::ISO_8859_8;
use std::fs;
use std::path::Path;

use crate::error::ImportError;

/// Decode bytes strictly; `None` if any byte is unmapped in ISO-8859-8.
pub fn decode_hebrew(bytes: &[u8]) -> Option<String> {
    ISO_8859_8
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|s| s.into_owned())
}

/// Read and decode an HTML export.
pub fn read_hebrew_text(path: &Path) -> Result<String, ImportError> {
    let bytes = fs::read(path).map_err(|e| ImportError::io(path, e))?;
    decode_hebrew(&bytes).ok_or_else(|| ImportError::Decode {
        path: path.to_path_buf(),
    })
}
