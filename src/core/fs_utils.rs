//! File system utility helpers (UTF-8 readers/writers, whitespace cleanup)
use std::fs;
use std::path::Path;

use super::errors::{LicenseSwapError, Result};

/// Read a source file as UTF-8 text.
///
/// A leading byte-order mark is kept: header extraction skips it, and the
/// rewritten file must still start with it.
pub fn read_text_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| LicenseSwapError::io(path, e))
}

/// Overwrite a file with the given UTF-8 text. No backup is made.
pub fn write_text_file(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|e| LicenseSwapError::io(path, e))
}

/// Strip trailing spaces and tabs from every line.
///
/// Line endings (`\n` or `\r\n`) and the presence of a final newline are
/// preserved.
pub fn trim_trailing_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for segment in text.split_inclusive('\n') {
        let (line, ending) = if let Some(line) = segment.strip_suffix("\r\n") {
            (line, "\r\n")
        } else if let Some(line) = segment.strip_suffix('\n') {
            (line, "\n")
        } else {
            (segment, "")
        };
        out.push_str(line.trim_end_matches([' ', '\t']));
        out.push_str(ending);
    }
    out
}
