/*!
# Header Module

Leading comment headers of C-family source files: extraction of the
header into a structured [`Header`], rendering a body back into a
comment style, and splicing a new header into a buffer.

Two comment dialects are understood: consecutive `//` lines and a single
`/* ... */` block.
*/

pub mod extractor;
pub mod formatter;
pub mod replacer;

use std::fmt;
use std::str::FromStr;

use crate::core::LicenseSwapError;

pub use extractor::extract_header;
pub use formatter::format_header;
pub use replacer::replace_header;

/// Comment dialect a header was written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderStyle {
    /// Consecutive `//` comment lines
    Line,
    /// One `/* ... */` block comment
    Block,
}

impl fmt::Display for HeaderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderStyle::Line => write!(f, "line"),
            HeaderStyle::Block => write!(f, "block"),
        }
    }
}

impl FromStr for HeaderStyle {
    type Err = LicenseSwapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line" => Ok(HeaderStyle::Line),
            "block" => Ok(HeaderStyle::Block),
            other => Err(LicenseSwapError::UnknownStyle(other.to_string())),
        }
    }
}

/// Leading comment of a source buffer.
///
/// `raw` is the exact text of the comment as it appears in the buffer it
/// was extracted from, `body` is the same text with all comment syntax
/// removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub raw: String,
    pub body: String,
    pub style: HeaderStyle,
}
