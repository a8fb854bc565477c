//! Leading comment extraction for `//` and `/* */` headers

use super::{Header, HeaderStyle};

const BOM: char = '\u{FEFF}';
const LINE_MARKER: &str = "//";
const BLOCK_OPEN: &str = "/*";
const BLOCK_CLOSE: &str = "*/";

/// Locate and parse the leading comment of `src`.
///
/// One optional byte-order mark and any leading spaces, tabs and newlines
/// are skipped. Returns `None` when the first remaining characters open
/// neither a line comment nor a terminated block comment.
pub fn extract_header(src: &str) -> Option<Header> {
    let start = header_start(src)?;
    let rest = &src[start..];

    if rest.starts_with(LINE_MARKER) {
        Some(extract_line_header(src, start))
    } else if rest.starts_with(BLOCK_OPEN) {
        extract_block_header(src, start)
    } else {
        None
    }
}

/// Byte offset of the first character after the BOM and leading whitespace
fn header_start(src: &str) -> Option<usize> {
    let body_start = if src.starts_with(BOM) { BOM.len_utf8() } else { 0 };
    let trimmed = src[body_start..].trim_start_matches([' ', '\t', '\r', '\n']);
    if trimmed.is_empty() {
        return None;
    }
    Some(src.len() - trimmed.len())
}

fn extract_line_header(src: &str, start: usize) -> Header {
    let mut pos = start;
    let mut lines = Vec::new();

    while pos < src.len() && src[pos..].starts_with(LINE_MARKER) {
        let (line, next) = match src[pos..].find('\n') {
            Some(offset) => (&src[pos..pos + offset], pos + offset + 1),
            None => (&src[pos..], src.len()),
        };
        let line = line.strip_suffix('\r').unwrap_or(line);
        lines.push(line[LINE_MARKER.len()..].trim_start());
        pos = next;
    }

    Header {
        raw: src[start..pos].to_string(),
        body: lines.join("\n").trim_end_matches('\n').to_string(),
        style: HeaderStyle::Line,
    }
}

fn extract_block_header(src: &str, start: usize) -> Option<Header> {
    let search_from = start + BLOCK_OPEN.len();
    // An unterminated block is not a header.
    let close = search_from + src[search_from..].find(BLOCK_CLOSE)?;
    let end = close + BLOCK_CLOSE.len();

    let inner = &src[search_from..close];
    let mut lines: Vec<&str> = inner.lines().collect();
    if lines.first().is_some_and(|line| line.trim().is_empty()) {
        lines.remove(0);
    }

    let mut cleaned: Vec<&str> = lines.into_iter().map(strip_continuation).collect();
    while cleaned.last().is_some_and(|line| line.trim().is_empty()) {
        cleaned.pop();
    }

    Some(Header {
        raw: src[start..end].to_string(),
        body: cleaned.join("\n").trim_end_matches('\n').to_string(),
        style: HeaderStyle::Block,
    })
}

/// Drop indentation, one `*` continuation marker and the space after it
fn strip_continuation(line: &str) -> &str {
    let line = line.trim_start();
    match line.strip_prefix('*') {
        Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
        None => line,
    }
}
