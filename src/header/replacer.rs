//! Splicing a rendered header into a source buffer

use super::extract_header;

/// Replace the leading header of `src` with `new_header`.
///
/// Without a header the new text is prepended as-is. Otherwise the first
/// occurrence of the old header's raw text is substituted, and the blank
/// lines that separated it from the code are collapsed to at most one so
/// repeated rewrites never accumulate empty lines.
///
/// The new header takes the line ending of `src`, so a CRLF file stays
/// CRLF throughout.
pub fn replace_header(src: &str, new_header: &str) -> String {
    let eol = line_ending(src);
    let new_header = with_line_ending(new_header, eol);

    let header = match extract_header(src) {
        Some(header) => header,
        None => return format!("{}{}", new_header, src),
    };
    let start = match src.find(&header.raw) {
        Some(start) => start,
        None => return format!("{}{}", new_header, src),
    };
    let end = start + header.raw.len();

    let remainder = &src[end..];
    let rest = remainder.trim_start_matches(['\r', '\n']);
    let mut breaks = remainder[..remainder.len() - rest.len()].matches('\n').count();
    // A block header (or a final line without newline) leaves the line
    // break that ends its own last line in the remainder.
    if !header.raw.ends_with('\n') {
        breaks = breaks.saturating_sub(1);
    }

    let mut out = String::with_capacity(src.len() + new_header.len());
    out.push_str(&src[..start]);
    out.push_str(&new_header);
    if breaks > 0 && !rest.is_empty() {
        out.push_str(eol);
    }
    out.push_str(rest);
    out
}

/// Line ending of the first line break in `src`; `\n` when there is none
fn line_ending(src: &str) -> &'static str {
    match src.find('\n') {
        Some(pos) if src[..pos].ends_with('\r') => "\r\n",
        _ => "\n",
    }
}

fn with_line_ending(text: &str, eol: &str) -> String {
    let normalized = text.replace("\r\n", "\n");
    if eol == "\n" {
        normalized
    } else {
        normalized.replace('\n', eol)
    }
}
