//! Reduction of header text to a canonical comparable form

use once_cell::sync::Lazy;
use regex::Regex;

/// Banner and box-drawing characters: `= * # - _ / \`
static DECORATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[=*#\-_/\\]+").expect("decoration regex must compile"));

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex must compile"));

/// Lowercase, replace decoration runs with a space, collapse whitespace
/// (newlines included) and trim.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let undecorated = DECORATION.replace_all(&lowered, " ");
    let collapsed = WHITESPACE.replace_all(&undecorated, " ");
    collapsed.trim().to_string()
}
