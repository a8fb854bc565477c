//! Rendering a header body back into a comment style

use super::HeaderStyle;

/// Render `body` as a comment in `style`, always ending with a newline.
///
/// Blank body lines become a bare `//` or ` *` so the output carries no
/// trailing whitespace.
pub fn format_header(body: &str, style: HeaderStyle) -> String {
    let lines = body_lines(body);

    match style {
        HeaderStyle::Line => {
            let mut out: Vec<String> = lines
                .iter()
                .map(|line| {
                    if line.trim().is_empty() {
                        "//".to_string()
                    } else {
                        format!("// {}", line)
                    }
                })
                .collect();
            out.push(String::new());
            out.join("\n")
        }
        HeaderStyle::Block => {
            let mut out = Vec::with_capacity(lines.len() + 2);
            out.push("/*".to_string());
            for line in &lines {
                if line.trim().is_empty() {
                    out.push(" *".to_string());
                } else {
                    out.push(format!(" * {}", line));
                }
            }
            out.push(" */\n".to_string());
            out.join("\n")
        }
    }
}

/// An empty body still renders as one (blank) comment line
fn body_lines(body: &str) -> Vec<&str> {
    let lines: Vec<&str> = body.lines().collect();
    if lines.is_empty() {
        vec![body]
    } else {
        lines
    }
}
