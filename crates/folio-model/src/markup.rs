//! HTML escaping helpers

/// Escape text for use as element content
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Escape text for use inside a double-quoted attribute
#[inline]
#[must_use]
pub fn escape_attr(s: &str) -> String {
    escape_html(s)
}
