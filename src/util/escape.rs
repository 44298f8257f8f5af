//! HTML escaping for markup built from untrusted project data.

#[cfg(test)]
#[path = "escape_test.rs"]
mod escape_test;

/// Replace the five HTML-reserved characters with entity references.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
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
