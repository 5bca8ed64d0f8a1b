//! Text helpers shared by the renderers.

/// Escape text for use in HTML element content or attribute values.
///
/// The TOC renderer runs every row label, link target and the top link
/// through this before writing markup.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(escape_html("Q&A <intro>"), "Q&amp;A &lt;intro&gt;");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
