//! Sanitizers for text placed into generated TSX
//!
//! Display names come straight from the model file; they end up as JSX text
//! and must not open tags or expression containers.

use once_cell::sync::Lazy;
use regex::Regex;

static TYPOGRAPHIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\u{2018}\u{2019}\u{201C}\u{201D}\u{2014}]").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Makes a display name safe to print as JSX text
///
/// - Replaces smart quotes and em-dashes with ASCII equivalents
/// - Collapses whitespace (including line breaks) into single spaces
/// - Escapes `{`, `}`, `<`, `>` and `&` as HTML entities
///
/// # Examples
/// ```
/// use entiforge::generation::sanitizers::sanitize_jsx_text;
///
/// assert_eq!(sanitize_jsx_text("Due  <date>"), "Due &lt;date&gt;");
/// ```
pub fn sanitize_jsx_text(input: &str) -> String {
    let plain = TYPOGRAPHIC_RE.replace_all(input, |caps: &regex::Captures| match &caps[0] {
        "\u{2018}" | "\u{2019}" => "'",
        "\u{201C}" | "\u{201D}" => "\"",
        "\u{2014}" => "-",
        _ => "",
    });
    let collapsed = WHITESPACE_RE.replace_all(plain.trim(), " ");

    let mut safe = String::with_capacity(collapsed.len());
    for ch in collapsed.chars() {
        match ch {
            '&' => safe.push_str("&amp;"),
            '<' => safe.push_str("&lt;"),
            '>' => safe.push_str("&gt;"),
            '{' => safe.push_str("&#123;"),
            '}' => safe.push_str("&#125;"),
            other => safe.push(other),
        }
    }
    safe
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_jsx_text() {
        assert_eq!(sanitize_jsx_text("Title"), "Title");
        assert_eq!(sanitize_jsx_text("  Due\n date "), "Due date");
        assert_eq!(
            sanitize_jsx_text("\u{201C}Quoted\u{201D} \u{2014} fine"),
            "\"Quoted\" - fine"
        );
        assert_eq!(sanitize_jsx_text("{expr} & <b>"), "&#123;expr&#125; &amp; &lt;b&gt;");
    }
}
