//! Character classes and literal decoding shared by the parser and printer

pub fn is_ident_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_' || ch == '$'
}

pub fn is_ident_continue(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '$'
}

/// Decode a quoted string literal, quotes included, into its value
pub fn unescape(raw: &str) -> String {
    let inner = raw
        .get(1..raw.len().saturating_sub(1))
        .unwrap_or_default();
    let mut value = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            value.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => value.push('\n'),
            Some('r') => value.push('\r'),
            Some('t') => value.push('\t'),
            Some('0') => value.push('\0'),
            Some('\n') => {}
            Some(other) => value.push(other),
            None => {}
        }
    }
    value
}
