//! HTML escaping for untrusted board text.
//!
//! Text is escaped once before it is stored and again whenever it is read
//! back, so escaping must be idempotent: an `&` that already opens one of the
//! entities produced here is left alone.

const ENTITIES: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&#x27;"];

/// Escapes `&`, `<`, `>`, `"` and `'`.
///
/// `sanitize(sanitize(text)) == sanitize(text)` holds for every input.
#[must_use]
pub fn sanitize(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for (index, c) in text.char_indices() {
        match c {
            '&' if starts_with_entity(&text[index..]) => escaped.push('&'),
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }

    escaped
}

fn starts_with_entity(text: &str) -> bool {
    ENTITIES.iter().any(|entity| text.starts_with(entity))
}
