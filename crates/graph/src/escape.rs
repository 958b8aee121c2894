//! Escaping of domain names for identifiers and label markup.

/// Characters URI-component encoding leaves alone but `urlencoding` escapes.
const URI_COMPONENT_MARKS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Percent-encode `name` the way URI components are encoded: everything but
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )` becomes `%XX` per UTF-8 byte.
fn encode_uri_component(name: &str) -> String {
    let mut encoded = urlencoding::encode(name).into_owned();
    // A literal `%` is encoded as `%25`, so any remaining `%XX` is an escape.
    for (escape, mark) in URI_COMPONENT_MARKS {
        encoded = encoded.replace(escape, mark);
    }
    encoded
}

/// Turn a name into an SVG element `id` that is also usable inside a
/// `url(#...)` fragment.
///
/// Colons are kept, underscores tripled, apostrophes become `__`, and every
/// remaining `%` of the percent-encoding becomes `_`. Names that differ only
/// in underscores and apostrophes may still collide.
pub fn encode_name(name: &str) -> String {
    encode_uri_component(name)
        .replace("%3A", ":")
        .replace('_', "___")
        .replace('\'', "__")
        .replace('%', "_")
}

/// Escape text for an HTML-like label or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
