//! Low-level helpers shared by the HTML writers.
use std::borrow::Cow;

/// Escape text for use in element content or a double-quoted attribute.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
pub(crate) fn escape_html(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    if memchr::memchr3(b'&', b'<', b'>', bytes).is_none() && memchr::memchr(b'"', bytes).is_none()
    {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

/// Append ` name="value"` with the value escaped.
pub(crate) fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_html(value));
    out.push('"');
}

/// Append ` name="n"` for an integer value.
pub(crate) fn push_int_attr(out: &mut String, name: &str, value: usize) {
    let mut buffer = itoa::Buffer::new();
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(buffer.format(value));
    out.push('"');
}
