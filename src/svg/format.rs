//! Text formatting helpers shared by SVG elements.

/// Escape text for use inside SVG element content and attribute values.
#[must_use]
pub fn xml_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Format a value with a fixed number of decimal digits.
///
/// Non-finite values print as `nan`, `inf` and `-inf`.
#[must_use]
pub fn format_value(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    format!("{value:.precision$}")
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
