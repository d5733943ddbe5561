//! Small HTML building helpers.
//!
//! Rendering is plain string building. Text that came from outside an
//! HTML-bearing prop is escaped; props that carry markup by contract
//! (`body`, `image.content`, `drupal-markup` content) are emitted raw,
//! matching the backend's custom-elements contract.

use serde_json::Value;

/// Escape text for safe interpolation into HTML.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Flatten a markup prop: a string passes through, an array of strings
/// is concatenated, anything else renders as nothing.
pub fn join_markup(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(parts) => parts
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .concat(),
        _ => String::new(),
    }
}
