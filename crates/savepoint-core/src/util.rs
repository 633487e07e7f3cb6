//! Small helpers shared across the config, draft, and API modules.

/// Trim optional text, mapping empty or whitespace-only values to `None`.
pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Check if a string carries an `http://` or `https://` scheme.
pub fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Truncate text to at most 180 characters for inclusion in error messages.
pub fn compact_text(value: &str) -> String {
    value.trim().chars().take(180).collect()
}
