// src/core/sanitize.rs

/// Trimmed copy of a free-text cell or input field.
pub fn clean(s: &str) -> String {
    s.trim().to_string()
}

/// Comparison form of a name: trimmed and lowercased (full Unicode).
pub fn norm_name(s: &str) -> String {
    s.trim().to_lowercase()
}
