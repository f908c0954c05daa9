//! Text normalization for stored log fields

/// Normalize line endings in a string to LF (\n)
///
/// # Arguments
///
/// * `s` - String to normalize
///
/// # Returns
///
/// String with normalized line endings
fn normalize_string_line_endings(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "\n")
}

/// Normalize a freeform text field: LF line endings, surrounding whitespace trimmed
pub fn normalize_text_field(s: &str) -> String {
    normalize_string_line_endings(s).trim().to_string()
}
