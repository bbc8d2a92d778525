//! String validation functions

/// Validates that a value has at least one character.
///
/// Whitespace counts as content; values are not trimmed.
pub fn validate_non_empty(s: &str) -> Result<(), String> {
    if s.is_empty() {
        Err("Must not be empty".to_string())
    } else {
        Ok(())
    }
}

/// Validates string length in characters (not bytes)
pub fn validate_min_length(s: &str, min: usize) -> Result<(), String> {
    if s.chars().count() >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {} characters", min))
    }
}
