//! Email shape validation

use once_cell::sync::Lazy;
use regex::Regex;

// Local part may not end in '.' or '\''; domain labels start alphanumeric; TLD is 2+ letters.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Validates the `local@domain.tld` shape of an email address
///
/// Checks for:
/// - Exactly one '@' with content on both sides
/// - Local part does not start with '.' and has no consecutive dots
/// - Domain made of dotted labels ending in an alphabetic TLD of 2+ chars
pub fn is_valid_email(email: &str) -> bool {
    if email.starts_with('.') || email.contains("..") {
        return false;
    }

    EMAIL_REGEX.is_match(email)
}
