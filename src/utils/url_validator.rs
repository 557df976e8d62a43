//! Destination URL validation.
//!
//! Only `http://` and `https://` URLs are accepted. Rejecting every
//! other scheme (`ftp:`, `javascript:`, relative paths) doubles as a
//! basic guard against open-redirect abuse.

use crate::error::AppError;
use regex::Regex;
use std::sync::LazyLock;

/// Compiled regex for the accepted URL schemes.
static URL_SCHEME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").unwrap());

/// Returns whether a candidate destination URL is acceptable.
///
/// Surrounding whitespace is ignored; the trimmed value must be
/// non-empty and start with `http://` or `https://` (case-insensitive).
pub fn is_valid_url(url: &str) -> bool {
    let trimmed = url.trim();

    !trimmed.is_empty() && URL_SCHEME_REGEX.is_match(trimmed)
}

/// Validates a candidate destination URL.
///
/// # Errors
///
/// Returns [`AppError::Validation`] with the caller-facing message when
/// [`is_valid_url`] is false.
pub fn validate_url(url: &str) -> Result<(), AppError> {
    if !is_valid_url(url) {
        return Err(AppError::validation(
            "Invalid URL. Must start with http or https",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(is_valid_url("http://example.com"));
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("https://example.com/path?query=1#frag"));
    }

    #[test]
    fn test_scheme_check_is_case_insensitive() {
        assert!(is_valid_url("HTTP://example.com"));
        assert!(is_valid_url("HtTpS://example.com"));
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert!(is_valid_url("  https://example.com  "));
        assert!(is_valid_url("\thttp://example.com\n"));
    }

    #[test]
    fn test_rejects_empty_and_whitespace_only() {
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("   "));
        assert!(!is_valid_url("\t\n"));
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url("javascript:alert(1)"));
        assert!(!is_valid_url("file:///etc/passwd"));
        assert!(!is_valid_url("//example.com"));
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("not-a-url"));
    }

    #[test]
    fn test_scheme_must_be_a_prefix() {
        assert!(!is_valid_url("see https://example.com"));
    }

    #[test]
    fn test_validate_url_error_message() {
        let err = validate_url("not-a-url").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid URL. Must start with http or https"
        );
    }

    #[test]
    fn test_validate_url_ok_for_valid() {
        assert!(validate_url("https://example.com").is_ok());
    }
}
