//! Short code generation and validation utilities.
//!
//! Provides cryptographically secure random code generation and a
//! structural validity check for codes appearing in redirect paths.

use crate::error::AppError;
use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of generated short codes.
pub const SHORT_CODE_LENGTH: usize = 6;

/// Minimum length accepted for a code on lookup.
pub const MIN_SHORT_CODE_LENGTH: usize = 4;

/// Maximum length accepted for a code on lookup.
pub const MAX_SHORT_CODE_LENGTH: usize = 32;

/// Generates a random short code of exactly `length` characters.
///
/// Each character is drawn independently and uniformly from the
/// 62-character alphanumeric alphabet `[A-Za-z0-9]`. The source is the
/// thread-local CSPRNG, so codes are not guessable by enumeration.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if `length` is zero.
///
/// # Examples
///
/// ```
/// use snip::utils::code_generator::generate_code;
///
/// let code = generate_code(6).unwrap();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> Result<String, AppError> {
    if length == 0 {
        return Err(AppError::validation("Code length must be at least 1"));
    }

    let code = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect();

    Ok(code)
}

/// Structural validity check for a short code.
///
/// True iff the length is between 4 and 32 inclusive and every
/// character is in `[A-Za-z0-9_-]`. This says nothing about whether the
/// code resolves; only the store can determine that.
pub fn is_valid_code(code: &str) -> bool {
    let len = code.len();

    len >= MIN_SHORT_CODE_LENGTH
        && len <= MAX_SHORT_CODE_LENGTH
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
