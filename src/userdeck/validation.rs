//! Form validation.
//!
//! These predicates run in the command layer before anything is handed to
//! the store. The store does its own uniqueness and existence checks and
//! never assumes its caller validated anything.

use crate::error::ValidationError;
use crate::model::UserInput;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub fn is_non_empty(s: &str) -> bool {
    !s.trim().is_empty()
}

pub fn is_valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

/// True when `s` parses as an absolute URL. Relative references and garbage
/// simply return false.
pub fn is_valid_url(s: &str) -> bool {
    Url::parse(s).is_ok()
}

/// Checks a whole form, reporting the first problem found.
///
/// Emptiness of every field is checked before any shape check, so a form
/// with an empty name and a bad email reports the empty name.
pub fn validate_form(input: &UserInput) -> Result<(), ValidationError> {
    let input = input.trimmed();
    for (field, value) in [
        ("name", &input.name),
        ("email", &input.email),
        ("avatar URL", &input.avatar_url),
    ] {
        if !is_non_empty(value) {
            return Err(ValidationError::EmptyField(field));
        }
    }
    if !is_valid_email(&input.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !is_valid_url(&input.avatar_url) {
        return Err(ValidationError::InvalidUrl);
    }
    Ok(())
}

pub fn is_form_valid(input: &UserInput) -> bool {
    validate_form(input).is_ok()
}
