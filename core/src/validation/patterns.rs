//! Name and email format checks.
//!
//! Both run the string validator first, so a non-string or empty value fails
//! with the usual kind before the pattern is consulted.

use super::rules::StringRules;
use super::{ValidationResult, Validator};
use crate::errors::{ErrorKind, ProjectError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value as JsonValue;

/// Latin or Cyrillic words joined by a single space, apostrophe or hyphen.
static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-zÀ-ÖØ-öø-ÿА-Яа-яЁё]+(?:[ '\-][A-Za-zÀ-ÖØ-öø-ÿА-Яа-яЁё]+)*$")
        .expect("name pattern is a valid regex")
});

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

fn check_format(
    value: &JsonValue,
    alias: &str,
    pattern: &Regex,
    expected: &str,
) -> ValidationResult<()> {
    StringRules::new().alias(alias).validate(value)?;

    // the string validator already rejected anything that is not a string
    let text = value.as_str().unwrap_or_default();
    if pattern.is_match(text) {
        Ok(())
    } else {
        log::debug!("validation rejected: {} does not look like {}", alias, expected);
        Err(ProjectError::validation(
            ErrorKind::WrongFormat,
            format!("{} must be a valid {}", alias, expected),
        ))
    }
}

/// **PERSON NAME VALIDATION**
pub fn validate_name(value: &JsonValue, alias: &str) -> ValidationResult<()> {
    check_format(value, alias, &NAME_PATTERN, "name")
}

/// **EMAIL ADDRESS VALIDATION**
pub fn validate_email(value: &JsonValue, alias: &str) -> ValidationResult<()> {
    check_format(value, alias, &EMAIL_PATTERN, "email address")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_names() {
        for name in ["Anna", "Jean-Luc", "O'Brien", "Mary Ann", "Иван", "Zoë"] {
            assert!(validate_name(&json!(name), "Name").is_ok(), "{name}");
        }
    }

    #[test]
    fn test_invalid_names() {
        for name in ["R2D2", "Anna  Smith", "-Anna", "Anna-", "anna@home"] {
            let err = validate_name(&json!(name), "Name").unwrap_err();
            assert_eq!(err.kind(), ErrorKind::WrongFormat, "{name}");
        }
    }

    #[test]
    fn test_name_runs_string_checks_first() {
        assert_eq!(
            validate_name(&json!(7), "Name").unwrap_err().kind(),
            ErrorKind::TypeMismatch
        );
        assert_eq!(
            validate_name(&json!(""), "Name").unwrap_err().kind(),
            ErrorKind::EmptyValue
        );
    }

    #[test]
    fn test_valid_emails() {
        for email in ["a@b.io", "first.last+tag@mail.example.com", "x_y@sub-domain.org"] {
            assert!(validate_email(&json!(email), "Email").is_ok(), "{email}");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in ["plain", "a@b", "a@.com", "@example.com", "a@b.c", "a b@c.com"] {
            let err = validate_email(&json!(email), "Email").unwrap_err();
            assert_eq!(err.kind(), ErrorKind::WrongFormat, "{email}");
            assert_eq!(err.message(), "Email must be a valid email address");
        }
    }
}
