//! Form validation for user submissions
//!
//! Checks run in a fixed order and stop at the first failure, so a submit
//! attempt reports at most one error.

use crate::user::{Field, User, UserDraft};
use regex::Regex;
use std::sync::LazyLock;

/// Minimum number of characters in a trimmed name
pub const MIN_NAME_LEN: usize = 3;

#[expect(
    clippy::expect_used,
    reason = "the pattern is a constant and covered by tests"
)]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,4}$").expect("valid email pattern")
});

/// A rejected form submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Create form name shorter than [`MIN_NAME_LEN`]
    #[error("Name must be 3 characters")]
    NameTooShort,
    /// Update form name shorter than [`MIN_NAME_LEN`]
    #[error("Update name must 3 characters")]
    UpdateNameTooShort,
    /// Email does not look like `local@domain.tld`
    #[error("Invalid email!")]
    InvalidEmail,
}

impl ValidationError {
    /// The form field this error is shown next to
    #[must_use]
    pub const fn field(self) -> Field {
        match self {
            Self::NameTooShort | Self::UpdateNameTooShort => Field::Name,
            Self::InvalidEmail => Field::Email,
        }
    }
}

/// Whether a name is long enough once surrounding whitespace is removed
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    name.trim().chars().count() >= MIN_NAME_LEN
}

/// Whether an email matches `local@domain.tld` with a 2-4 letter TLD
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validate a create form, returning the user to submit
///
/// # Errors
///
/// Returns the first failing check: name first, then email.
pub fn validate_create(draft: &UserDraft) -> Result<User, ValidationError> {
    validate(draft, ValidationError::NameTooShort)
}

/// Validate an update form, returning the user to submit
///
/// # Errors
///
/// Returns the first failing check: name first, then email.
pub fn validate_update(draft: &UserDraft) -> Result<User, ValidationError> {
    validate(draft, ValidationError::UpdateNameTooShort)
}

fn validate(draft: &UserDraft, name_error: ValidationError) -> Result<User, ValidationError> {
    if !is_valid_name(&draft.name) {
        return Err(name_error);
    }
    if !is_valid_email(&draft.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(User::new(draft.name.trim(), draft.email.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn draft(name: &str, email: &str) -> UserDraft {
        UserDraft {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[rstest]
    #[case("alice@example.com")]
    #[case("a.b-c_d@mail.example.org")]
    #[case("x@y.io")]
    #[case("UPPER@CASE.COM")]
    #[case("dots.@sub.domain.info")]
    fn test_valid_emails(#[case] email: &str) {
        assert!(is_valid_email(email), "{email} should be valid");
    }

    #[rstest]
    #[case("not-an-email")]
    #[case("missing-at.example.com")]
    #[case("a@b")]
    #[case("a@b.c")]
    #[case("a@b.toolong")]
    #[case("spaces in@example.com")]
    #[case("plus+tag@example.com")]
    #[case(" alice@example.com")]
    #[case("")]
    fn test_invalid_emails(#[case] email: &str) {
        assert!(!is_valid_email(email), "{email} should be invalid");
    }

    #[test]
    fn test_update_short_name_reports_name_error() {
        let result = validate_update(&draft("Al", "al@x.com"));
        assert_eq!(result, Err(ValidationError::UpdateNameTooShort));
        if let Err(err) = result {
            assert_eq!(err.to_string(), "Update name must 3 characters");
            assert_eq!(err.field(), Field::Name);
        }
    }

    #[test]
    fn test_update_bad_email_reports_email_error() {
        let result = validate_update(&draft("Alice", "not-an-email"));
        assert_eq!(result, Err(ValidationError::InvalidEmail));
        if let Err(err) = result {
            assert_eq!(err.to_string(), "Invalid email!");
            assert_eq!(err.field(), Field::Email);
        }
    }

    #[test]
    fn test_name_check_short_circuits_email_check() {
        let result = validate_update(&draft("", "garbage"));
        assert_eq!(result, Err(ValidationError::UpdateNameTooShort));
    }

    #[test]
    fn test_create_short_name_message() {
        let result = validate_create(&draft("  ab  ", "ab@example.com"));
        assert_eq!(result, Err(ValidationError::NameTooShort));
        if let Err(err) = result {
            assert_eq!(err.to_string(), "Name must be 3 characters");
        }
    }

    #[test]
    fn test_valid_submission_trims_name() {
        let result = validate_create(&draft("  Alice ", "alice@example.com"));
        assert_eq!(result, Ok(User::new("Alice", "alice@example.com")));
    }

    #[test]
    fn test_name_length_counts_characters_not_bytes() {
        assert!(is_valid_name("Zoë"));
        assert!(!is_valid_name("é "));
    }

    proptest! {
        #[test]
        fn prop_short_trimmed_names_are_rejected(name in "[ ]{0,3}[a-zA-Z]{0,2}[ ]{0,3}") {
            let draft = draft(&name, "valid@example.com");
            prop_assert_eq!(validate_create(&draft), Err(ValidationError::NameTooShort));
            prop_assert_eq!(validate_update(&draft), Err(ValidationError::UpdateNameTooShort));
        }

        #[test]
        fn prop_emails_without_at_are_rejected(email in "[a-zA-Z0-9._ -]{0,24}") {
            let draft = draft("Alice", &email);
            prop_assert_eq!(validate_update(&draft), Err(ValidationError::InvalidEmail));
        }

        #[test]
        fn prop_well_formed_emails_pass(
            local in "[a-zA-Z0-9._-]{1,12}",
            domain in "[a-zA-Z0-9-]{1,12}",
            tld in "[a-zA-Z]{2,4}",
        ) {
            let email = format!("{local}@{domain}.{tld}");
            prop_assert!(is_valid_email(&email));
            prop_assert!(validate_update(&draft("Alice", &email)).is_ok());
        }
    }
}
