//! Client-side validation for the auth forms.
//!
//! Failures are a fixed enum rather than a keyed map of strings, so every
//! screen renders the same message for the same mistake.

use std::sync::LazyLock;

use regex_lite::Regex;
use thiserror::Error;

/// Minimum accepted password length on sign-up.
pub const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex"));

/// One validation failure on an auth form.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Please enter your name")]
    NameRequired,
    #[error("Please enter your email address")]
    EmailRequired,
    #[error("That doesn't look like a valid email address")]
    EmailInvalid,
    #[error("Please enter your password")]
    PasswordRequired,
    #[error("Passwords must be at least {MIN_PASSWORD_LEN} characters")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Loose structural check, deliberately permissive. The server is the
/// authority; this only catches obvious typos before a round trip.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value.trim())
}

fn check_email(value: &str, errors: &mut Vec<FieldError>) {
    if value.trim().is_empty() {
        errors.push(FieldError::EmailRequired);
    } else if !is_valid_email(value) {
        errors.push(FieldError::EmailInvalid);
    }
}

/// Sign-in form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    /// Empty vec means the form may be submitted.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_email(&self.email, &mut errors);
        if self.password.is_empty() {
            errors.push(FieldError::PasswordRequired);
        }
        errors
    }
}

/// Sign-up form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpForm {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError::NameRequired);
        }
        check_email(&self.email, &mut errors);
        if self.password.is_empty() {
            errors.push(FieldError::PasswordRequired);
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(FieldError::PasswordTooShort);
        }
        if self.password != self.confirm_password {
            errors.push(FieldError::PasswordMismatch);
        }
        errors
    }
}

/// Password reset request form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetRequestForm {
    pub email: String,
}

impl ResetRequestForm {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_email(&self.email, &mut errors);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_emails() {
        for email in [
            "user@example.com",
            "first.last@sub.example.co",
            "  padded@example.com  ",
        ] {
            assert!(is_valid_email(email), "{email:?} should be accepted");
        }
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in ["", "plain", "a@b", "two@@example.com", "spaced @example.com"] {
            assert!(!is_valid_email(email), "{email:?} should be rejected");
        }
    }

    #[test]
    fn sign_in_requires_both_fields() {
        let form = SignInForm::default();
        let errors = form.validate();
        assert!(errors.contains(&FieldError::EmailRequired));
        assert!(errors.contains(&FieldError::PasswordRequired));
    }

    #[test]
    fn sign_in_accepts_a_complete_form() {
        let form = SignInForm {
            email: "user@example.com".into(),
            password: "hunter22".into(),
        };
        assert!(form.validate().is_empty());
    }

    #[test]
    fn sign_up_flags_short_passwords_once() {
        let form = SignUpForm {
            name: "Maya".into(),
            email: "maya@example.com".into(),
            password: "short".into(),
            confirm_password: "short".into(),
        };
        assert_eq!(form.validate(), vec![FieldError::PasswordTooShort]);
    }

    #[test]
    fn sign_up_requires_matching_confirmation() {
        let form = SignUpForm {
            name: "Maya".into(),
            email: "maya@example.com".into(),
            password: "long enough".into(),
            confirm_password: "long enouhg".into(),
        };
        assert_eq!(form.validate(), vec![FieldError::PasswordMismatch]);
    }

    #[test]
    fn sign_up_accepts_a_complete_form() {
        let form = SignUpForm {
            name: "Maya".into(),
            email: "maya@example.com".into(),
            password: "long enough".into(),
            confirm_password: "long enough".into(),
        };
        assert!(form.validate().is_empty());
    }

    #[test]
    fn reset_request_checks_email_shape() {
        let form = ResetRequestForm {
            email: "not-an-email".into(),
        };
        assert_eq!(form.validate(), vec![FieldError::EmailInvalid]);
    }
}
