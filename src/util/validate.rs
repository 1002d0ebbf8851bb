//! Form and field validation for the auth pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validation runs before any network call. Pages render the returned
//! `FieldError`s inline and only submit when a form validates cleanly.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

use super::constants::{
    EMAIL_MAX_LENGTH, FORM_PASSWORD_MIN_LENGTH, NAME_MAX_LENGTH, NAME_MIN_LENGTH, PASSWORD_MAX_LENGTH,
    PASSWORD_MIN_LENGTH,
};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern compiles")
});

const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// A single field-level validation failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email")]
    EmailInvalid,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Password must be at most 128 characters")]
    PasswordTooLong,
    #[error("Name is required")]
    NameRequired,
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Name must be at most 100 characters")]
    NameTooLong,
    #[error("Please confirm your password")]
    ConfirmRequired,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Which password-strength rules a candidate fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasswordStrength {
    pub min_length: bool,
    pub no_upper_case: bool,
    pub no_lower_case: bool,
    pub no_number: bool,
    pub no_special_char: bool,
}

impl PasswordStrength {
    pub fn is_strong(&self) -> bool {
        *self == Self::default()
    }

    /// Hints for each failed rule, in display order.
    pub fn unmet_rules(&self) -> Vec<&'static str> {
        [
            (self.min_length, "At least 8 characters"),
            (self.no_upper_case, "An uppercase letter"),
            (self.no_lower_case, "A lowercase letter"),
            (self.no_number, "A number"),
            (self.no_special_char, "A special character"),
        ]
        .into_iter()
        .filter_map(|(failed, hint)| failed.then_some(hint))
        .collect()
    }
}

pub fn is_valid_email(email: &str) -> bool {
    email.len() <= EMAIL_MAX_LENGTH && EMAIL_RE.is_match(email)
}

/// Evaluate password strength; an empty value reports no failures.
pub fn password_strength(value: &str) -> PasswordStrength {
    if value.is_empty() {
        return PasswordStrength::default();
    }
    PasswordStrength {
        min_length: value.chars().count() < PASSWORD_MIN_LENGTH,
        no_upper_case: !value.chars().any(|c| c.is_ascii_uppercase()),
        no_lower_case: !value.chars().any(|c| c.is_ascii_lowercase()),
        no_number: !value.chars().any(|c| c.is_ascii_digit()),
        no_special_char: !value.chars().any(|c| SPECIAL_CHARS.contains(c)),
    }
}

/// Trim and collapse internal whitespace runs to a single space.
pub fn sanitize_input(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn validate_email_field(email: &str) -> Option<FieldError> {
    let email = email.trim();
    if email.is_empty() {
        Some(FieldError::EmailRequired)
    } else if !is_valid_email(email) {
        Some(FieldError::EmailInvalid)
    } else {
        None
    }
}

fn validate_password_field(password: &str) -> Option<FieldError> {
    match password.chars().count() {
        0 => Some(FieldError::PasswordRequired),
        n if n < FORM_PASSWORD_MIN_LENGTH => Some(FieldError::PasswordTooShort),
        n if n > PASSWORD_MAX_LENGTH => Some(FieldError::PasswordTooLong),
        _ => None,
    }
}

/// Per-field errors for the sign-in form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInErrors {
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
}

impl SignInErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Validated sign-in credentials.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

pub fn validate_sign_in(email: &str, password: &str) -> Result<SignInInput, SignInErrors> {
    let errors = SignInErrors {
        email: validate_email_field(email),
        password: validate_password_field(password),
    };
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(SignInInput { email: email.trim().to_owned(), password: password.to_owned() })
}

/// Per-field errors for the sign-up form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
    pub confirm: Option<FieldError>,
}

impl SignUpErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none() && self.confirm.is_none()
    }
}

/// Validated sign-up fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignUpInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Sanitize a display name and check its length.
///
/// # Errors
///
/// Returns the name `FieldError` for empty, short or long names.
pub fn validate_display_name(name: &str) -> Result<String, FieldError> {
    let clean = sanitize_input(name);
    match clean.chars().count() {
        0 => Err(FieldError::NameRequired),
        n if n < NAME_MIN_LENGTH => Err(FieldError::NameTooShort),
        n if n > NAME_MAX_LENGTH => Err(FieldError::NameTooLong),
        _ => Ok(clean),
    }
}

pub fn validate_sign_up(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<SignUpInput, SignUpErrors> {
    let (clean_name, name_error) = match validate_display_name(name) {
        Ok(clean) => (clean, None),
        Err(e) => (String::new(), Some(e)),
    };
    let confirm_error = if confirm.is_empty() {
        Some(FieldError::ConfirmRequired)
    } else if confirm != password {
        Some(FieldError::PasswordMismatch)
    } else {
        None
    };

    let errors = SignUpErrors {
        name: name_error,
        email: validate_email_field(email),
        password: validate_password_field(password),
        confirm: confirm_error,
    };
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(SignUpInput { name: clean_name, email: email.trim().to_owned(), password: password.to_owned() })
}
