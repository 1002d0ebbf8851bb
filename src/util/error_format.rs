//! User-facing error text.
//!
//! DESIGN
//! ======
//! Failures from the data platform arrive as free-form text. They are mapped
//! to display strings by scanning a fixed, ordered code table: the first entry
//! whose code or human string occurs in the message wins. Structured auth
//! errors that carry an explicit code are looked up exactly instead.
//!
//! TRADE-OFFS
//! ==========
//! Substring matching can misclassify a message that incidentally contains an
//! unrelated code token. Table order decides ties.

#[cfg(test)]
#[path = "error_format_test.rs"]
mod error_format_test;

use crate::net::error::ServiceError;

pub const UNKNOWN_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection and try again";
pub const CONNECTION_HINT_MESSAGE: &str =
    "Unable to connect to the server. Please check your internet connection.";

const AUTH_FALLBACK_MESSAGE: &str = "An authentication error occurred";

/// Known error codes and their display strings, in match priority order.
pub const AUTH_ERROR_MESSAGES: &[(&str, &str)] = &[
    ("INVALID_CREDENTIALS", "Invalid email or password"),
    ("EMAIL_ALREADY_EXISTS", "An account with this email already exists"),
    ("USER_NOT_FOUND", "User not found"),
    ("UNAUTHORIZED", "You must be signed in to perform this action"),
    ("INVALID_PASSWORD", "Invalid password"),
    (
        "PASSWORD_TOO_WEAK",
        "Password must contain at least 8 characters, including uppercase, lowercase, numbers, and special characters",
    ),
    ("EMAIL_NOT_VERIFIED", "Please verify your email address"),
    ("SESSION_EXPIRED", "Your session has expired. Please sign in again"),
    ("TOO_MANY_ATTEMPTS", "Too many attempts. Please try again later"),
    ("NETWORK_ERROR", NETWORK_ERROR_MESSAGE),
    ("UNKNOWN_ERROR", UNKNOWN_ERROR_MESSAGE),
];

/// Raw failure shapes accepted by [`format_error_message`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorInput<'a> {
    /// Already-display text; returned verbatim.
    Text(&'a str),
    /// An error exposing a message to classify.
    Message(&'a str),
    /// Anything without a usable message.
    Unknown,
}

/// Map a raw failure to a non-empty display string.
pub fn format_error_message(input: ErrorInput<'_>) -> String {
    match input {
        ErrorInput::Text(text) => text.to_owned(),
        ErrorInput::Message(message) => {
            for (code, human) in AUTH_ERROR_MESSAGES {
                if message.contains(code) || message.contains(human) {
                    return (*human).to_owned();
                }
            }
            if message.is_empty() {
                UNKNOWN_ERROR_MESSAGE.to_owned()
            } else {
                message.to_owned()
            }
        }
        ErrorInput::Unknown => UNKNOWN_ERROR_MESSAGE.to_owned(),
    }
}

/// Display string for a service failure.
///
/// Server errors carrying a known code resolve by exact lookup; everything
/// else goes through the substring table.
pub fn format_service_error(err: &ServiceError) -> String {
    match err {
        ServiceError::Unavailable => format_error_message(ErrorInput::Unknown),
        ServiceError::Server { code: Some(code), message } if known_code(code).is_some() => {
            auth_error_message(code, message)
        }
        other => format_error_message(ErrorInput::Message(&other.to_string())),
    }
}

/// Like [`format_service_error`], with a friendlier hint for network failures.
pub fn handle_auth_error(err: &ServiceError) -> String {
    let message = format_service_error(err);
    if message == NETWORK_ERROR_MESSAGE {
        return CONNECTION_HINT_MESSAGE.to_owned();
    }
    message
}

/// Exact-code lookup for structured auth errors.
///
/// `UNKNOWN_ERROR` carries no information of its own, so the server's message
/// wins over the generic text for that code.
pub fn auth_error_message(code: &str, message: &str) -> String {
    match known_code(code) {
        Some(human) if code != "UNKNOWN_ERROR" => human.to_owned(),
        _ if !message.is_empty() => message.to_owned(),
        _ => AUTH_FALLBACK_MESSAGE.to_owned(),
    }
}

fn known_code(code: &str) -> Option<&'static str> {
    AUTH_ERROR_MESSAGES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, human)| *human)
}

fn contains_any(message: &str, needles: &[&str]) -> bool {
    let lowered = message.to_lowercase();
    needles.iter().any(|needle| lowered.contains(needle))
}

pub fn is_auth_error(message: &str) -> bool {
    contains_any(
        message,
        &["auth", "unauthorized", "forbidden", "session", "credential", "sign in", "sign up"],
    )
}

pub fn is_network_error(message: &str) -> bool {
    contains_any(message, &["network", "fetch", "timeout", "connection"])
}

pub fn is_validation_error(message: &str) -> bool {
    contains_any(message, &["validation", "invalid", "required", "format"])
}
