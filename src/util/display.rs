//! Display helpers for user badges and message timestamps.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use chrono::{DateTime, Local, TimeZone};

/// Avatar initials: first letters of the first and last name parts, else the
/// first letter of the email, else `U`.
pub fn user_initials(name: Option<&str>, email: Option<&str>) -> String {
    if let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) {
        let parts: Vec<&str> = name.split_whitespace().collect();
        let first = parts.first().and_then(|p| p.chars().next());
        let last = if parts.len() > 1 { parts.last().and_then(|p| p.chars().next()) } else { None };
        return first.into_iter().chain(last).flat_map(char::to_uppercase).collect();
    }
    if let Some(c) = email.and_then(|e| e.chars().next()) {
        return c.to_uppercase().collect();
    }
    "U".to_owned()
}

/// Author label: the name, else the email local part, else `Anonymous`.
pub fn display_name(name: Option<&str>, email: Option<&str>) -> String {
    if let Some(name) = name.filter(|n| !n.is_empty()) {
        return name.to_owned();
    }
    if let Some(email) = email.filter(|e| !e.is_empty()) {
        return email.split('@').next().unwrap_or(email).to_owned();
    }
    "Anonymous".to_owned()
}

/// Relative label for a message timestamp (both in ms since the epoch).
pub fn format_relative_time(timestamp_ms: f64, now_ms: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let diff_secs = ((now_ms - timestamp_ms) / 1000.0).floor() as i64;
    let minutes = diff_secs.div_euclid(60);
    let hours = minutes.div_euclid(60);
    let days = hours.div_euclid(24);

    if diff_secs < 60 {
        "just now".to_owned()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else if days < 7 {
        format!("{days}d ago")
    } else {
        local_time(timestamp_ms).map_or_else(|| "?".to_owned(), |dt| dt.format("%-m/%-d/%Y").to_string())
    }
}

/// Full local date and time, used for timestamp tooltips.
pub fn format_full_time(timestamp_ms: f64) -> String {
    local_time(timestamp_ms).map_or_else(|| "?".to_owned(), |dt| dt.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string())
}

/// Current wall-clock time in ms since the epoch.
#[allow(clippy::cast_precision_loss)]
pub fn now_ms() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64
}

#[allow(clippy::cast_possible_truncation)]
fn local_time(timestamp_ms: f64) -> Option<DateTime<Local>> {
    Local.timestamp_millis_opt(timestamp_ms as i64).single()
}
