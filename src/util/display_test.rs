use super::*;

// =============================================================
// user_initials
// =============================================================

#[test]
fn initials_from_first_and_last_name() {
    assert_eq!(user_initials(Some("ann marie lee"), None), "AL");
}

#[test]
fn initials_from_single_name() {
    assert_eq!(user_initials(Some("  bob "), Some("x@y.z")), "B");
}

#[test]
fn initials_fall_back_to_email() {
    assert_eq!(user_initials(None, Some("carol@example.com")), "C");
    assert_eq!(user_initials(Some("   "), Some("dan@example.com")), "D");
}

#[test]
fn initials_fall_back_to_u() {
    assert_eq!(user_initials(None, None), "U");
}

// =============================================================
// display_name
// =============================================================

#[test]
fn display_name_prefers_name() {
    assert_eq!(display_name(Some("Ann"), Some("ann@example.com")), "Ann");
}

#[test]
fn display_name_uses_email_local_part() {
    assert_eq!(display_name(None, Some("ann.lee@example.com")), "ann.lee");
}

#[test]
fn display_name_defaults_to_anonymous() {
    assert_eq!(display_name(Some(""), None), "Anonymous");
}

// =============================================================
// format_relative_time
// =============================================================

const NOW: f64 = 1_700_000_000_000.0;

#[test]
fn relative_time_under_a_minute_is_just_now() {
    assert_eq!(format_relative_time(NOW - 59_000.0, NOW), "just now");
}

#[test]
fn relative_time_minutes_hours_days() {
    assert_eq!(format_relative_time(NOW - 5.0 * 60_000.0, NOW), "5m ago");
    assert_eq!(format_relative_time(NOW - 3.0 * 3_600_000.0, NOW), "3h ago");
    assert_eq!(format_relative_time(NOW - 2.0 * 86_400_000.0, NOW), "2d ago");
}

#[test]
fn relative_time_older_than_a_week_is_a_date() {
    let label = format_relative_time(NOW - 30.0 * 86_400_000.0, NOW);
    assert!(label.contains('/'));
    assert!(label.ends_with("2023"));
}

#[test]
fn future_timestamps_read_as_just_now() {
    assert_eq!(format_relative_time(NOW + 5_000.0, NOW), "just now");
}

#[test]
fn full_time_includes_date_and_clock() {
    let label = format_full_time(NOW);
    assert!(label.contains(", "));
    assert!(label.contains(':'));
}
