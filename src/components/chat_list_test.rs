use super::*;

#[test]
fn own_message_requires_signed_in_author_match() {
    assert!(is_own_message(Some("u1"), "u1"));
    assert!(!is_own_message(Some("u1"), "u2"));
    assert!(!is_own_message(None, "u1"));
}

#[test]
fn animation_delay_is_staggered_and_capped() {
    assert_eq!(animation_delay(0), "0ms");
    assert_eq!(animation_delay(3), "90ms");
    assert_eq!(animation_delay(500), "600ms");
}
