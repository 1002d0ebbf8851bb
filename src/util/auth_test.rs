use super::*;
use crate::net::types::{SessionSnapshot, User, UserRole};

fn settled(is_authenticated: bool) -> AuthState {
    let mut state = AuthState::default();
    state.apply_session(SessionSnapshot {
        user: Some(User {
            id: "u1".to_owned(),
            email: "ann@example.com".to_owned(),
            name: Some("Ann".to_owned()),
            role: UserRole::User,
            is_active: true,
            last_login: None,
        }),
        is_authenticated,
    });
    state
}

#[test]
fn nothing_redirects_while_loading() {
    let state = AuthState::pending();
    for access in [RouteAccess::Landing, RouteAccess::PublicOnly, RouteAccess::Protected] {
        assert_eq!(guard_redirect(access, &state), None);
    }
}

#[test]
fn protected_route_sends_signed_out_users_to_sign_in() {
    assert_eq!(guard_redirect(RouteAccess::Protected, &settled(false)), Some("/signin"));
    assert_eq!(guard_redirect(RouteAccess::Protected, &settled(true)), None);
}

#[test]
fn public_only_route_sends_signed_in_users_to_chat() {
    assert_eq!(guard_redirect(RouteAccess::PublicOnly, &settled(true)), Some("/chat"));
    assert_eq!(guard_redirect(RouteAccess::PublicOnly, &settled(false)), None);
}

#[test]
fn landing_forwards_signed_in_users_only() {
    assert_eq!(guard_redirect(RouteAccess::Landing, &settled(true)), Some("/chat"));
    assert_eq!(guard_redirect(RouteAccess::Landing, &settled(false)), None);
}

#[test]
fn route_segments_drop_the_leading_slash() {
    assert_eq!(route_segment(routes::HOME), "");
    assert_eq!(route_segment(routes::DASHBOARD), "dashboard");
    assert_eq!(route_segment(routes::SIGN_IN), "signin");
}
