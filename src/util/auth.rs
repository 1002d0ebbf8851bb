//! Route guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior based on the auth
//! session: protected routes send signed-out users to sign-in, public-only
//! routes and the landing page send signed-in users to the chat.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::util::constants::routes;

/// Which sessions a route admits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// Anyone; signed-in users are forwarded to the chat.
    Landing,
    /// Signed-out users only.
    PublicOnly,
    /// Signed-in users only.
    Protected,
}

/// Router segment for an absolute route path: `"/chat"` matches as `"chat"`.
pub fn route_segment(path: &'static str) -> &'static str {
    path.trim_start_matches('/')
}

/// Redirect target for `access` under `state`, or `None` to stay.
///
/// Nothing redirects while the session is still loading.
pub fn guard_redirect(access: RouteAccess, state: &AuthState) -> Option<&'static str> {
    if state.loading {
        return None;
    }
    match (access, state.is_authenticated) {
        (RouteAccess::Landing | RouteAccess::PublicOnly, true) => Some(routes::CHAT),
        (RouteAccess::Protected, false) => Some(routes::SIGN_IN),
        _ => None,
    }
}

/// Re-evaluate the guard whenever the auth session changes.
pub fn install_route_guard<F>(auth: RwSignal<AuthState>, access: RouteAccess, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let target = auth.with(|state| guard_redirect(access, state));
        if let Some(path) = target {
            log::debug!("route guard {access:?}: redirecting to {path}");
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
