//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate sign-in
//! redirects and identity-dependent rendering. The session itself lives with
//! the auth service; this state mirrors its latest snapshot.
//!
//! ERROR HANDLING
//! ==============
//! Credential operations propagate the client's `ServiceError` unchanged and
//! never retry. Pages format the error for display.
//!
//! SESSION EVENTS
//! ==============
//! `watch_session` subscribes to the auth client so a session that ends
//! outside these operations (an expired token, a data call rejected as
//! unauthenticated) still flips the state to signed out and the route guards
//! react.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::auth_client::AuthClient;
use crate::net::data_service::DataService;
use crate::net::error::ServiceError;
use crate::net::types::{SessionSnapshot, User};

use super::cell::StateCell;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    /// A session read or credential call is in flight.
    pub loading: bool,
}

impl AuthState {
    /// Initial state before the first session read resolves.
    pub fn pending() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Session-change handler: mirror a fresh snapshot.
    pub fn apply_session(&mut self, snapshot: SessionSnapshot) {
        self.is_authenticated = snapshot.is_authenticated;
        self.user = if snapshot.is_authenticated { snapshot.user } else { None };
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }
}

/// Mirror a session-change event from the auth client.
///
/// A lost session is applied at once. A new session carries no user, so it is
/// left to the sign-in and sign-up flows, which read the snapshot themselves.
pub fn session_changed<C: StateCell<AuthState>>(auth: &C, is_authenticated: bool) {
    if is_authenticated || !auth.peek(|a| a.is_authenticated) {
        return;
    }
    log::info!("session ended, clearing user");
    auth.mutate(|a| a.apply_session(SessionSnapshot::default()));
}

/// Route the client's session events into `auth` for the client's lifetime.
pub fn watch_session<C: StateCell<AuthState>>(auth: &C, client: &dyn AuthClient) {
    let auth = auth.clone();
    client.subscribe(Box::new(move |is_authenticated| session_changed(&auth, is_authenticated)));
}

/// Re-read the session snapshot and apply it.
///
/// A failed read is treated as signed out so guards can settle.
pub async fn refresh_session<C>(auth: &C, client: &dyn AuthClient)
where
    C: StateCell<AuthState>,
{
    auth.mutate(|a| a.loading = true);
    let snapshot = match client.get_session().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            log::warn!("session read failed: {e}");
            SessionSnapshot::default()
        }
    };
    auth.mutate(|a| {
        a.apply_session(snapshot);
        a.loading = false;
    });
}

/// Sign in with email and password.
///
/// # Errors
///
/// Returns the auth client's error unchanged.
pub async fn sign_in<C>(auth: &C, client: &dyn AuthClient, email: &str, password: &str) -> Result<(), ServiceError>
where
    C: StateCell<AuthState>,
{
    auth.mutate(|a| a.loading = true);
    if let Err(e) = client.sign_in_email(email, password).await {
        log::warn!("sign in failed: {e}");
        auth.mutate(|a| a.loading = false);
        return Err(e);
    }
    refresh_session(auth, client).await;
    Ok(())
}

/// Create an account and sign in.
///
/// # Errors
///
/// Returns the auth client's error unchanged.
pub async fn sign_up<C>(
    auth: &C,
    client: &dyn AuthClient,
    email: &str,
    password: &str,
    name: &str,
) -> Result<(), ServiceError>
where
    C: StateCell<AuthState>,
{
    auth.mutate(|a| a.loading = true);
    if let Err(e) = client.sign_up_email(email, password, name).await {
        log::warn!("sign up failed: {e}");
        auth.mutate(|a| a.loading = false);
        return Err(e);
    }
    refresh_session(auth, client).await;
    Ok(())
}

/// End the session.
///
/// # Errors
///
/// Returns the auth client's error unchanged; local state is left as is.
pub async fn sign_out<C>(auth: &C, client: &dyn AuthClient) -> Result<(), ServiceError>
where
    C: StateCell<AuthState>,
{
    auth.mutate(|a| a.loading = true);
    let result = client.sign_out().await;
    auth.mutate(|a| {
        a.loading = false;
        if result.is_ok() {
            a.apply_session(SessionSnapshot::default());
        }
    });
    if let Err(e) = &result {
        log::warn!("sign out failed: {e}");
    }
    result
}

/// Rename the current user and patch the local copy.
///
/// # Errors
///
/// Returns the data service's error; the local name is unchanged on failure.
pub async fn update_profile<C>(auth: &C, data: &dyn DataService, name: &str) -> Result<(), ServiceError>
where
    C: StateCell<AuthState>,
{
    let name = name.trim();
    data.update_user_profile(Some(name)).await?;
    auth.mutate(|a| {
        if let Some(user) = a.user.as_mut() {
            user.name = Some(name.to_owned());
        }
    });
    Ok(())
}
