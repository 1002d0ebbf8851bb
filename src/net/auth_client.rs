//! Credential, session, and bearer-token calls against the auth endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net` with cookies included,
//! since the session lives in an auth-site cookie. Native builds: calls fail
//! with `ServiceError::Unavailable`.
//!
//! TOKENS
//! ======
//! The data service wants a short-lived JWT. It is cached and fetched again
//! lazily once it is within the configured skew of its `exp` claim; nothing
//! refreshes it in the background.
//!
//! SESSION EVENTS
//! ==============
//! Subscribers hear `true` after a successful sign-in or sign-up and `false`
//! when the session ends: an explicit sign-out, a token request the server
//! refuses, or a data call rejected as unauthenticated (`session_lost`).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_client_test.rs"]
mod auth_client_test;

use std::cell::RefCell;

use serde_json::Value;

use super::error::ServiceError;
use super::types::{SessionSnapshot, User};

/// The external auth/session client.
#[async_trait::async_trait(?Send)]
pub trait AuthClient {
    async fn sign_in_email(&self, email: &str, password: &str) -> Result<(), ServiceError>;

    async fn sign_up_email(&self, email: &str, password: &str, name: &str) -> Result<(), ServiceError>;

    async fn sign_out(&self) -> Result<(), ServiceError>;

    /// Current session; an absent session is `Ok` with `is_authenticated: false`.
    async fn get_session(&self) -> Result<SessionSnapshot, ServiceError>;

    /// Bearer token for data-service calls, `None` when signed out.
    async fn token(&self) -> Result<Option<String>, ServiceError>;

    /// Register a session-change listener.
    fn subscribe(&self, listener: SessionListener);

    /// The session was rejected elsewhere; drop credentials and tell listeners.
    fn session_lost(&self);
}

/// Callback fired with the new authenticated flag.
pub type SessionListener = Box<dyn Fn(bool)>;

/// Fan-out of session changes to registered listeners.
#[derive(Default)]
pub struct SessionNotifier {
    listeners: RefCell<Vec<SessionListener>>,
}

impl SessionNotifier {
    pub fn subscribe(&self, listener: SessionListener) {
        self.listeners.borrow_mut().push(listener);
    }

    pub fn notify(&self, is_authenticated: bool) {
        log::debug!("session changed: authenticated={is_authenticated}");
        for listener in self.listeners.borrow().iter() {
            listener(is_authenticated);
        }
    }
}

pub(crate) fn auth_endpoint(base_url: &str, path: &str) -> String {
    format!("{}/api/auth/{path}", base_url.trim_end_matches('/'))
}

/// Interpret a `get-session` body: `null` or `{session, user}`.
pub(crate) fn parse_session_body(raw: &Value) -> Result<SessionSnapshot, ServiceError> {
    if raw.is_null() || raw.get("session").map_or(true, Value::is_null) {
        return Ok(SessionSnapshot::default());
    }
    let user = raw
        .get("user")
        .cloned()
        .map(serde_json::from_value::<User>)
        .transpose()
        .map_err(|e| ServiceError::Decode(e.to_string()))?;
    Ok(SessionSnapshot { is_authenticated: user.is_some(), user })
}

/// Interpret an auth error body `{code, message}` for a failed status.
pub(crate) fn parse_error_body(raw: Option<&Value>, status: u16) -> ServiceError {
    let code = raw
        .and_then(|v| v.get("code"))
        .and_then(Value::as_str)
        .map(str::to_owned);
    let message = raw
        .and_then(|v| v.get("message"))
        .and_then(Value::as_str)
        .map_or_else(|| format!("auth request failed: {status}"), str::to_owned);
    ServiceError::Server { code, message }
}

/// HTTP implementation of [`AuthClient`].
pub struct HttpAuthClient {
    base_url: String,
    skew_ms: u64,
    cached_token: RefCell<Option<String>>,
    notifier: SessionNotifier,
}

impl HttpAuthClient {
    pub fn new(base_url: impl Into<String>, skew_ms: u64) -> Self {
        Self {
            base_url: base_url.into(),
            skew_ms,
            cached_token: RefCell::new(None),
            notifier: SessionNotifier::default(),
        }
    }

    /// Cached token when it is still outside the expiry skew.
    fn fresh_cached_token(&self, now_ms: i64) -> Option<String> {
        self.cached_token
            .borrow()
            .as_ref()
            .filter(|t| !crate::util::token::is_token_expired(t, self.skew_ms, now_ms))
            .cloned()
    }

    #[cfg(feature = "csr")]
    async fn send(&self, method: &str, path: &str, body: Option<Value>) -> Result<Option<Value>, ServiceError> {
        use gloo_net::http::Request;
        use web_sys::RequestCredentials;

        let url = auth_endpoint(&self.base_url, path);
        let builder = match method {
            "GET" => Request::get(&url),
            _ => Request::post(&url),
        }
        .credentials(RequestCredentials::Include);
        let request = match body {
            Some(body) => builder.json(&body),
            None => builder.build(),
        }
        .map_err(|e| ServiceError::Network(e.to_string()))?;
        let resp = request.send().await.map_err(|e| ServiceError::Network(e.to_string()))?;
        let raw = resp.json::<Value>().await.ok();
        if !resp.ok() {
            let status = resp.status();
            log::warn!("auth {path} failed: status={status}");
            return Err(parse_error_body(raw.as_ref(), status));
        }
        Ok(raw)
    }

    #[cfg(not(feature = "csr"))]
    async fn send(&self, method: &str, path: &str, body: Option<Value>) -> Result<Option<Value>, ServiceError> {
        let _ = (method, path, body, &self.base_url);
        Err(ServiceError::Unavailable)
    }
}

#[async_trait::async_trait(?Send)]
impl AuthClient for HttpAuthClient {
    async fn sign_in_email(&self, email: &str, password: &str) -> Result<(), ServiceError> {
        let body = serde_json::json!({ "email": email, "password": password });
        self.send("POST", "sign-in/email", Some(body)).await?;
        self.cached_token.replace(None);
        self.notifier.notify(true);
        Ok(())
    }

    async fn sign_up_email(&self, email: &str, password: &str, name: &str) -> Result<(), ServiceError> {
        let body = serde_json::json!({ "email": email, "password": password, "name": name });
        self.send("POST", "sign-up/email", Some(body)).await?;
        self.cached_token.replace(None);
        self.notifier.notify(true);
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), ServiceError> {
        self.cached_token.replace(None);
        self.send("POST", "sign-out", Some(serde_json::json!({}))).await?;
        self.notifier.notify(false);
        Ok(())
    }

    async fn get_session(&self) -> Result<SessionSnapshot, ServiceError> {
        let raw = self.send("GET", "get-session", None).await?;
        parse_session_body(&raw.unwrap_or(Value::Null))
    }

    async fn token(&self) -> Result<Option<String>, ServiceError> {
        let now = chrono::Utc::now().timestamp_millis();
        if let Some(token) = self.fresh_cached_token(now) {
            return Ok(Some(token));
        }
        let raw = match self.send("GET", "convex/token", None).await {
            Ok(raw) => raw,
            Err(ServiceError::Server { .. }) => {
                self.session_lost();
                return Ok(None);
            }
            Err(e) => return Err(e),
        };
        let token = raw
            .as_ref()
            .and_then(|v| v.get("token"))
            .and_then(Value::as_str)
            .map(str::to_owned);
        self.cached_token.replace(token.clone());
        Ok(token)
    }

    fn subscribe(&self, listener: SessionListener) {
        self.notifier.subscribe(listener);
    }

    fn session_lost(&self) {
        self.cached_token.replace(None);
        self.notifier.notify(false);
    }
}
