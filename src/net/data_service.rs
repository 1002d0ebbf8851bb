//! Query and mutation calls against the hosted data platform.
//!
//! Client-side (csr): real HTTP calls via `gloo-net` to the platform's
//! function endpoints. Native builds (tests, tooling): calls fail with
//! `ServiceError::Unavailable`.
//!
//! WIRE FORMAT
//! ===========
//! `POST {base}/api/query` or `{base}/api/mutation` with
//! `{"path": "module:function", "args": {...}, "format": "json"}` and an
//! optional bearer token. Responses are `{"status": "success", "value": ..}`
//! or `{"status": "error", "errorMessage": .., "errorData": ..}`.
//!
//! A call rejected as unauthenticated tells the auth client the session is
//! gone, so session listeners see it even though no token request failed.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "data_service_test.rs"]
mod data_service_test;

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::auth_client::AuthClient;
use super::error::ServiceError;
use super::types::MessageWithUser;

pub const GET_MESSAGES: &str = "messages:getMessages";
pub const GET_FILTERED_MESSAGES_BY_CONTENT: &str = "messages:getFilteredMessagesByContent";
pub const SEND_MESSAGE: &str = "messages:sendMessage";
pub const UPDATE_USER_PROFILE: &str = "users:updateUserProfile";

/// The reactive data service as seen by the view-models.
#[async_trait::async_trait(?Send)]
pub trait DataService {
    /// All messages joined with their authors, oldest first.
    async fn get_messages(&self) -> Result<Vec<MessageWithUser>, ServiceError>;

    /// Full-text search over message content.
    async fn get_filtered_messages_by_content(&self, content: &str) -> Result<Vec<MessageWithUser>, ServiceError>;

    /// Create a message authored by the signed-in user.
    async fn send_message(&self, content: &str) -> Result<(), ServiceError>;

    /// Patch the signed-in user's profile; fails when unauthenticated.
    async fn update_user_profile(&self, name: Option<&str>) -> Result<(), ServiceError>;
}

/// Which function endpoint a call targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FunctionKind {
    Query,
    Mutation,
}

pub(crate) fn function_endpoint(base_url: &str, kind: FunctionKind) -> String {
    let base = base_url.trim_end_matches('/');
    match kind {
        FunctionKind::Query => format!("{base}/api/query"),
        FunctionKind::Mutation => format!("{base}/api/mutation"),
    }
}

pub(crate) fn function_request_body(path: &str, args: Value) -> Value {
    json!({ "path": path, "args": args, "format": "json" })
}

/// Decode a function response envelope into its value or a server error.
pub(crate) fn decode_function_response<T: DeserializeOwned>(raw: Value) -> Result<T, ServiceError> {
    match raw.get("status").and_then(Value::as_str) {
        Some("success") => {
            let value = raw.get("value").cloned().unwrap_or(Value::Null);
            serde_json::from_value(value).map_err(|e| ServiceError::Decode(e.to_string()))
        }
        Some("error") => {
            let message = raw
                .get("errorMessage")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_owned();
            let code = raw
                .get("errorData")
                .and_then(|data| data.get("code").or(Some(data)))
                .and_then(Value::as_str)
                .map(str::to_owned);
            Err(ServiceError::Server { code, message })
        }
        _ => Err(ServiceError::Decode(format!("unexpected response: {raw}"))),
    }
}

/// Report an unauthenticated rejection to the auth client, then pass the result on.
pub(crate) fn settle<T>(auth: &dyn AuthClient, result: Result<T, ServiceError>) -> Result<T, ServiceError> {
    if let Err(e) = &result
        && e.is_unauthenticated()
    {
        log::info!("session rejected by data service: {e}");
        auth.session_lost();
    }
    result
}

/// HTTP implementation of [`DataService`].
pub struct HttpDataService {
    base_url: String,
    auth: Rc<dyn AuthClient>,
}

impl HttpDataService {
    pub fn new(base_url: impl Into<String>, auth: Rc<dyn AuthClient>) -> Self {
        Self { base_url: base_url.into(), auth }
    }

    async fn call<T: DeserializeOwned>(&self, kind: FunctionKind, path: &str, args: Value) -> Result<T, ServiceError> {
        #[cfg(feature = "csr")]
        {
            let url = function_endpoint(&self.base_url, kind);
            let body = function_request_body(path, args);
            let mut request = gloo_net::http::Request::post(&url);
            if let Some(token) = self.auth.token().await? {
                request = request.header("Authorization", &format!("Bearer {token}"));
            }
            let resp = request
                .json(&body)
                .map_err(|e| ServiceError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ServiceError::Network(e.to_string()))?;
            let status = resp.status();
            let raw: Value = match resp.json().await {
                Ok(raw) => raw,
                Err(_) if status == 401 => {
                    let err = ServiceError::Server {
                        code: Some("UNAUTHORIZED".to_owned()),
                        message: format!("request failed: {status}"),
                    };
                    return settle(&*self.auth, Err(err));
                }
                Err(_) if !resp.ok() => {
                    return Err(ServiceError::Server { code: None, message: format!("request failed: {status}") });
                }
                Err(e) => return Err(ServiceError::Decode(e.to_string())),
            };
            log::debug!("{path} -> {status}");
            settle(&*self.auth, decode_function_response(raw))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&self.base_url, kind, path, args);
            settle(&*self.auth, Err(ServiceError::Unavailable))
        }
    }
}

#[async_trait::async_trait(?Send)]
impl DataService for HttpDataService {
    async fn get_messages(&self) -> Result<Vec<MessageWithUser>, ServiceError> {
        self.call(FunctionKind::Query, GET_MESSAGES, json!({})).await
    }

    async fn get_filtered_messages_by_content(&self, content: &str) -> Result<Vec<MessageWithUser>, ServiceError> {
        self.call(FunctionKind::Query, GET_FILTERED_MESSAGES_BY_CONTENT, json!({ "content": content }))
            .await
    }

    async fn send_message(&self, content: &str) -> Result<(), ServiceError> {
        self.call(FunctionKind::Mutation, SEND_MESSAGE, json!({ "content": content }))
            .await
    }

    async fn update_user_profile(&self, name: Option<&str>) -> Result<(), ServiceError> {
        let args = match name {
            Some(name) => json!({ "name": name }),
            None => json!({}),
        };
        self.call(FunctionKind::Mutation, UPDATE_USER_PROFILE, args).await
    }
}
