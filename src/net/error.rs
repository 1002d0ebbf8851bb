//! Failure type shared by every service call.

/// Errors produced by data-service and auth-client calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The request never produced a response.
    #[error("NETWORK_ERROR: {0}")]
    Network(String),

    /// The platform answered with an application-level error.
    #[error("{message}")]
    Server { code: Option<String>, message: String },

    /// The response body did not match the expected schema.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// Called outside a browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ServiceError {
    /// The platform refused the call because the caller has no valid session.
    pub fn is_unauthenticated(&self) -> bool {
        let Self::Server { code, message } = self else {
            return false;
        };
        if code.as_deref().is_some_and(|c| matches!(c, "UNAUTHORIZED" | "UNAUTHENTICATED" | "SESSION_EXPIRED")) {
            return true;
        }
        let lowered = message.to_lowercase();
        lowered.contains("unauthenticated") || lowered.contains("not authenticated")
    }
}
