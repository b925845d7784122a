//! Network call failures, split by how far the request got.

#[cfg(test)]
#[path = "failure_test.rs"]
mod failure_test;

use serde_json::Value;

/// Three-way failure shape for REST calls.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum NetworkFailure {
    /// The server answered with a non-2xx status.
    #[error("server responded with status {status}")]
    ServerError { status: u16, body: Option<Value> },

    /// The request was sent but no response arrived.
    #[error("no response from server: {reason}")]
    Unreachable { reason: String },

    /// The request never left the client, or its response could not be used.
    #[error("request failed: {reason}")]
    ClientFault { reason: String },
}

impl NetworkFailure {
    /// Build a server error, keeping the body only if it is JSON.
    #[must_use]
    pub fn server_error(status: u16, body_text: &str) -> Self {
        Self::ServerError { status, body: serde_json::from_str(body_text).ok() }
    }

    pub fn client_fault(reason: impl Into<String>) -> Self {
        Self::ClientFault { reason: reason.into() }
    }

    /// Non-empty `message` string from a server error body.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::ServerError { body: Some(body), .. } => body
                .get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.trim().is_empty()),
            _ => None,
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ServerError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Map a transport error from `send()`.
    ///
    /// `fetch` rejections surface as `JsError`; everything else failed before
    /// the request was dispatched.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn from_send_error(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::JsError(e) => Self::Unreachable { reason: e.to_string() },
            other => Self::ClientFault { reason: other.to_string() },
        }
    }
}
