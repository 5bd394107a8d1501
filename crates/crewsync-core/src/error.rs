//! Error taxonomy for backend interactions.
//!
//! Every variant is caught at the call site that initiated the action and
//! turned into a transient user-visible notification. None are fatal; the
//! polling schedule never halts on an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never completed (DNS, connect, timeout, ...).
    #[error("network error: {0}")]
    Network(String),

    /// Missing/empty token (request not attempted) or a 401 response.
    #[error("authentication error: {0}")]
    Auth(String),

    /// 403 response: the backend refused this specific action.
    #[error("permission denied: {0}")]
    Permission(String),

    /// Any other non-2xx, or a 2xx envelope with `success: false`.
    #[error("server error (status {status}): {message}")]
    Server { status: u16, message: String },

    /// The body was not the envelope shape we expect.
    #[error("decode error: {0}")]
    Decode(String),
}

impl ClientError {
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, ClientError::Permission(_))
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network() {
        let err = ClientError::Network("connection refused".into());
        assert_eq!(err.to_string(), "network error: connection refused");
    }

    #[test]
    fn display_server_carries_status() {
        let err = ClientError::Server {
            status: 500,
            message: "boom".into(),
        };
        assert_eq!(err.to_string(), "server error (status 500): boom");
    }

    #[test]
    fn permission_is_distinguishable() {
        assert!(ClientError::Permission("no".into()).is_permission_denied());
        assert!(!ClientError::Network("no".into()).is_permission_denied());
    }
}
