//! Error types for Nomenclate client operations.
//!
//! Two layers of errors exist: [`TransportError`] covers everything that goes
//! wrong while talking to the server, and [`NomenclateError`] wraps it together
//! with the failures the client detects on its own (bad arguments, responses
//! missing required fields).

use thiserror::Error;

// ============================================================================
// Transport Errors
// ============================================================================

/// Failures raised by a [`Transport`](crate::client::Transport).
///
/// The client never retries or rewrites these; they reach the caller as
/// [`NomenclateError::Transport`].
#[derive(Debug, Error)]
pub enum TransportError {
    /// A request was issued before `open()` or after `close()`.
    #[error("Transport is not open")]
    NotOpen,

    /// The configured host, port and path do not form a valid URL.
    #[error("Invalid server URL '{url}': {reason}")]
    InvalidUrl {
        /// The URL that failed to parse.
        url: String,
        /// Why parsing failed.
        reason: String,
    },

    /// Connection, timeout or TLS failure reported by the HTTP client.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered 404 for the requested path.
    #[error("Not found: {path}")]
    NotFound {
        /// The request path that was not found.
        path: String,
    },

    /// The server answered with a non-success status other than 404.
    #[error("Server error {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, which may contain error details.
        body: String,
    },

    /// The response body was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Client Errors
// ============================================================================

/// Error type returned by every [`NomenclateClient`](crate::NomenclateClient) call.
#[derive(Debug, Error)]
pub enum NomenclateError {
    /// A caller-supplied argument violates the RPC's preconditions.
    ///
    /// Raised before any network I/O happens.
    #[error("Invalid argument '{argument}': {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        argument: &'static str,
        /// Description of the violated precondition.
        reason: String,
    },

    /// The transport failed; propagated untouched.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server answered successfully but the body lacks required fields.
    #[error("Unexpected {rpc} response: {reason}")]
    UnexpectedResponse {
        /// The RPC whose response was rejected.
        rpc: &'static str,
        /// What was missing or malformed.
        reason: String,
    },
}

impl NomenclateError {
    /// Create a new invalid argument error.
    ///
    /// # Arguments
    ///
    /// * `argument` - Name of the offending argument
    /// * `reason` - Description of why the value is invalid
    #[must_use]
    pub fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    /// Create a new unexpected response error.
    #[must_use]
    pub fn unexpected(rpc: &'static str, reason: impl Into<String>) -> Self {
        Self::UnexpectedResponse {
            rpc,
            reason: reason.into(),
        }
    }

    /// Returns `true` if the call was rejected before reaching the network.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns the underlying transport error, if any.
    #[must_use]
    pub const fn transport(&self) -> Option<&TransportError> {
        match self {
            Self::Transport(err) => Some(err),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
