//! Connection configuration for Nomenclate servers.
//!
//! [`ClientOptions`] is handed to the transport unmodified. It derives serde
//! traits with per-field defaults so it can be embedded in an application's
//! own configuration file.
//!
//! # Example
//!
//! ```
//! use nomenclate::ClientOptions;
//! use std::time::Duration;
//!
//! let options = ClientOptions::new("node.example.org", 8443)
//!     .with_ssl(true)
//!     .with_credentials("nomenclate", "hunter2")
//!     .with_timeout(Duration::from_secs(10));
//!
//! assert_eq!(options.base_url(), "https://node.example.org:8443");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::constants::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TIMEOUT_MS};

// ============================================================================
// ClientOptions
// ============================================================================

/// Host, port and transport settings for a Nomenclate server.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
    /// Server hostname or IP address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Use `https` instead of `http`.
    pub ssl: bool,
    /// Prefix prepended to every request path (e.g. when behind a proxy).
    pub path: String,
    /// Username for HTTP basic auth.
    pub username: Option<String>,
    /// Password for HTTP basic auth. Credentials are sent only when set.
    pub password: Option<String>,
    /// Per-request timeout in milliseconds. `0` disables the timeout.
    pub timeout_ms: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            ssl: false,
            path: String::new(),
            username: None,
            password: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ClientOptions {
    /// Options for `host:port` with every other setting at its default.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    /// Enable or disable TLS.
    #[must_use]
    pub fn with_ssl(mut self, ssl: bool) -> Self {
        self.ssl = ssl;
        self
    }

    /// Set the path prefix shared by every endpoint.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Set HTTP basic auth credentials.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Set the per-request timeout.
    ///
    /// Sub-millisecond durations round up to one millisecond;
    /// `Duration::ZERO` disables the timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let millis = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self.timeout_ms = if millis == 0 && !timeout.is_zero() {
            1
        } else {
            millis
        };
        self
    }

    /// The per-request timeout, or `None` when disabled.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        match self.timeout_ms {
            0 => None,
            millis => Some(Duration::from_millis(millis)),
        }
    }

    /// URL scheme implied by [`ssl`](Self::ssl).
    #[must_use]
    pub const fn scheme(&self) -> &'static str {
        if self.ssl { "https" } else { "http" }
    }

    /// Base URL every request path is appended to, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> String {
        let path = self.path.trim_end_matches('/');
        let separator = if path.is_empty() || path.starts_with('/') {
            ""
        } else {
            "/"
        };
        let host = if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        };
        format!(
            "{}://{}:{}{}{}",
            self.scheme(),
            host,
            self.port,
            separator,
            path
        )
    }

    /// Basic auth pair to attach to requests, if a password is configured.
    #[must_use]
    pub fn basic_auth(&self) -> Option<(&str, &str)> {
        let password = self.password.as_deref()?;
        Some((self.username.as_deref().unwrap_or_default(), password))
    }
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("ssl", &self.ssl)
            .field("path", &self.path)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        let options = ClientOptions::default();
        assert_eq!(options.host, "localhost");
        assert_eq!(options.port, 8080);
        assert!(!options.ssl);
        assert_eq!(options.timeout(), Some(Duration::from_secs(30)));
        assert!(options.basic_auth().is_none());
    }

    #[rstest]
    #[case::plain(ClientOptions::new("localhost", 8080), "http://localhost:8080")]
    #[case::ssl(ClientOptions::new("node.org", 443).with_ssl(true), "https://node.org:443")]
    #[case::prefix(ClientOptions::new("h", 1).with_path("/api/"), "http://h:1/api")]
    #[case::bare_prefix(ClientOptions::new("h", 1).with_path("api"), "http://h:1/api")]
    #[case::ipv6(ClientOptions::new("::1", 8080), "http://[::1]:8080")]
    fn test_base_url(#[case] options: ClientOptions, #[case] expected: &str) {
        assert_eq!(options.base_url(), expected);
    }

    #[test]
    fn test_basic_auth_requires_password() {
        let mut options = ClientOptions::default();
        options.username = Some("user".to_string());
        assert!(options.basic_auth().is_none());

        let options = ClientOptions::default().with_credentials("user", "secret");
        assert_eq!(options.basic_auth(), Some(("user", "secret")));

        let mut options = ClientOptions::default();
        options.password = Some("secret".to_string());
        assert_eq!(options.basic_auth(), Some(("", "secret")));
    }

    #[test]
    fn test_debug_redacts_password() {
        let options = ClientOptions::default().with_credentials("user", "secret");
        let debug = format!("{:?}", options);
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("secret"));
    }

    #[rstest]
    #[case::sub_second(Duration::from_millis(500), 500, Some(Duration::from_millis(500)))]
    #[case::rounds_up(Duration::from_micros(10), 1, Some(Duration::from_millis(1)))]
    #[case::seconds(Duration::from_secs(10), 10_000, Some(Duration::from_secs(10)))]
    #[case::disabled(Duration::ZERO, 0, None)]
    fn test_with_timeout_keeps_millisecond_precision(
        #[case] timeout: Duration,
        #[case] millis: u64,
        #[case] expected: Option<Duration>,
    ) {
        let options = ClientOptions::default().with_timeout(timeout);
        assert_eq!(options.timeout_ms, millis);
        assert_eq!(options.timeout(), expected);
    }

    #[test]
    fn test_zero_timeout_from_json_disables_timeout() {
        let options: ClientOptions = serde_json::from_str(r#"{ "timeout_ms": 0 }"#).unwrap();
        assert!(options.timeout().is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let options: ClientOptions =
            serde_json::from_str(r#"{ "host": "10.0.0.2", "ssl": true }"#).unwrap();
        assert_eq!(options.host, "10.0.0.2");
        assert_eq!(options.port, 8080);
        assert!(options.ssl);
        assert_eq!(options.timeout_ms, 30_000);
    }
}
