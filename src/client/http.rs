//! Transport abstraction and the default reqwest-backed implementation.
//!
//! [`NomenclateClient`](super::NomenclateClient) talks to the server only
//! through the [`Transport`] trait, so the HTTP stack can be swapped (or
//! mocked in tests) without touching the RPC layer.

use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::future::Future;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::config::ClientOptions;
use crate::constants::{POOL_IDLE_TIMEOUT_SECS, POOL_MAX_IDLE_PER_HOST};
use crate::domain::TransportError;

// ============================================================================
// Traits
// ============================================================================

/// Connection-level operations the client delegates to.
///
/// Paths are relative to the server's base URL and already percent-encoded;
/// query values are sent as-is in the order given.
pub trait Transport: Send + Sync {
    /// Prepare the connection. No request may be issued before this.
    fn open(&self) -> impl Future<Output = Result<(), TransportError>> + Send;

    /// Release the connection.
    fn close(&self) -> impl Future<Output = Result<(), TransportError>> + Send;

    /// Issue a GET and decode the JSON response.
    fn get(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> impl Future<Output = Result<Value, TransportError>> + Send;

    /// Issue a POST with a JSON body and decode the JSON response.
    fn post(
        &self,
        path: &str,
        body: &Value,
    ) -> impl Future<Output = Result<Value, TransportError>> + Send;
}

// ============================================================================
// HTTP Client
// ============================================================================

/// Pooled connection state created by [`HttpClient::open`].
#[derive(Debug, Clone)]
struct Connection {
    inner: Client,
    base_url: String,
}

/// [`Transport`] over HTTP(S) using `reqwest`.
#[derive(Debug)]
pub struct HttpClient {
    options: ClientOptions,
    connection: RwLock<Option<Connection>>,
}

impl HttpClient {
    /// Create a closed client. No I/O happens until [`open`](Transport::open).
    #[must_use]
    pub fn new(options: ClientOptions) -> Self {
        Self {
            options,
            connection: RwLock::new(None),
        }
    }

    /// The options this client was built with.
    #[must_use]
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Whether [`open`](Transport::open) has been called without a matching close.
    pub async fn is_open(&self) -> bool {
        self.connection.read().await.is_some()
    }

    fn connect(&self) -> Result<Connection, TransportError> {
        let base_url = self.options.base_url();
        reqwest::Url::parse(&base_url).map_err(|e| TransportError::InvalidUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;

        let mut builder = Client::builder()
            .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
            .pool_idle_timeout(Duration::from_secs(POOL_IDLE_TIMEOUT_SECS));
        if let Some(timeout) = self.options.timeout() {
            builder = builder.timeout(timeout);
        }
        let inner = builder.build()?;

        Ok(Connection { inner, base_url })
    }

    async fn connection(&self) -> Result<Connection, TransportError> {
        self.connection
            .read()
            .await
            .clone()
            .ok_or(TransportError::NotOpen)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = request.header("accept", "application/json");
        match self.options.basic_auth() {
            Some((username, password)) => request.basic_auth(username, Some(password)),
            None => request,
        }
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        path: &str,
    ) -> Result<Value, TransportError> {
        let response = self.authorize(request).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            tracing::debug!("{path} returned 404");
            return Err(TransportError::NotFound {
                path: path.to_string(),
            });
        }

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response body".to_string());
            tracing::warn!("{path} returned HTTP {status}: {body}");
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(ClientOptions::default())
    }
}

impl Transport for HttpClient {
    async fn open(&self) -> Result<(), TransportError> {
        let mut connection = self.connection.write().await;
        if connection.is_none() {
            let opened = self.connect()?;
            tracing::debug!("Opened connection to {}", opened.base_url);
            *connection = Some(opened);
        }
        Ok(())
    }

    async fn close(&self) -> Result<(), TransportError> {
        if self.connection.write().await.take().is_some() {
            tracing::debug!("Closed connection to {}", self.options.base_url());
        }
        Ok(())
    }

    async fn get(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<Value, TransportError> {
        let connection = self.connection().await?;
        let url = format!("{}{}", connection.base_url, path);
        self.send(connection.inner.get(&url).query(query), path).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
        let connection = self.connection().await?;
        let url = format!("{}{}", connection.base_url, path);
        self.send(connection.inner.post(&url).json(body), path).await
    }
}
