//! Client for the Nomenclate REST API.
//!
//! [`NomenclateClient`] owns a [`Transport`] and exposes one async method per
//! server RPC. Each method validates its arguments into a [`Request`],
//! dispatches it, and decodes the response into a typed model. The raw JSON is
//! available through [`NomenclateClient::call`].
//!
//! # Example
//!
//! ```no_run
//! use nomenclate::{ClientOptions, NomenclateClient, TxOptions};
//!
//! # async fn example() -> Result<(), nomenclate::NomenclateError> {
//! let client = NomenclateClient::new(ClientOptions::new("localhost", 8080));
//! client.open().await?;
//!
//! let header = client.get_header(5, 0).await?;
//! println!("header: {}", header.header);
//!
//! let tx = client
//!     .get_transaction(
//!         "5c500def0d0ebf0fe325d66ce7e56992809d5da7837c6dd563cbea272e8ab201",
//!         TxOptions::merkle(),
//!     )
//!     .await?;
//! println!("block height: {:?}", tx.proof.map(|p| p.block_height));
//!
//! client.close().await?;
//! # Ok(())
//! # }
//! ```

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ClientOptions;
use crate::domain::NomenclateError;

mod addresses;
mod blockchain;
pub mod http;
mod names;
pub mod request;
mod server;
mod transactions;


// ============================================================================
// Re-exports
// ============================================================================

pub use http::{HttpClient, Transport};
pub use request::{Method, Request};

// ============================================================================
// Nomenclate Client
// ============================================================================

/// Typed client for a Nomenclate server.
///
/// Stateless apart from the transport; calls may run concurrently.
#[derive(Debug)]
pub struct NomenclateClient<T = HttpClient> {
    transport: T,
}

impl NomenclateClient<HttpClient> {
    /// Create a client over HTTP. No I/O happens until [`open`](Self::open).
    #[must_use]
    pub fn new(options: ClientOptions) -> Self {
        Self::with_transport(HttpClient::new(options))
    }

    /// Connection options passed at construction.
    #[must_use]
    pub fn options(&self) -> &ClientOptions {
        self.transport.options()
    }
}

impl<T: Transport> NomenclateClient<T> {
    /// Create a client over any transport.
    #[must_use]
    pub const fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Consume the client, returning its transport.
    #[must_use]
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Open the transport.
    ///
    /// # Errors
    ///
    /// Returns the transport's error if the connection cannot be prepared.
    pub async fn open(&self) -> Result<(), NomenclateError> {
        Ok(self.transport.open().await?)
    }

    /// Close the transport.
    ///
    /// # Errors
    ///
    /// Returns the transport's error if closing fails.
    pub async fn close(&self) -> Result<(), NomenclateError> {
        Ok(self.transport.close().await?)
    }

    /// Dispatch a prepared request and return the decoded JSON unchanged.
    ///
    /// # Errors
    ///
    /// Returns `NomenclateError::Transport` if the transport fails.
    pub async fn call(&self, request: &Request) -> Result<Value, NomenclateError> {
        tracing::debug!(rpc = request.rpc(), "{request}");

        let value = match request.method() {
            Method::Get => self.transport.get(request.path(), request.query()).await?,
            Method::Post => match request.body() {
                Some(body) => self.transport.post(request.path(), body).await?,
                None => self.transport.post(request.path(), &Value::Null).await?,
            },
        };
        Ok(value)
    }

    /// Dispatch a request and decode the response into `R`.
    async fn call_as<R: DeserializeOwned>(&self, request: &Request) -> Result<R, NomenclateError> {
        let value = self.call(request).await?;
        serde_json::from_value(value)
            .map_err(|e| NomenclateError::unexpected(request.rpc(), e.to_string()))
    }
}
