//! Server metadata RPCs for NomenclateClient.

use serde_json::Value;

use super::{NomenclateClient, Request, Transport};
use crate::domain::{Banner, Features, NomenclateError};

impl<T: Transport> NomenclateClient<T> {
    /// The operator's banner text.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response lacks `banner`.
    pub async fn banner(&self) -> Result<Banner, NomenclateError> {
        self.call_as(&Request::banner()).await
    }

    /// Server version and supported protocol range.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or a required field is missing.
    pub async fn features(&self) -> Result<Features, NomenclateError> {
        self.call_as(&Request::features()).await
    }

    /// Liveness check. The body is server-defined.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn ping(&self) -> Result<Value, NomenclateError> {
        self.call(&Request::ping()).await
    }

    /// Server version identifier, as sent by the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn version(&self) -> Result<Value, NomenclateError> {
        self.call(&Request::version()).await
    }
}
