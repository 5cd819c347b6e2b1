//! Address RPCs for NomenclateClient.

use super::{NomenclateClient, Request, Transport};
use crate::domain::{Balance, NomenclateError, Page, Paging};

impl<T: Transport> NomenclateClient<T> {
    /// Unspent outputs paying to `address`. See [`Paging::UNSPENT`].
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `address` is empty.
    pub async fn list_unspent(
        &self,
        address: &str,
        paging: Paging,
    ) -> Result<Page, NomenclateError> {
        self.call_as(&Request::unspent(address, paging)?).await
    }

    /// Transaction history of `address`. See [`Paging::HISTORY`].
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `address` is empty.
    pub async fn address_history(
        &self,
        address: &str,
        paging: Paging,
    ) -> Result<Page, NomenclateError> {
        self.call_as(&Request::address_history(address, paging)?)
            .await
    }

    /// Confirmed and unconfirmed balance of `address`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `address` is empty; `UnexpectedResponse` if
    /// either balance is missing or negative.
    pub async fn address_balance(&self, address: &str) -> Result<Balance, NomenclateError> {
        self.call_as(&Request::balance(address)?).await
    }
}
