//! Name auction RPCs for NomenclateClient.

use super::{NomenclateClient, Request, Transport};
use crate::domain::{NomenclateError, Page, Paging};

impl<T: Transport> NomenclateClient<T> {
    /// Transaction and auction history of `name`. See [`Paging::NAME_HISTORY`].
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `name` is empty.
    pub async fn get_name_history(
        &self,
        name: &str,
        paging: Paging,
    ) -> Result<Page, NomenclateError> {
        self.call_as(&Request::name_history(name, paging)?).await
    }
}
