//! Block header and fee RPCs for NomenclateClient.

use super::{NomenclateClient, Request, Transport};
use crate::constants::NO_CHECKPOINT;
use crate::domain::{BlockHeader, BlockHeaders, Fee, NomenclateError};

impl<T: Transport> NomenclateClient<T> {
    /// Fetch the raw header at `height`.
    ///
    /// With a non-zero `cp_height` the response also carries a merkle proof
    /// anchoring the header to that checkpoint.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `cp_height` is non-zero and below `height`;
    /// `UnexpectedResponse` if a requested proof is missing.
    pub async fn get_header(
        &self,
        height: u32,
        cp_height: u32,
    ) -> Result<BlockHeader, NomenclateError> {
        let request = Request::header(height, cp_height)?;
        let header: BlockHeader = self.call_as(&request).await?;

        if cp_height != NO_CHECKPOINT && header.proof.is_none() {
            return Err(NomenclateError::unexpected(
                request.rpc(),
                "missing merkle branch/root for checkpoint",
            ));
        }
        Ok(header)
    }

    /// Fetch up to `count` consecutive headers starting at `height`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the range extends past a non-zero `cp_height`;
    /// `UnexpectedResponse` if a requested proof is missing.
    pub async fn get_headers(
        &self,
        height: u32,
        count: u32,
        cp_height: u32,
    ) -> Result<BlockHeaders, NomenclateError> {
        let request = Request::headers(height, count, cp_height)?;
        let headers: BlockHeaders = self.call_as(&request).await?;

        if cp_height != NO_CHECKPOINT && headers.proof.is_none() {
            return Err(NomenclateError::unexpected(
                request.rpc(),
                "missing merkle branch/root for checkpoint",
            ));
        }
        Ok(headers)
    }

    /// Estimated fee rate for confirmation within `blocks_count` blocks.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response lacks `fee`.
    pub async fn estimate_fee(&self, blocks_count: u32) -> Result<Fee, NomenclateError> {
        self.call_as(&Request::estimate_fee(blocks_count)).await
    }

    /// Minimum fee rate the server relays.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response lacks `fee`.
    pub async fn relay_fee(&self) -> Result<Fee, NomenclateError> {
        self.call_as(&Request::relay_fee()).await
    }
}
