//! Transaction RPCs for NomenclateClient.

use serde_json::Value;

use super::{NomenclateClient, Request, Transport};
use crate::domain::{NomenclateError, TransactionInfo, TxMerkleProof, TxOptions, TxPosition};

impl<T: Transport> NomenclateClient<T> {
    /// Look up a transaction by hash.
    ///
    /// The fields present depend on `options`: raw `hex` by default and with
    /// `merkle`, the merkle proof with `merkle`, decoded `txid`/`hash` with
    /// `verbose`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` unless `hash` is 64 characters long;
    /// `UnexpectedResponse` if a field implied by `options` is missing.
    pub async fn get_transaction(
        &self,
        hash: &str,
        options: TxOptions,
    ) -> Result<TransactionInfo, NomenclateError> {
        let request = Request::transaction(hash, options)?;
        let info: TransactionInfo = self.call_as(&request).await?;

        let missing = info.missing_fields(options);
        if !missing.is_empty() {
            return Err(NomenclateError::unexpected(
                request.rpc(),
                format!("missing fields: {}", missing.join(", ")),
            ));
        }
        Ok(info)
    }

    /// Submit a raw transaction. The acknowledgment is returned unchanged.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `hex` is empty; transport errors otherwise.
    pub async fn broadcast_transaction(&self, hex: &str) -> Result<Value, NomenclateError> {
        let request = Request::broadcast(hex)?;
        let ack = self.call(&request).await?;
        tracing::info!("Broadcast transaction ({} hex chars)", hex.len());
        Ok(ack)
    }

    /// Merkle proof for a transaction in the block at `block_height`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` unless `hash` is 64 characters long.
    pub async fn get_merkle(
        &self,
        hash: &str,
        block_height: u32,
    ) -> Result<TxMerkleProof, NomenclateError> {
        self.call_as(&Request::merkle(hash, block_height)?).await
    }

    /// Hash of the transaction at `index` in the block at `height`.
    ///
    /// # Errors
    ///
    /// `UnexpectedResponse` if the shape does not match the `merkle` flag.
    pub async fn get_transaction_by_position(
        &self,
        height: u32,
        index: u32,
        merkle: bool,
    ) -> Result<TxPosition, NomenclateError> {
        let request = Request::transaction_by_position(height, index, merkle);
        let position: TxPosition = self.call_as(&request).await?;

        if merkle && position.merkle().is_none() {
            return Err(NomenclateError::unexpected(
                request.rpc(),
                "missing tx_hash/merkle",
            ));
        }
        Ok(position)
    }
}
