//! # nomenclate
//!
//! Async HTTP client for Nomenclate, an indexing server for the Handshake
//! blockchain. It covers block headers, transactions, addresses, name
//! auction history and server metadata.
//!
//! The crate maps each RPC to a validated [`Request`] and hands it to a
//! [`Transport`]. The bundled [`HttpClient`] transport uses `reqwest`; any
//! other implementation can be plugged in with
//! [`NomenclateClient::with_transport`].
//!
//! ```no_run
//! use nomenclate::{ClientOptions, NomenclateClient, Paging};
//!
//! # async fn example() -> Result<(), nomenclate::NomenclateError> {
//! let client = NomenclateClient::new(ClientOptions::default());
//! client.open().await?;
//!
//! let balance = client
//!     .address_balance("ts1qxvf3qamm2gm0m3k72g3v9q65ft755ftm4yc85x")
//!     .await?;
//! let history = client.get_name_history("number", Paging::NAME_HISTORY).await?;
//! println!("{} confirmed, {} history entries", balance.confirmed, history.total);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod constants;
pub mod domain;

#[cfg(test)]
pub(crate) mod test_utils;

pub use client::{HttpClient, Method, NomenclateClient, Request, Transport};
pub use config::ClientOptions;
pub use domain::{
    Balance, Banner, BlockHeader, BlockHeaders, Features, Fee, MerkleBranch, NomenclateError,
    Page, Paging, TransactionInfo, TransportError, TxMerkleProof, TxOptions, TxPosition,
};
