//! Domain types for the Nomenclate client.
//!
//! Response models decoded from server JSON, the argument types the RPCs
//! accept, and the error types shared by the whole crate.
//!
//! # Module Organization
//!
//! - [`error`] - Client and transport error types
//! - [`block`] - Block headers, merkle branches and fees
//! - [`transaction`] - Transaction lookups and their flags
//! - [`address`] - Address balances
//! - [`page`] - Paged results and page selection
//! - [`server`] - Server banner and feature metadata

// ============================================================================
// Module Declarations
// ============================================================================

pub mod address;
pub mod block;
pub mod error;
pub mod page;
pub mod server;
pub mod transaction;

// ============================================================================
// Re-exports
// ============================================================================

pub use address::Balance;
pub use block::{BlockHeader, BlockHeaders, Fee, MerkleBranch};
pub use error::{NomenclateError, TransportError};
pub use page::{Page, Paging};
pub use server::{Banner, Features};
pub use transaction::{TransactionInfo, TxMerkleProof, TxOptions, TxPosition};
