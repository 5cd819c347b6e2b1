//! Transaction lookup types.
//!
//! `getTransaction` answers with a different shape depending on the `merkle`
//! and `verbose` flags, so the optional parts are modelled as `Option`s and
//! checked against the flags by the client.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Options
// ============================================================================

/// Flags for `getTransaction`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TxOptions {
    /// Ask for the transaction's merkle proof within its block.
    pub merkle: bool,
    /// Ask for the decoded transaction instead of raw hex only.
    pub verbose: bool,
}

impl TxOptions {
    /// Raw hex plus merkle proof.
    #[must_use]
    pub const fn merkle() -> Self {
        Self {
            merkle: true,
            verbose: false,
        }
    }

    /// Decoded transaction.
    #[must_use]
    pub const fn verbose() -> Self {
        Self {
            merkle: false,
            verbose: true,
        }
    }

    /// Decoded transaction plus merkle proof.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            merkle: true,
            verbose: true,
        }
    }
}

// ============================================================================
// Merkle Proof
// ============================================================================

/// Position of a transaction inside a block together with its merkle branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxMerkleProof {
    /// Sibling hashes from the transaction up to the block's merkle root.
    pub merkle: Vec<String>,
    /// Index of the transaction within the block.
    pub pos: u64,
    /// Height of the block containing the transaction.
    pub block_height: u64,
}

// ============================================================================
// Transaction
// ============================================================================

/// Response of `getTransaction`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionInfo {
    /// Raw transaction, hex-encoded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
    /// Transaction id (verbose only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub txid: Option<String>,
    /// Witness hash (verbose only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    /// Merkle proof (merkle only).
    #[serde(flatten)]
    pub proof: Option<TxMerkleProof>,
    /// Remaining decoded fields, e.g. inputs and outputs in verbose mode.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TransactionInfo {
    /// Names of the fields `options` requires that this response lacks.
    #[must_use]
    pub fn missing_fields(&self, options: TxOptions) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if (!options.verbose || options.merkle) && self.hex.is_none() {
            missing.push("hex");
        }
        if options.verbose {
            if self.txid.is_none() {
                missing.push("txid");
            }
            if self.hash.is_none() {
                missing.push("hash");
            }
        }
        if options.merkle && self.proof.is_none() {
            missing.push("merkle");
        }
        missing
    }
}

/// Response of `getTransactionByPosition`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TxPosition {
    /// Returned when a merkle proof was requested.
    WithMerkle {
        /// Hash of the transaction at the position.
        tx_hash: String,
        /// Merkle branch of the transaction.
        merkle: Vec<String>,
    },
    /// Returned when no proof was requested.
    Hash {
        /// Hash of the transaction at the position.
        hash: String,
    },
}

impl TxPosition {
    /// The transaction hash, whichever shape was returned.
    #[must_use]
    pub fn tx_hash(&self) -> &str {
        match self {
            Self::WithMerkle { tx_hash, .. } => tx_hash,
            Self::Hash { hash } => hash,
        }
    }

    /// The merkle branch, if one was returned.
    #[must_use]
    pub fn merkle(&self) -> Option<&[String]> {
        match self {
            Self::WithMerkle { merkle, .. } => Some(merkle),
            Self::Hash { .. } => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
