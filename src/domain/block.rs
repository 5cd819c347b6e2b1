//! Block header and fee types returned by the blockchain RPCs.

use serde::{Deserialize, Serialize};

// ============================================================================
// Merkle Proof
// ============================================================================

/// Merkle branch anchoring headers to a checkpoint height.
///
/// Present only when a non-zero `cp_height` was requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleBranch {
    /// Hashes from the leaf up to the root.
    pub branch: Vec<String>,
    /// Merkle root at the checkpoint height.
    pub root: String,
}

// ============================================================================
// Headers
// ============================================================================

/// Response of `getHeader`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    /// Raw header, hex-encoded.
    pub header: String,
    /// Proof against the requested checkpoint.
    #[serde(flatten)]
    pub proof: Option<MerkleBranch>,
}

/// Response of `getHeaders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeaders {
    /// Number of headers actually returned.
    pub count: u32,
    /// Concatenated raw headers, hex-encoded.
    pub hex: String,
    /// Maximum number of headers the server returns per request.
    pub max: u32,
    /// Proof against the requested checkpoint.
    #[serde(flatten)]
    pub proof: Option<MerkleBranch>,
}

impl BlockHeaders {
    /// Split the concatenated hex into one string per header.
    ///
    /// Returns `None` when `hex` does not divide evenly into `count` headers.
    #[must_use]
    pub fn headers(&self) -> Option<Vec<&str>> {
        if self.count == 0 {
            return self.hex.is_empty().then(Vec::new);
        }
        let count = self.count as usize;
        if self.hex.len() % count != 0 || !self.hex.is_ascii() {
            return None;
        }
        let width = self.hex.len() / count;
        Some(
            (0..count)
                .map(|i| &self.hex[i * width..(i + 1) * width])
                .collect(),
        )
    }
}

// ============================================================================
// Fees
// ============================================================================

/// Response of `estimateFee` and `relayFee`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fee {
    /// Fee rate as reported by the server.
    pub fee: f64,
}

// ============================================================================
// Tests
// ============================================================================
