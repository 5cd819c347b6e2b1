//! Address balance type.

use serde::{Deserialize, Serialize};

/// Response of `addressBalance`, in the chain's smallest unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Balance {
    /// Balance confirmed in blocks.
    pub confirmed: u64,
    /// Balance from mempool transactions.
    pub unconfirmed: u64,
}

impl Balance {
    /// Confirmed plus unconfirmed balance.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.confirmed.saturating_add(self.unconfirmed)
    }
}
