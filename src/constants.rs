//! Shared constants for the Nomenclate client.
//!
//! Default connection settings, RPC argument defaults, and the path prefix
//! every server endpoint lives under.

// ============================================================================
// Connection Defaults
// ============================================================================

/// Host used when the caller does not configure one.
pub const DEFAULT_HOST: &str = "localhost";

/// Port a Nomenclate server listens on by default.
pub const DEFAULT_PORT: u16 = 8080;

/// Default timeout for HTTP requests in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Idle pooled connections are dropped after this many seconds.
pub const POOL_IDLE_TIMEOUT_SECS: u64 = 30;

/// Maximum idle pooled connections kept per host.
pub const POOL_MAX_IDLE_PER_HOST: usize = 4;

// ============================================================================
// RPC Defaults
// ============================================================================

/// Every endpoint is rooted here.
pub const API_PREFIX: &str = "/nomenclate";

/// Checkpoint height meaning "no merkle proof requested".
pub const NO_CHECKPOINT: u32 = 0;

/// Default page size for `list_unspent`.
pub const DEFAULT_UNSPENT_LIMIT: u32 = 25;

/// Default page size for `address_history`.
pub const DEFAULT_HISTORY_LIMIT: u32 = 10;

/// Default page size for `get_name_history`.
pub const DEFAULT_NAME_HISTORY_LIMIT: u32 = 10;

/// Default page offset for every paged RPC.
pub const DEFAULT_OFFSET: u32 = 0;

/// Length of a hex-encoded transaction hash.
pub const TX_HASH_LEN: usize = 64;
