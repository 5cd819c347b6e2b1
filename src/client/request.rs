//! Mapping from RPC calls to HTTP requests.
//!
//! Every constructor here validates its arguments and renders the path and
//! query string for one RPC. Nothing in this module touches the network, so a
//! rejected call never reaches the transport.

use serde_json::{Value, json};
use std::fmt;

use crate::constants::{API_PREFIX, NO_CHECKPOINT, TX_HASH_LEN};
use crate::domain::{NomenclateError, Paging, TxOptions};

// ============================================================================
// Method
// ============================================================================

/// HTTP method used by an RPC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Read-only query.
    Get,
    /// Submission with a JSON body.
    Post,
}

impl Method {
    /// Upper-case method name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Request
// ============================================================================

/// A validated RPC ready to hand to a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    rpc: &'static str,
    method: Method,
    path: String,
    query: Vec<(&'static str, String)>,
    body: Option<Value>,
}

impl Request {
    fn get(rpc: &'static str, path: String) -> Self {
        Self {
            rpc,
            method: Method::Get,
            path,
            query: Vec::new(),
            body: None,
        }
    }

    fn with_query(mut self, name: &'static str, value: impl ToString) -> Self {
        self.query.push((name, value.to_string()));
        self
    }

    fn with_paging(mut self, paging: Paging) -> Self {
        self.query.extend(paging.query());
        self
    }

    /// Server-side name of the RPC, e.g. `getHeader`.
    #[must_use]
    pub const fn rpc(&self) -> &'static str {
        self.rpc
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Percent-encoded path, relative to the server's base URL.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameters in wire order.
    #[must_use]
    pub fn query(&self) -> &[(&'static str, String)] {
        &self.query
    }

    /// JSON body for POST requests.
    #[must_use]
    pub const fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    // ------------------------------------------------------------------------
    // Blockchain
    // ------------------------------------------------------------------------

    /// `GET /nomenclate/block/{height}/header?cp_height=`
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `cp_height` is non-zero and below `height`.
    pub fn header(height: u32, cp_height: u32) -> Result<Self, NomenclateError> {
        if cp_height != NO_CHECKPOINT && height > cp_height {
            return Err(NomenclateError::invalid_argument(
                "height",
                format!("height {height} is above checkpoint height {cp_height}"),
            ));
        }

        Ok(Self::get("getHeader", endpoint(&["block", &height.to_string(), "header"]))
            .with_query("cp_height", cp_height))
    }

    /// `GET /nomenclate/block/{height}/headers?count=&cp_height=`
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `cp_height` is non-zero and the last requested
    /// header would lie above it.
    pub fn headers(height: u32, count: u32, cp_height: u32) -> Result<Self, NomenclateError> {
        if cp_height != NO_CHECKPOINT {
            let last = i64::from(height) + i64::from(count) - 1;
            if last > i64::from(cp_height) {
                return Err(NomenclateError::invalid_argument(
                    "count",
                    format!(
                        "headers {height}..={last} extend past checkpoint height {cp_height}"
                    ),
                ));
            }
        }

        Ok(
            Self::get("getHeaders", endpoint(&["block", &height.to_string(), "headers"]))
                .with_query("count", count)
                .with_query("cp_height", cp_height),
        )
    }

    /// `GET /nomenclate/blockchain/estimatefee?blocks_count=`
    #[must_use]
    pub fn estimate_fee(blocks_count: u32) -> Self {
        Self::get("estimateFee", endpoint(&["blockchain", "estimatefee"]))
            .with_query("blocks_count", blocks_count)
    }

    /// `GET /nomenclate/blockchain/relayfee`
    #[must_use]
    pub fn relay_fee() -> Self {
        Self::get("relayFee", endpoint(&["blockchain", "relayfee"]))
    }

    // ------------------------------------------------------------------------
    // Transactions
    // ------------------------------------------------------------------------

    /// `GET /nomenclate/transaction/{hash}?merkle=&verbose=`
    ///
    /// # Errors
    ///
    /// `InvalidArgument` unless `hash` is exactly 64 characters.
    pub fn transaction(hash: &str, options: TxOptions) -> Result<Self, NomenclateError> {
        check_hash(hash)?;

        Ok(Self::get("getTransaction", endpoint(&["transaction", hash]))
            .with_query("merkle", options.merkle)
            .with_query("verbose", options.verbose))
    }

    /// `POST /nomenclate/transaction/broadcast` with body `{"tx": hex}`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `hex` is empty.
    pub fn broadcast(hex: &str) -> Result<Self, NomenclateError> {
        if hex.is_empty() {
            return Err(NomenclateError::invalid_argument(
                "hex",
                "raw transaction must not be empty",
            ));
        }

        Ok(Self {
            rpc: "broadcastTransaction",
            method: Method::Post,
            path: endpoint(&["transaction", "broadcast"]),
            query: Vec::new(),
            body: Some(json!({ "tx": hex })),
        })
    }

    /// `GET /nomenclate/transaction/{hash}/merkle/{block_height}`
    ///
    /// # Errors
    ///
    /// `InvalidArgument` unless `hash` is exactly 64 characters.
    pub fn merkle(hash: &str, block_height: u32) -> Result<Self, NomenclateError> {
        check_hash(hash)?;

        Ok(Self::get(
            "getMerkle",
            endpoint(&["transaction", hash, "merkle", &block_height.to_string()]),
        ))
    }

    /// `GET /nomenclate/transaction/{height}/byPosition/{index}?merkle=`
    #[must_use]
    pub fn transaction_by_position(height: u32, index: u32, merkle: bool) -> Self {
        Self::get(
            "getTransactionByPosition",
            endpoint(&[
                "transaction",
                &height.to_string(),
                "byPosition",
                &index.to_string(),
            ]),
        )
        .with_query("merkle", merkle)
    }

    // ------------------------------------------------------------------------
    // Addresses
    // ------------------------------------------------------------------------

    /// `GET /nomenclate/address/{address}/unspent?limit=&offset=`
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `address` is empty.
    pub fn unspent(address: &str, paging: Paging) -> Result<Self, NomenclateError> {
        check_segment("address", address)?;
        Ok(Self::get("listUnspent", endpoint(&["address", address, "unspent"])).with_paging(paging))
    }

    /// `GET /nomenclate/address/{address}/history?limit=&offset=`
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `address` is empty.
    pub fn address_history(address: &str, paging: Paging) -> Result<Self, NomenclateError> {
        check_segment("address", address)?;
        Ok(
            Self::get("addressHistory", endpoint(&["address", address, "history"]))
                .with_paging(paging),
        )
    }

    /// `GET /nomenclate/address/{address}/balance`
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `address` is empty.
    pub fn balance(address: &str) -> Result<Self, NomenclateError> {
        check_segment("address", address)?;
        Ok(Self::get("addressBalance", endpoint(&["address", address, "balance"])))
    }

    // ------------------------------------------------------------------------
    // Server
    // ------------------------------------------------------------------------

    /// `GET /nomenclate/banner`
    #[must_use]
    pub fn banner() -> Self {
        Self::get("banner", endpoint(&["banner"]))
    }

    /// `GET /nomenclate/features`
    #[must_use]
    pub fn features() -> Self {
        Self::get("features", endpoint(&["features"]))
    }

    /// `GET /nomenclate/ping`
    #[must_use]
    pub fn ping() -> Self {
        Self::get("ping", endpoint(&["ping"]))
    }

    /// `GET /nomenclate/version`
    #[must_use]
    pub fn version() -> Self {
        Self::get("version", endpoint(&["version"]))
    }

    // ------------------------------------------------------------------------
    // Names
    // ------------------------------------------------------------------------

    /// `GET /nomenclate/name/{name}/history?limit=&offset=`
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `name` is empty.
    pub fn name_history(name: &str, paging: Paging) -> Result<Self, NomenclateError> {
        check_segment("name", name)?;
        Ok(Self::get("getNameHistory", endpoint(&["name", name, "history"])).with_paging(paging))
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)?;
        for (i, (name, value)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{name}={}", urlencoding::encode(value))?;
        }
        Ok(())
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Join percent-encoded segments under the API prefix.
fn endpoint(segments: &[&str]) -> String {
    let mut path = String::from(API_PREFIX);
    for segment in segments {
        path.push('/');
        path.push_str(&urlencoding::encode(segment));
    }
    path
}

fn check_hash(hash: &str) -> Result<(), NomenclateError> {
    let len = hash.chars().count();
    if len != TX_HASH_LEN {
        return Err(NomenclateError::invalid_argument(
            "hash",
            format!("expected {TX_HASH_LEN} characters, got {len}"),
        ));
    }
    Ok(())
}

fn check_segment(argument: &'static str, value: &str) -> Result<(), NomenclateError> {
    if value.is_empty() {
        return Err(NomenclateError::invalid_argument(argument, "must not be empty"));
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
