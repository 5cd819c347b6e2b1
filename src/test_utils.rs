//! Shared test utilities and Mother pattern factories.
//!
//! `JsonMother` builds server responses for each RPC, and
//! `RecordingTransport` stands in for the HTTP stack so client tests can
//! inspect exactly what would have been sent.
#![allow(dead_code)]

use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::client::{Method, Transport};
use crate::domain::TransportError;

// ============================================================================
// Fixtures
// ============================================================================

/// A 64-character transaction hash.
pub const TX_HASH: &str = "5c500def0d0ebf0fe325d66ce7e56992809d5da7837c6dd563cbea272e8ab201";

/// A testnet address.
pub const ADDRESS: &str = "ts1qxvf3qamm2gm0m3k72g3v9q65ft755ftm4yc85x";

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct JsonMother;

impl JsonMother {
    #[must_use]
    pub fn header() -> Value {
        json!({ "header": "0000000000000000000000000000000000000000" })
    }

    #[must_use]
    pub fn header_with_proof() -> Value {
        let mut json = Self::header();
        json["branch"] = json!(["aa11", "bb22", "cc33"]);
        json["root"] = json!("dd44");
        json
    }

    #[must_use]
    pub fn headers(count: u32) -> Value {
        json!({
            "count": count,
            "hex": "ab".repeat(count as usize * 4),
            "max": 2016
        })
    }

    #[must_use]
    pub fn headers_with_proof(count: u32) -> Value {
        let mut json = Self::headers(count);
        json["branch"] = json!(["aa11", "bb22"]);
        json["root"] = json!("dd44");
        json
    }

    #[must_use]
    pub fn fee() -> Value {
        json!({ "fee": 0.00001 })
    }

    #[must_use]
    pub fn transaction_raw() -> Value {
        json!({ "hex": "0000000001" })
    }

    #[must_use]
    pub fn transaction_merkle() -> Value {
        json!({
            "hex": "0000000001",
            "merkle": ["aa11", "bb22"],
            "pos": 1,
            "block_height": 9634
        })
    }

    #[must_use]
    pub fn transaction_verbose() -> Value {
        json!({
            "txid": TX_HASH,
            "hash": "0ded93a1f39b9b0b3692dbfdb89dce9a8777608f27de365ecb8cf04d94450e88",
            "inputs": [],
            "outputs": [{ "value": 2_000_000_u64, "address": ADDRESS }],
            "locktime": 0
        })
    }

    #[must_use]
    pub fn transaction_verbose_merkle() -> Value {
        let mut json = Self::transaction_verbose();
        json["hex"] = json!("0000000001");
        json["merkle"] = json!(["aa11", "bb22"]);
        json["pos"] = json!(1);
        json["block_height"] = json!(9634);
        json
    }

    /// Verbose merkle response from a server that dropped the raw hex.
    #[must_use]
    pub fn transaction_verbose_merkle_without_hex() -> Value {
        let mut json = Self::transaction_verbose_merkle();
        if let Some(fields) = json.as_object_mut() {
            fields.remove("hex");
        }
        json
    }

    #[must_use]
    pub fn merkle() -> Value {
        json!({
            "merkle": ["aa11", "bb22"],
            "pos": 3,
            "block_height": 9634
        })
    }

    #[must_use]
    pub fn position() -> Value {
        json!({ "hash": TX_HASH })
    }

    #[must_use]
    pub fn position_with_merkle() -> Value {
        json!({ "tx_hash": TX_HASH, "merkle": ["aa11"] })
    }

    #[must_use]
    pub fn page(total: u64, key: &str) -> Value {
        let mut json = json!({ "total": total });
        json[key] = json!([]);
        json
    }

    #[must_use]
    pub fn balance() -> Value {
        json!({ "confirmed": 2_000_000_u64, "unconfirmed": 0 })
    }

    #[must_use]
    pub fn banner() -> Value {
        json!({ "banner": "Welcome to Nomenclate" })
    }

    #[must_use]
    pub fn features() -> Value {
        json!({
            "server_version": "nomenclate 0.1.0",
            "protocol_max": "1.10",
            "protocol_min": "1.4",
            "genesis_hash": "00".repeat(32),
            "hash_function": "blake2b"
        })
    }
}

// ============================================================================
// Recording Transport
// ============================================================================

/// A request as seen by [`RecordingTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

/// In-memory [`Transport`] that records requests and replays canned replies.
///
/// Replies are consumed in order; once exhausted every call answers `null`.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    replies: Mutex<VecDeque<Result<Value, TransportError>>>,
    requests: Mutex<Vec<Recorded>>,
    opened: Mutex<bool>,
}

impl RecordingTransport {
    #[must_use]
    pub fn replying(reply: Value) -> Self {
        let transport = Self::default();
        transport.push_reply(Ok(reply));
        transport
    }

    pub fn push_reply(&self, reply: Result<Value, TransportError>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    #[must_use]
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        *self.opened.lock().unwrap()
    }

    fn record(&self, recorded: Recorded) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push(recorded);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(Value::Null))
    }
}

impl Transport for RecordingTransport {
    async fn open(&self) -> Result<(), TransportError> {
        *self.opened.lock().unwrap() = true;
        Ok(())
    }

    async fn close(&self) -> Result<(), TransportError> {
        *self.opened.lock().unwrap() = false;
        Ok(())
    }

    async fn get(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<Value, TransportError> {
        self.record(Recorded {
            method: Method::Get,
            path: path.to_string(),
            query: query.to_vec(),
            body: None,
        })
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
        self.record(Recorded {
            method: Method::Post,
            path: path.to_string(),
            query: Vec::new(),
            body: Some(body.clone()),
        })
    }
}
