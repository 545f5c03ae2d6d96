//! JSON-RPC 2.0 envelope types for the Zabbix API
//!
//! This module implements the request/response wrapper exchanged with a
//! Zabbix server. The shapes follow the JSON-RPC 2.0 specification
//! (https://www.jsonrpc.org/specification) with the one Zabbix-specific
//! extension: an optional `auth` field carrying the API token inside the
//! request envelope.
//!
//! # Message Types
//!
//! - **RpcRequest**: a call to a remote procedure; always carries an `id`
//! - **RpcResponse**: the outcome of a request, carrying either `result` or
//!   `error`, never both
//! - **RpcError**: the structured error object inside a failed response
//!
//! # Request IDs
//!
//! Zabbix echoes the request `id` in every response. IDs here are plain
//! integers allocated sequentially per client; the transport layer checks the
//! echo before trusting a result payload.
//!
//! # Parameters
//!
//! The Zabbix API mixes two calling conventions: most procedures take a keyed
//! object, but the `*.delete` family takes a bare array of ids. [`Params`]
//! models this as a closed two-variant union so each wrapper function fixes
//! its procedure's convention at compile time instead of discovering it at
//! runtime.

use crate::error::RpcError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON-RPC protocol version marker, sent in every envelope.
pub const JSONRPC_VERSION: &str = "2.0";

/// Parameter payload of a request: keyed object or positional array
///
/// The variant is part of each remote procedure's calling convention, not
/// something the transport layer can infer. `host.create` wants an object;
/// `host.delete` wants `["10084"]`. Call sites pick the variant explicitly.
///
/// `#[serde(untagged)]` makes the enum serialize directly as the inner value,
/// matching the wire format exactly.
///
/// # Examples
///
/// ```rust
/// use zapi_core::Params;
/// use serde_json::{json, Map};
///
/// let mut fields = Map::new();
/// fields.insert("host".into(), json!("test-server"));
/// let keyed = Params::Keyed(fields);
/// assert_eq!(serde_json::to_string(&keyed).unwrap(), r#"{"host":"test-server"}"#);
///
/// let positional = Params::ids(["10084"]);
/// assert_eq!(serde_json::to_string(&positional).unwrap(), r#"["10084"]"#);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Params {
    /// Keyed fields, the common convention for create/get/update procedures
    Keyed(Map<String, Value>),
    /// Ordered list, used by the `*.delete` family and nothing else
    Positional(Vec<Value>),
}

impl Params {
    /// The empty keyed object
    ///
    /// A request with no parameters still sends `"params": {}`; the Zabbix
    /// API rejects a missing params member.
    pub fn empty() -> Self {
        Params::Keyed(Map::new())
    }

    /// Build a positional id list, the `*.delete` calling convention
    pub fn ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Params::Positional(ids.into_iter().map(|id| Value::String(id.into())).collect())
    }
}

impl Default for Params {
    fn default() -> Self {
        Params::empty()
    }
}

impl From<Map<String, Value>> for Params {
    fn from(fields: Map<String, Value>) -> Self {
        Params::Keyed(fields)
    }
}

impl From<Vec<Value>> for Params {
    fn from(items: Vec<Value>) -> Self {
        Params::Positional(items)
    }
}

/// JSON-RPC 2.0 request envelope
///
/// The `auth` field is the Zabbix extension: the API token travels inside the
/// envelope rather than in an HTTP header. It is skipped entirely when
/// `None` because a handful of bootstrap procedures (`apiinfo.version`)
/// reject requests that carry a token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    /// Protocol version, always "2.0"
    pub jsonrpc: String,
    /// Name of the remote procedure, e.g. `host.create`
    pub method: String,
    /// Keyed or positional parameter payload
    pub params: Params,
    /// Per-client sequential identifier, echoed by the server
    pub id: i64,
    /// API token; omitted for the no-auth procedure allow-list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,
}

impl RpcRequest {
    /// Create a request envelope with the version marker filled in
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zapi_core::{Params, RpcRequest};
    ///
    /// let req = RpcRequest::new("apiinfo.version", Params::empty(), 1);
    /// assert_eq!(req.jsonrpc, "2.0");
    /// assert!(req.auth.is_none());
    /// ```
    pub fn new(method: impl Into<String>, params: Params, id: i64) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.into(),
            params,
            id,
            auth: None,
        }
    }
}

/// JSON-RPC 2.0 response envelope
///
/// Exactly one of `result` and `error` is present. The `id` echoes the
/// request identifier; it can be absent (or null) when the server failed to
/// parse the request far enough to recover one, so it is optional here and
/// the transport layer treats a missing echo as a mismatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    /// Protocol version, always "2.0"
    pub jsonrpc: String,
    /// Raw untyped result payload (present only on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Structured error (present only on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
    /// Echo of the request identifier
    #[serde(default)]
    pub id: Option<i64>,
}

impl RpcResponse {
    /// Check if the response carries a result
    pub fn is_success(&self) -> bool {
        self.result.is_some()
    }

    /// Check if the response carries an error
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
