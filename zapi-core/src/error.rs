//! Error types for zapi
//!
//! Two layers live here:
//!
//! - **Error**: the application-level taxonomy every call returns (uses
//!   thiserror)
//! - **RpcError**: the wire-format error object inside a failed response
//!   envelope
//!
//! # Taxonomy
//!
//! A call fails in exactly one of these ways, and the kind survives
//! propagation so callers can branch on it without string matching:
//!
//! - `Http`: the endpoint answered with a non-2xx status before any
//!   envelope existed
//! - `Transport`: the request never completed (refused connection, DNS, TLS)
//! - `Timeout`: the client deadline elapsed or the call was cancelled
//! - `Decode`: the body was not a valid envelope, or an entity payload had a
//!   malformed numeric string
//! - `Api`: the server returned a structured error, wrapped with the method
//!   name that produced it
//! - `IdMismatch`: the response did not echo the request identifier
//! - `EmptyResult`: a mutating call reported success but no affected ids
//!
//! Nothing in this crate retries; every failure surfaces to the caller once.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type for zapi operations
pub type Result<T> = std::result::Result<T, Error>;

/// Application-level error type for zapi operations
///
/// # Examples
///
/// ```rust
/// use zapi_core::Error;
///
/// let error = Error::Http { status: 500, reason: "Internal Server Error".into() };
/// assert!(error.to_string().contains("500"));
/// ```
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Non-2xx HTTP status from the endpoint
    ///
    /// Raised before any body parsing is attempted; there is no envelope to
    /// decode when the server answers 500 or 404.
    #[error("zabbix api http error: {status} {reason}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Canonical status line text
        reason: String,
    },

    /// Network-level failure below HTTP
    ///
    /// Connection refused, DNS resolution, TLS handshake. The message is the
    /// underlying transport error rendered to text.
    #[error("transport error: {0}")]
    Transport(String),

    /// The call's deadline elapsed or the call was cancelled
    #[error("request timed out")]
    Timeout,

    /// Malformed response envelope or entity payload
    ///
    /// Includes numeric-string parse failures from the entity codecs, which
    /// name the offending field and its raw value.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Structured error returned by the server
    ///
    /// Carries the method name that produced it so call-site context survives
    /// without inspecting stacks.
    #[error("method {method}: {error}")]
    Api {
        /// The remote procedure that failed
        method: String,
        /// The wire-format error object
        error: RpcError,
    },

    /// Response identifier does not echo the request identifier
    ///
    /// Signals transport-level misdelivery. Kept distinct from `Decode`; a
    /// well-formed envelope with the wrong id is not a parse problem.
    #[error("response id {actual} does not match request id {expected}")]
    IdMismatch {
        /// The identifier the request carried
        expected: i64,
        /// The identifier the response echoed (0 when absent or null)
        actual: i64,
    },

    /// Mutating call succeeded but echoed no affected ids
    ///
    /// A contract violation by the server, not a retryable condition.
    /// Constructed by entity operations only, never by the transport client.
    #[error("method {method} returned no ids")]
    EmptyResult {
        /// The remote procedure whose reply was empty
        method: String,
    },
}

/// Zabbix API error object as it appears on the wire
///
/// Appears in the `error` field of a response envelope. `code` and `message`
/// are always present; `data` carries the server's auxiliary detail string
/// ("Host already exists." and friends) when there is one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcError {
    /// Numeric error code; JSON-RPC reserves -32768..=-32000
    pub code: i32,
    /// Short human-readable description
    pub message: String,
    /// Optional auxiliary detail from the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl RpcError {
    /// Create an error object with code and message
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Create an error object with the auxiliary detail string
    pub fn with_data(code: i32, message: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: Some(data.into()),
        }
    }
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            Some(data) => write!(
                f,
                "zabbix api error {}: {} - {}",
                self.code, self.message, data
            ),
            None => write!(f, "zabbix api error {}: {}", self.code, self.message),
        }
    }
}

impl std::error::Error for RpcError {}
