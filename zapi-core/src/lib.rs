//! Core types, codec and error handling for zapi
//!
//! This crate provides the foundation the Zabbix API client is built on:
//!
//! - **Types**: JSON-RPC 2.0 envelopes with the Zabbix `auth` extension and
//!   the keyed/positional [`Params`] union
//! - **Errors**: the closed failure taxonomy every call returns
//! - **Codec**: helpers for the API's numeric-strings-on-read,
//!   integers-on-write asymmetry
//!
//! # Architecture
//!
//! The crate is transport-agnostic: it defines what travels over the wire
//! and how failures are classified, but performs no I/O. The `zapi-client`
//! crate builds the HTTP transport and the per-entity CRUD operations on top
//! of this foundation.
//!
//! # Example
//!
//! ```rust
//! use zapi_core::{Params, RpcRequest};
//!
//! let request = RpcRequest::new("apiinfo.version", Params::empty(), 1);
//! let json = serde_json::to_string(&request).unwrap();
//! assert!(json.contains("\"method\":\"apiinfo.version\""));
//! ```

pub mod codec;
pub mod error;
pub mod types;

// Re-export the most commonly used types for convenience
pub use error::{Error, Result, RpcError};
pub use types::{Params, RpcRequest, RpcResponse, JSONRPC_VERSION};
