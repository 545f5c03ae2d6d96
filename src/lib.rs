//! zapi - Zabbix JSON-RPC 2.0 API client
//!
//! This is the main convenience crate that re-exports the zapi sub-crates.
//! Use this crate if you want a single dependency for talking to a Zabbix
//! server's management API.
//!
//! # Architecture
//!
//! zapi is organized into modular crates:
//!
//! - **zapi-core**: envelope types, params union, error taxonomy, wire codec
//! - **zapi-client**: HTTP transport client and per-entity CRUD operations
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use zapi::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("http://zabbix.example.com/api_jsonrpc.php", "token")?;
//!
//!     if let Some(group) = client.get_host_group_by_name("Linux servers").await? {
//!         println!("group id: {}", group.group_id);
//!     }
//!     Ok(())
//! }
//! ```

// Re-export all public APIs from sub-crates
pub use zapi_client as client;
pub use zapi_core as core;

// Re-export the common surface at the top level
pub use zapi_client::{
    Client, GroupRef, Host, HostGroup, HostInterface, ParentTemplate, Tag, Template,
    TemplateGroup, TemplateRef, DEFAULT_TIMEOUT,
};
pub use zapi_core::{Error, Params, Result, RpcError, RpcRequest, RpcResponse};
