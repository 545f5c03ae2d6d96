//! Zabbix JSON-RPC 2.0 client over HTTP
//!
//! This crate provides the transport client and the typed CRUD operations
//! for the four entity kinds a Zabbix deployment manages declaratively:
//! hosts, host groups, templates and template groups.
//!
//! # Core Features
//!
//! - **Single-shot HTTP transport**: one POST per call, configurable timeout
//! - **Auth injection**: the API token rides inside the envelope, except for
//!   the no-auth bootstrap procedures
//! - **Id correlation**: every response must echo the request id or the call
//!   fails with a distinct mismatch error
//! - **Asymmetric codecs**: numeric fields decode from wire strings and
//!   encode as true integers
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use zapi_client::{Client, Host, GroupRef, HostInterface};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("http://zabbix.example.com/api_jsonrpc.php", "token")?;
//!
//!     let host = Host {
//!         host: "test-server".into(),
//!         groups: vec![GroupRef { group_id: "2".into(), ..Default::default() }],
//!         interfaces: vec![HostInterface {
//!             r#type: 1,
//!             main: 1,
//!             useip: 1,
//!             ip: "192.168.1.100".into(),
//!             port: "10050".into(),
//!             ..Default::default()
//!         }],
//!         ..Default::default()
//!     };
//!
//!     let host_id = client.create_host(&host).await?;
//!     println!("created host {host_id}");
//!     Ok(())
//! }
//! ```

mod client;
mod host;
mod host_group;
mod ids;
mod template;
mod template_group;

/// Wildcard marker the API uses for "return every standard field" and
/// "expand this sub-object fully".
pub(crate) const EXTEND: &str = "extend";

pub use client::{Client, DEFAULT_TIMEOUT};
pub use host::{GroupRef, Host, HostInterface, ParentTemplate, Tag, TemplateRef};
pub use host_group::HostGroup;
pub use template::Template;
pub use template_group::TemplateGroup;
