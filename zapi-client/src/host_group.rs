//! HostGroup entity and the `hostgroup.*` operations
//!
//! The simplest entity in the surface: nothing numeric, so plain serde
//! derives do the whole codec.

use serde::Deserialize;
use serde_json::{json, Map, Value};
use zapi_core::{Error, Params, Result};

use crate::ids::{ensure_affected, first_id};
use crate::{Client, EXTEND};

/// A host group
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HostGroup {
    #[serde(default, rename = "groupid")]
    pub group_id: String,
    pub name: String,
    #[serde(default)]
    pub uuid: String,
}

impl Client {
    /// Create a host group, returning the server-assigned id
    pub async fn create_host_group(&self, name: &str) -> Result<String> {
        let mut params = Map::new();
        params.insert("name".into(), json!(name));

        let result = self
            .request("hostgroup.create", Params::Keyed(params))
            .await?;
        first_id("hostgroup.create", "groupids", &result)
    }

    /// Fetch a host group by id; `Ok(None)` when it does not exist
    pub async fn get_host_group(&self, group_id: &str) -> Result<Option<HostGroup>> {
        let mut params = Map::new();
        params.insert("groupids".into(), json!([group_id]));
        params.insert("output".into(), json!(EXTEND));

        let result = self.request("hostgroup.get", Params::Keyed(params)).await?;
        decode_groups(result).map(|groups| groups.into_iter().next())
    }

    /// Fetch a host group by name
    pub async fn get_host_group_by_name(&self, name: &str) -> Result<Option<HostGroup>> {
        let mut params = Map::new();
        params.insert("filter".into(), json!({"name": name}));
        params.insert("output".into(), json!(EXTEND));

        let result = self.request("hostgroup.get", Params::Keyed(params)).await?;
        decode_groups(result).map(|groups| groups.into_iter().next())
    }

    /// Rename a host group
    pub async fn update_host_group(&self, group_id: &str, name: &str) -> Result<()> {
        let mut params = Map::new();
        params.insert("groupid".into(), json!(group_id));
        params.insert("name".into(), json!(name));

        let result = self
            .request("hostgroup.update", Params::Keyed(params))
            .await?;
        ensure_affected("hostgroup.update", "groupids", &result)
    }

    /// Delete a host group by id
    pub async fn delete_host_group(&self, group_id: &str) -> Result<()> {
        // hostgroup.delete takes an array of group ids directly.
        let result = self
            .request("hostgroup.delete", Params::ids([group_id]))
            .await?;
        ensure_affected("hostgroup.delete", "groupids", &result)
    }
}

fn decode_groups(result: Value) -> Result<Vec<HostGroup>> {
    serde_json::from_value(result)
        .map_err(|e| Error::Decode(format!("failed to decode hostgroup.get response: {e}")))
}
