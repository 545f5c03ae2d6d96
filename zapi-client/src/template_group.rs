//! TemplateGroup entity and the `templategroup.*` operations
//!
//! Mirrors the host group surface against the `templategroup.*` procedure
//! family; the two group kinds are distinct object types server-side.

use serde::Deserialize;
use serde_json::{json, Map, Value};
use zapi_core::{Error, Params, Result};

use crate::ids::{ensure_affected, first_id};
use crate::{Client, EXTEND};

/// A template group
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TemplateGroup {
    #[serde(default, rename = "groupid")]
    pub group_id: String,
    pub name: String,
    #[serde(default)]
    pub uuid: String,
}

impl Client {
    /// Create a template group, returning the server-assigned id
    pub async fn create_template_group(&self, name: &str) -> Result<String> {
        let mut params = Map::new();
        params.insert("name".into(), json!(name));

        let result = self
            .request("templategroup.create", Params::Keyed(params))
            .await?;
        first_id("templategroup.create", "groupids", &result)
    }

    /// Fetch a template group by id; `Ok(None)` when it does not exist
    pub async fn get_template_group(&self, group_id: &str) -> Result<Option<TemplateGroup>> {
        let mut params = Map::new();
        params.insert("groupids".into(), json!([group_id]));
        params.insert("output".into(), json!(EXTEND));

        let result = self
            .request("templategroup.get", Params::Keyed(params))
            .await?;
        decode_groups(result).map(|groups| groups.into_iter().next())
    }

    /// Fetch a template group by name
    pub async fn get_template_group_by_name(&self, name: &str) -> Result<Option<TemplateGroup>> {
        let mut params = Map::new();
        params.insert("filter".into(), json!({"name": name}));
        params.insert("output".into(), json!(EXTEND));

        let result = self
            .request("templategroup.get", Params::Keyed(params))
            .await?;
        decode_groups(result).map(|groups| groups.into_iter().next())
    }

    /// Rename a template group
    pub async fn update_template_group(&self, group_id: &str, name: &str) -> Result<()> {
        let mut params = Map::new();
        params.insert("groupid".into(), json!(group_id));
        params.insert("name".into(), json!(name));

        let result = self
            .request("templategroup.update", Params::Keyed(params))
            .await?;
        ensure_affected("templategroup.update", "groupids", &result)
    }

    /// Delete a template group by id
    pub async fn delete_template_group(&self, group_id: &str) -> Result<()> {
        let result = self
            .request("templategroup.delete", Params::ids([group_id]))
            .await?;
        ensure_affected("templategroup.delete", "groupids", &result)
    }
}

fn decode_groups(result: Value) -> Result<Vec<TemplateGroup>> {
    serde_json::from_value(result)
        .map_err(|e| Error::Decode(format!("failed to decode templategroup.get response: {e}")))
}
