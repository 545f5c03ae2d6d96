//! Template entity, the `template.*` operations and configuration
//! import/export
//!
//! Templates reuse [`GroupRef`] and [`Tag`] from the host module; the group
//! references point at template groups rather than host groups but the wire
//! shape is identical. Nothing numeric here, so the codec is plain serde.

use serde::Deserialize;
use serde_json::{json, Map, Value};
use zapi_core::{Error, Params, Result};

use crate::host::{group_refs, GroupRef, Tag};
use crate::ids::{ensure_affected, first_id};
use crate::{Client, EXTEND};

/// A monitoring template
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Template {
    #[serde(default, rename = "templateid")]
    pub template_id: String,
    /// Technical name
    #[serde(default)]
    pub host: String,
    /// Visible name; defaults server-side to the technical name
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub groups: Vec<GroupRef>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

fn create_params(template: &Template) -> Map<String, Value> {
    let mut params = Map::new();
    params.insert("host".into(), json!(template.host));

    if !template.name.is_empty() {
        params.insert("name".into(), json!(template.name));
    }
    if !template.description.is_empty() {
        params.insert("description".into(), json!(template.description));
    }
    if !template.groups.is_empty() {
        params.insert("groups".into(), group_refs(&template.groups));
    }
    if !template.tags.is_empty() {
        params.insert("tags".into(), json!(template.tags));
    }
    params
}

fn update_params(template: &Template) -> Map<String, Value> {
    let mut params = Map::new();
    params.insert("templateid".into(), json!(template.template_id));

    if !template.host.is_empty() {
        params.insert("host".into(), json!(template.host));
    }
    if !template.name.is_empty() {
        params.insert("name".into(), json!(template.name));
    }
    if !template.description.is_empty() {
        params.insert("description".into(), json!(template.description));
    }
    if !template.groups.is_empty() {
        params.insert("groups".into(), group_refs(&template.groups));
    }
    params.insert("tags".into(), json!(template.tags));

    params
}

fn get_params(selector: (&str, Value)) -> Map<String, Value> {
    let mut params = Map::new();
    params.insert(selector.0.into(), selector.1);
    params.insert("output".into(), json!(EXTEND));
    params.insert("selectGroups".into(), json!(EXTEND));
    params.insert("selectTags".into(), json!(EXTEND));
    params
}

impl Client {
    /// Create a template, returning the server-assigned id
    pub async fn create_template(&self, template: &Template) -> Result<String> {
        let result = self
            .request("template.create", Params::Keyed(create_params(template)))
            .await?;
        first_id("template.create", "templateids", &result)
    }

    /// Fetch a template by id with groups and tags expanded
    pub async fn get_template(&self, template_id: &str) -> Result<Option<Template>> {
        let params = get_params(("templateids", json!([template_id])));
        let result = self.request("template.get", Params::Keyed(params)).await?;
        decode_templates(result).map(|templates| templates.into_iter().next())
    }

    /// Fetch a template by technical name
    pub async fn get_template_by_host(&self, host: &str) -> Result<Option<Template>> {
        let params = get_params(("filter", json!({"host": host})));
        let result = self.request("template.get", Params::Keyed(params)).await?;
        decode_templates(result).map(|templates| templates.into_iter().next())
    }

    /// Update a template; the entity must carry its id
    pub async fn update_template(&self, template: &Template) -> Result<()> {
        let result = self
            .request("template.update", Params::Keyed(update_params(template)))
            .await?;
        ensure_affected("template.update", "templateids", &result)
    }

    /// Delete a template by id
    pub async fn delete_template(&self, template_id: &str) -> Result<()> {
        let result = self
            .request("template.delete", Params::ids([template_id]))
            .await?;
        ensure_affected("template.delete", "templateids", &result)
    }

    /// Import template configuration from a YAML/XML/JSON source blob
    ///
    /// The rules block creates missing objects and updates existing ones for
    /// the template-scoped object kinds; the import reply carries nothing
    /// useful beyond success.
    pub async fn import_configuration(&self, format: &str, source: &str) -> Result<()> {
        let mut params = Map::new();
        params.insert("format".into(), json!(format));
        params.insert("source".into(), json!(source));
        params.insert(
            "rules".into(),
            json!({
                "templates": {"createMissing": true, "updateExisting": true},
                "template_groups": {"createMissing": true},
                "items": {"createMissing": true, "updateExisting": true},
                "triggers": {"createMissing": true, "updateExisting": true},
                "discoveryRules": {"createMissing": true, "updateExisting": true},
                "valueMaps": {"createMissing": true, "updateExisting": true}
            }),
        );

        self.request("configuration.import", Params::Keyed(params))
            .await?;
        Ok(())
    }

    /// Export templates as a YAML/XML/JSON blob
    pub async fn export_configuration(
        &self,
        format: &str,
        template_ids: &[String],
    ) -> Result<String> {
        let mut params = Map::new();
        params.insert("format".into(), json!(format));
        params.insert("options".into(), json!({"templates": template_ids}));

        let result = self
            .request("configuration.export", Params::Keyed(params))
            .await?;
        serde_json::from_value(result).map_err(|e| {
            Error::Decode(format!("failed to decode configuration.export response: {e}"))
        })
    }
}

fn decode_templates(result: Value) -> Result<Vec<Template>> {
    serde_json::from_value(result)
        .map_err(|e| Error::Decode(format!("failed to decode template.get response: {e}")))
}
