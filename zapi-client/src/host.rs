//! Host entity and the `host.*` operations
//!
//! `Host` is the richest entity in the surface: it nests group references,
//! interfaces, tags and template links, and two of its shapes (the host
//! status and the interface flags) hit the API's numeric asymmetry: strings
//! on read, integers on write. Both use the dual-shape codec convention from
//! `zapi_core::codec`.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Map, Value};
use zapi_core::codec::parse_wire_int;
use zapi_core::{Error, Params, Result};

use crate::ids::{ensure_affected, first_id};
use crate::{Client, EXTEND};

/// A monitored host
///
/// Numeric semantics: `status` 0 means monitored (enabled), 1 unmonitored.
/// Zero being meaningful is why update always sends it (see
/// [`Client::update_host`]).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Host {
    /// Server-assigned id; empty until created
    pub host_id: String,
    /// Technical name
    pub host: String,
    /// Visible name; defaults server-side to the technical name when absent
    pub name: String,
    /// 0 = monitored, 1 = unmonitored
    pub status: i32,
    pub groups: Vec<GroupRef>,
    pub interfaces: Vec<HostInterface>,
    pub tags: Vec<Tag>,
    pub templates: Vec<TemplateRef>,
    /// Linked templates as returned by `host.get`; read-only
    pub parent_templates: Vec<ParentTemplate>,
}

/// Wire shape of a host: `status` arrives as a string
#[derive(Debug, Deserialize)]
struct HostWire {
    #[serde(default, rename = "hostid")]
    host_id: String,
    #[serde(default)]
    host: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    groups: Vec<GroupRef>,
    #[serde(default)]
    interfaces: Vec<HostInterface>,
    #[serde(default)]
    tags: Vec<Tag>,
    #[serde(default)]
    templates: Vec<TemplateRef>,
    #[serde(default, rename = "parentTemplates")]
    parent_templates: Vec<ParentTemplate>,
}

impl TryFrom<HostWire> for Host {
    type Error = String;

    fn try_from(wire: HostWire) -> std::result::Result<Self, String> {
        Ok(Host {
            status: parse_wire_int("status", &wire.status)?,
            host_id: wire.host_id,
            host: wire.host,
            name: wire.name,
            groups: wire.groups,
            interfaces: wire.interfaces,
            tags: wire.tags,
            templates: wire.templates,
            parent_templates: wire.parent_templates,
        })
    }
}

impl<'de> Deserialize<'de> for Host {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = HostWire::deserialize(deserializer)?;
        Host::try_from(wire).map_err(serde::de::Error::custom)
    }
}

/// Host group reference by id
///
/// `name` is populated by expanded reads and never sent back on writes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GroupRef {
    #[serde(rename = "groupid")]
    pub group_id: String,
    #[serde(default)]
    pub name: String,
}

/// Host or template tag
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub tag: String,
    #[serde(default)]
    pub value: String,
}

/// Template reference by id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateRef {
    #[serde(rename = "templateid")]
    pub template_id: String,
}

/// Linked template as returned by `host.get` under `parentTemplates`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ParentTemplate {
    #[serde(rename = "templateid")]
    pub template_id: String,
    #[serde(default)]
    pub name: String,
}

/// A host interface
///
/// `r#type`, `main` and `useip` are 0/1-style integer flags on the domain
/// side; the wire returns them as strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostInterface {
    /// Server-assigned id; empty until created
    pub interface_id: String,
    /// 1 = agent, 2 = SNMP, 3 = IPMI, 4 = JMX
    pub r#type: i32,
    /// 1 when this is the default interface of its type
    pub main: i32,
    /// 1 to connect via `ip`, 0 via `dns`
    pub useip: i32,
    pub ip: String,
    pub dns: String,
    pub port: String,
}

#[derive(Debug, Deserialize)]
struct HostInterfaceWire {
    #[serde(default, rename = "interfaceid")]
    interface_id: String,
    #[serde(default, rename = "type")]
    kind: String,
    #[serde(default)]
    main: String,
    #[serde(default)]
    useip: String,
    #[serde(default)]
    ip: String,
    #[serde(default)]
    dns: String,
    #[serde(default)]
    port: String,
}

impl TryFrom<HostInterfaceWire> for HostInterface {
    type Error = String;

    fn try_from(wire: HostInterfaceWire) -> std::result::Result<Self, String> {
        Ok(HostInterface {
            r#type: parse_wire_int("interface type", &wire.kind)?,
            main: parse_wire_int("interface main", &wire.main)?,
            useip: parse_wire_int("interface useip", &wire.useip)?,
            interface_id: wire.interface_id,
            ip: wire.ip,
            dns: wire.dns,
            port: wire.port,
        })
    }
}

impl<'de> Deserialize<'de> for HostInterface {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = HostInterfaceWire::deserialize(deserializer)?;
        HostInterface::try_from(wire).map_err(serde::de::Error::custom)
    }
}

// Manual encode: the flags must go out as integer literals, and an empty
// interfaceid means "not yet assigned, let the server allocate one" and is
// omitted rather than sent empty.
impl Serialize for HostInterface {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", &self.r#type)?;
        map.serialize_entry("main", &self.main)?;
        map.serialize_entry("useip", &self.useip)?;
        map.serialize_entry("ip", &self.ip)?;
        map.serialize_entry("dns", &self.dns)?;
        map.serialize_entry("port", &self.port)?;
        if !self.interface_id.is_empty() {
            map.serialize_entry("interfaceid", &self.interface_id)?;
        }
        map.end()
    }
}

/// Encode group references as the write-side `[{"groupid": ...}]` list,
/// stripping names an expanded read may have filled in.
pub(crate) fn group_refs(groups: &[GroupRef]) -> Value {
    Value::Array(
        groups
            .iter()
            .map(|g| json!({"groupid": g.group_id}))
            .collect(),
    )
}

fn template_refs(templates: &[TemplateRef]) -> Value {
    Value::Array(
        templates
            .iter()
            .map(|t| json!({"templateid": t.template_id}))
            .collect(),
    )
}

fn create_params(host: &Host) -> Map<String, Value> {
    let mut params = Map::new();
    params.insert("host".into(), json!(host.host));
    params.insert("status".into(), json!(host.status));

    if !host.name.is_empty() {
        params.insert("name".into(), json!(host.name));
    }
    if !host.groups.is_empty() {
        params.insert("groups".into(), group_refs(&host.groups));
    }
    if !host.interfaces.is_empty() {
        params.insert("interfaces".into(), json!(host.interfaces));
    }
    if !host.templates.is_empty() {
        params.insert("templates".into(), template_refs(&host.templates));
    }
    if !host.tags.is_empty() {
        params.insert("tags".into(), json!(host.tags));
    }
    params
}

fn update_params(host: &Host) -> Map<String, Value> {
    let mut params = Map::new();
    params.insert("hostid".into(), json!(host.host_id));

    if !host.host.is_empty() {
        params.insert("host".into(), json!(host.host));
    }
    if !host.name.is_empty() {
        params.insert("name".into(), json!(host.name));
    }

    // Status is always included since 0 is a valid value.
    params.insert("status".into(), json!(host.status));

    if !host.groups.is_empty() {
        params.insert("groups".into(), group_refs(&host.groups));
    }
    if !host.interfaces.is_empty() {
        params.insert("interfaces".into(), json!(host.interfaces));
    }
    if !host.templates.is_empty() {
        params.insert("templates".into(), template_refs(&host.templates));
    }
    // Sending an empty tags list clears the tags server-side, so update
    // includes the key unconditionally.
    params.insert("tags".into(), json!(host.tags));

    params
}

fn get_params(selector: (&str, Value)) -> Map<String, Value> {
    let mut params = Map::new();
    params.insert(selector.0.into(), selector.1);
    params.insert("output".into(), json!(EXTEND));
    params.insert("selectGroups".into(), json!(EXTEND));
    params.insert("selectInterfaces".into(), json!(EXTEND));
    params.insert("selectTags".into(), json!(EXTEND));
    params.insert("selectParentTemplates".into(), json!(EXTEND));
    params
}

impl Client {
    /// Create a host, returning the server-assigned id
    pub async fn create_host(&self, host: &Host) -> Result<String> {
        let result = self
            .request("host.create", Params::Keyed(create_params(host)))
            .await?;
        first_id("host.create", "hostids", &result)
    }

    /// Fetch a host by id with all standard sub-objects expanded
    ///
    /// Returns `Ok(None)` when the host does not exist; absence on a read is
    /// a normal outcome, never an error.
    pub async fn get_host(&self, host_id: &str) -> Result<Option<Host>> {
        let params = get_params(("hostids", json!([host_id])));
        let result = self.request("host.get", Params::Keyed(params)).await?;
        decode_hosts(result).map(|hosts| hosts.into_iter().next())
    }

    /// Fetch a host by technical name
    pub async fn get_host_by_name(&self, hostname: &str) -> Result<Option<Host>> {
        let params = get_params(("filter", json!({"host": hostname})));
        let result = self.request("host.get", Params::Keyed(params)).await?;
        decode_hosts(result).map(|hosts| hosts.into_iter().next())
    }

    /// Update a host; the entity must carry its id
    pub async fn update_host(&self, host: &Host) -> Result<()> {
        let result = self
            .request("host.update", Params::Keyed(update_params(host)))
            .await?;
        ensure_affected("host.update", "hostids", &result)
    }

    /// Delete a host by id
    pub async fn delete_host(&self, host_id: &str) -> Result<()> {
        // host.delete takes a bare array of ids, not a keyed object.
        let result = self.request("host.delete", Params::ids([host_id])).await?;
        ensure_affected("host.delete", "hostids", &result)
    }
}

fn decode_hosts(result: Value) -> Result<Vec<Host>> {
    serde_json::from_value(result)
        .map_err(|e| Error::Decode(format!("failed to decode host.get response: {e}")))
}
