//! Provider registration record.
//!
//! A provider is an external service the TeamCloud orchestrator dispatches
//! commands to. Every attribute is optional; omitted attributes stay `None`,
//! which is distinct from an empty value such as `Some(vec![])`.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::azure_resource_group::AzureResourceGroup;
use crate::command_mode::CommandMode;
use crate::model::{AttributeMap, FieldDescriptor, Model, ModelRef, ValueType};
use crate::timestamp::Timestamp;

/// Provider as exchanged with the TeamCloud API.
///
/// Build one with struct update syntax:
///
/// ```rust
/// use teamcloud_types::Provider;
///
/// let provider = Provider {
///     id: Some("azure.devops".into()),
///     auth_code: Some("secret".into()),
///     ..Default::default()
/// };
/// assert!(provider.url.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Endpoint the orchestrator sends commands to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Credential presented when calling `url`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_code: Option<String>,
    /// Identity the provider runs as
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<AzureResourceGroup>,
    /// Event names the provider subscribes to, in declared order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,
    /// Free-form settings; key order carries no meaning
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_mode: Option<CommandMode>,
}

static PROVIDER_FIELDS: [FieldDescriptor; 10] = [
    FieldDescriptor::new("id", "id", ValueType::String),
    FieldDescriptor::new("url", "url", ValueType::String),
    FieldDescriptor::new("auth_code", "authCode", ValueType::String),
    FieldDescriptor::new("principal_id", "principalId", ValueType::String),
    FieldDescriptor::new("version", "version", ValueType::String),
    FieldDescriptor::new(
        "resource_group",
        "resourceGroup",
        ValueType::Model(ModelRef::of::<AzureResourceGroup>()),
    ),
    FieldDescriptor::new("events", "events", ValueType::Sequence(&ValueType::String)),
    FieldDescriptor::new("properties", "properties", ValueType::Mapping(&ValueType::String)),
    FieldDescriptor::new("registered", "registered", ValueType::Iso8601),
    FieldDescriptor::new("command_mode", "commandMode", ValueType::String),
];

static PROVIDER_ATTRIBUTES: Lazy<AttributeMap> = Lazy::new(|| AttributeMap::new(Provider::NAME, &PROVIDER_FIELDS));

impl Model for Provider {
    const NAME: &'static str = "Provider";

    fn attribute_map() -> &'static AttributeMap {
        &PROVIDER_ATTRIBUTES
    }
}
