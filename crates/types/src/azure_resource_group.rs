use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::model::{AttributeMap, FieldDescriptor, Model, ValueType};

/// Azure resource group hosting the resources of a provider or project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureResourceGroup {
    /// Fully qualified Azure resource id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
    /// Azure region (e.g. `eastus`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

static AZURE_RESOURCE_GROUP_FIELDS: [FieldDescriptor; 4] = [
    FieldDescriptor::new("id", "id", ValueType::String),
    FieldDescriptor::new("name", "name", ValueType::String),
    FieldDescriptor::new("subscription_id", "subscriptionId", ValueType::String),
    FieldDescriptor::new("region", "region", ValueType::String),
];

static AZURE_RESOURCE_GROUP_ATTRIBUTES: Lazy<AttributeMap> =
    Lazy::new(|| AttributeMap::new(AzureResourceGroup::NAME, &AZURE_RESOURCE_GROUP_FIELDS));

impl Model for AzureResourceGroup {
    const NAME: &'static str = "AzureResourceGroup";

    fn attribute_map() -> &'static AttributeMap {
        &AZURE_RESOURCE_GROUP_ATTRIBUTES
    }
}
