// Container Manifest - JSON description of a host container

use crate::attributes::TagAttributes;
use crate::container::ContainerBuilder;
use crate::definition::Definition;
use crate::registry_definition::RegistryDefinition;
use enqueue_routing_core::application::constants::QUEUE_META_REGISTRY_SERVICE;
use enqueue_routing_core::domain::SubscribedTopic;
use enqueue_routing_core::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Processor type known to the host
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeManifest {
    pub name: String,
    /// Present only for types with the subscriber capability
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscribed_topics: Option<Vec<SubscribedTopic>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagManifest {
    pub name: String,
    #[serde(default)]
    pub attributes: TagAttributes,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceManifest {
    pub id: String,
    pub class: String,
    #[serde(default)]
    pub tags: Vec<TagManifest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryManifest {
    #[serde(default = "default_registry_id")]
    pub id: String,
}

fn default_registry_id() -> String {
    QUEUE_META_REGISTRY_SERVICE.to_string()
}

/// Whole host description
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContainerManifest {
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
    #[serde(default)]
    pub types: Vec<TypeManifest>,
    #[serde(default)]
    pub services: Vec<ServiceManifest>,
    /// Registry sink slot; omitted means the feature is disabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry: Option<RegistryManifest>,
}

impl ContainerManifest {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading container manifest");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Build the in-memory container described by this manifest
    pub fn into_container(self) -> ContainerBuilder {
        let mut container = ContainerBuilder::new();

        for (name, value) in self.parameters {
            container.set_parameter(name, value);
        }

        for ty in self.types {
            match ty.subscribed_topics {
                Some(topics) => container.types_mut().register_declared(ty.name, topics),
                None => container.types_mut().register_name(ty.name),
            };
        }

        for service in self.services {
            let mut definition = Definition::new(service.class);
            for tag in service.tags {
                definition.add_tag_with(tag.name, tag.attributes);
            }
            container.set_definition(service.id, definition);
        }

        if let Some(registry) = self.registry {
            container.set_registry_definition(registry.id, RegistryDefinition::new());
        }

        container
    }
}
