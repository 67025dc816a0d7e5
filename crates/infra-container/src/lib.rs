// Enqueue Routing Infrastructure - Host Container Adapter
// Implements: DeclarationSource, ParameterBag, SinkSlot, TypeCatalog

mod attributes;
mod container;
mod definition;
mod manifest;
mod registry_definition;
mod type_registry;

pub use attributes::{declared_binding_from_attributes, TagAttributes};
pub use container::ContainerBuilder;
pub use definition::{Definition, Tag};
pub use manifest::{ContainerManifest, RegistryManifest, ServiceManifest, TagManifest, TypeManifest};
pub use registry_definition::RegistryDefinition;
pub use type_registry::TypeRegistry;
