// Container Builder - in-memory host for the registry build pass

use crate::attributes::declared_binding_from_attributes;
use crate::definition::Definition;
use crate::registry_definition::RegistryDefinition;
use crate::type_registry::TypeRegistry;
use enqueue_routing_core::domain::{ProcessorDeclaration, SubscribedTopic};
use enqueue_routing_core::port::{
    DeclarationSource, ParameterBag, RegistrySink, SinkSlot, TypeCatalog,
};
use enqueue_routing_core::Result;
use std::collections::HashMap;

/// Service definitions, parameters, known types and registry sinks.
///
/// Definitions keep insertion order; re-setting an id replaces it in place.
#[derive(Debug, Clone, Default)]
pub struct ContainerBuilder {
    definitions: Vec<(String, Definition)>,
    parameters: HashMap<String, String>,
    registries: HashMap<String, RegistryDefinition>,
    types: TypeRegistry,
}

impl ContainerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_parameter(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.parameters.insert(name.into(), value.into());
    }

    pub fn set_definition(&mut self, id: impl Into<String>, definition: Definition) {
        let id = id.into();
        match self.definitions.iter_mut().find(|(existing, _)| *existing == id) {
            Some((_, slot)) => *slot = definition,
            None => self.definitions.push((id, definition)),
        }
    }

    pub fn definition(&self, id: &str) -> Option<&Definition> {
        self.definitions
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, definition)| definition)
    }

    pub fn has_definition(&self, id: &str) -> bool {
        self.definition(id).is_some() || self.registries.contains_key(id)
    }

    /// Put a registry sink into the service slot `id`
    pub fn set_registry_definition(&mut self, id: impl Into<String>, registry: RegistryDefinition) {
        self.registries.insert(id.into(), registry);
    }

    pub fn registry_definition(&self, id: &str) -> Option<&RegistryDefinition> {
        self.registries.get(id)
    }

    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    pub fn types_mut(&mut self) -> &mut TypeRegistry {
        &mut self.types
    }

    /// Ids of definitions carrying `tag`, in insertion order
    pub fn find_tagged_service_ids<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a str> {
        self.definitions
            .iter()
            .filter(move |(_, definition)| definition.has_tag(tag))
            .map(|(id, _)| id.as_str())
    }
}

impl DeclarationSource for ContainerBuilder {
    fn tagged_declarations(&self, tag: &str) -> Result<Vec<ProcessorDeclaration>> {
        let mut declarations = Vec::new();

        for (id, definition) in self.definitions.iter().filter(|(_, d)| d.has_tag(tag)) {
            let mut declaration = ProcessorDeclaration::new(id.clone(), definition.class());
            for attributes in definition.tag_attributes(tag) {
                let binding = declared_binding_from_attributes(id, attributes)?;
                declaration = declaration.with_binding(binding);
            }
            declarations.push(declaration);
        }

        Ok(declarations)
    }
}

impl ParameterBag for ContainerBuilder {
    fn parameter(&self, name: &str) -> Option<String> {
        self.parameters.get(name).cloned()
    }
}

impl SinkSlot for ContainerBuilder {
    fn has_registry_sink(&self, service_id: &str) -> bool {
        self.registries.contains_key(service_id)
    }

    fn registry_sink(&mut self, service_id: &str) -> Option<&mut dyn RegistrySink> {
        self.registries
            .get_mut(service_id)
            .map(|registry| registry as &mut dyn RegistrySink)
    }
}

impl TypeCatalog for ContainerBuilder {
    fn contains(&self, type_name: &str) -> bool {
        self.types.contains(type_name)
    }

    fn subscriptions(&self, type_name: &str) -> Option<Vec<SubscribedTopic>> {
        self.types.subscriptions(type_name)
    }
}
