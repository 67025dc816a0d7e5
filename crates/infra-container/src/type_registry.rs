// Type Registry - the loadable processor types known to the host

use enqueue_routing_core::domain::{ProcessorType, SubscribedTopic, TopicSubscriber};
use enqueue_routing_core::port::TypeCatalog;
use std::collections::HashMap;

/// Where a type's advertised topics come from
#[derive(Debug, Clone)]
enum Capability {
    /// Plain processor, no subscriber capability
    None,
    /// Rust type implementing `TopicSubscriber`
    Static(fn() -> Vec<SubscribedTopic>),
    /// Type described by a manifest
    Declared(Vec<SubscribedTopic>),
}

/// Catalog of loadable processor types and their subscriber capability
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: HashMap<String, Capability>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plain processor type
    pub fn register<T: ProcessorType>(&mut self) -> &mut Self {
        self.types.insert(T::TYPE_NAME.to_string(), Capability::None);
        self
    }

    /// Register a processor type carrying the subscriber capability
    pub fn register_subscriber<T: TopicSubscriber>(&mut self) -> &mut Self {
        self.types
            .insert(T::TYPE_NAME.to_string(), Capability::Static(T::subscribed_topics));
        self
    }

    /// Register a type by name only
    pub fn register_name(&mut self, type_name: impl Into<String>) -> &mut Self {
        self.types.insert(type_name.into(), Capability::None);
        self
    }

    /// Register a type by name with the topics it advertises
    pub fn register_declared(
        &mut self,
        type_name: impl Into<String>,
        topics: Vec<SubscribedTopic>,
    ) -> &mut Self {
        self.types
            .insert(type_name.into(), Capability::Declared(topics));
        self
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeCatalog for TypeRegistry {
    fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    fn subscriptions(&self, type_name: &str) -> Option<Vec<SubscribedTopic>> {
        match self.types.get(type_name)? {
            Capability::None => None,
            Capability::Static(topics) => Some(topics()),
            Capability::Declared(topics) => Some(topics.clone()),
        }
    }
}
