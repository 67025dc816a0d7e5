// Registry Definition - the container's registry sink

use enqueue_routing_core::domain::QueueMetaRegistry;
use enqueue_routing_core::port::RegistrySink;
use serde_json::Value;
use std::sync::Arc;

/// Index of the constructor argument receiving the queue map
const QUEUES_ARGUMENT: usize = 1;

/// Sink service whose second constructor argument receives the
/// `{queue: {"processors": [..]}}` map
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryDefinition {
    arguments: Vec<Value>,
    registry: Option<Arc<QueueMetaRegistry>>,
}

impl Default for RegistryDefinition {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryDefinition {
    /// Arguments start as `[null, {}]`
    pub fn new() -> Self {
        Self::with_arguments(vec![Value::Null, Value::Object(Default::default())])
    }

    pub fn with_arguments(arguments: Vec<Value>) -> Self {
        Self {
            arguments,
            registry: None,
        }
    }

    pub fn arguments(&self) -> &[Value] {
        &self.arguments
    }

    pub fn argument(&self, index: usize) -> Option<&Value> {
        self.arguments.get(index)
    }

    /// The published registry, once the build pass has run
    pub fn registry(&self) -> Option<Arc<QueueMetaRegistry>> {
        self.registry.clone()
    }
}

impl RegistrySink for RegistryDefinition {
    fn publish(&mut self, registry: Arc<QueueMetaRegistry>) {
        if self.arguments.len() <= QUEUES_ARGUMENT {
            self.arguments.resize(QUEUES_ARGUMENT + 1, Value::Null);
        }
        self.arguments[QUEUES_ARGUMENT] = registry.to_sink_argument();
        self.registry = Some(registry);
    }
}
