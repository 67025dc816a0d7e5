// Registry Builder - folds resolved bindings into the routing table

use crate::domain::{QueueMetaRegistry, ResolvedBinding};

/// Aggregates resolved bindings, keyed by queue.
///
/// Order is the order bindings are pushed; nothing is deduplicated.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    registry: QueueMetaRegistry,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, binding: &ResolvedBinding) -> &mut Self {
        self.registry.append(binding);
        self
    }

    pub fn extend<'b, I>(&mut self, bindings: I) -> &mut Self
    where
        I: IntoIterator<Item = &'b ResolvedBinding>,
    {
        for binding in bindings {
            self.registry.append(binding);
        }
        self
    }

    pub fn build(self) -> QueueMetaRegistry {
        self.registry
    }
}
