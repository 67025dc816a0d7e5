// Binding Resolver - turns declarations into resolved (queue, processor) pairs

use super::capability_inspector::CapabilityInspector;
use crate::domain::{DeclaredBinding, ProcessorDeclaration, ResolvedBinding, SubscribedTopic};
use crate::error::{AppError, Result};
use crate::port::TypeCatalog;
use tracing::debug;

/// Resolves each declaration against explicit bindings, the subscriber
/// capability and the global default queue.
///
/// Precedence, per field: explicit binding > capability entry > global
/// default (queue) or service id (processor).
pub struct BindingResolver<'a> {
    catalog: &'a dyn TypeCatalog,
    default_queue_name: &'a str,
}

impl<'a> BindingResolver<'a> {
    pub fn new(catalog: &'a dyn TypeCatalog, default_queue_name: &'a str) -> Self {
        Self {
            catalog,
            default_queue_name,
        }
    }

    /// Resolve every declaration, stopping at the first fatal error
    pub fn resolve_all(
        &self,
        declarations: &[ProcessorDeclaration],
    ) -> Result<Vec<ResolvedBinding>> {
        let mut resolved = Vec::new();
        for declaration in declarations {
            resolved.extend(self.resolve(declaration)?);
        }
        Ok(resolved)
    }

    /// Resolve a single declaration.
    ///
    /// Returns an empty list when the declaration contributes nothing.
    pub fn resolve(&self, declaration: &ProcessorDeclaration) -> Result<Vec<ResolvedBinding>> {
        let type_name = declaration.implementing_type.as_str();
        if !self.catalog.contains(type_name) {
            return Err(AppError::TypeNotFound {
                type_name: type_name.to_string(),
            });
        }

        let advertised = if needs_capability(declaration) {
            CapabilityInspector::new(self.catalog).subscribed_topics(type_name)?
        } else {
            Vec::new()
        };

        let mut resolved = Vec::new();

        if declaration.bindings.is_empty() {
            for topic in &advertised {
                let explicit = DeclaredBinding::default();
                let binding =
                    self.resolve_one(declaration, &explicit, Some(topic), &topic.topic_name)?;
                resolved.push(binding);
            }
        }

        for binding in &declaration.bindings {
            if let Some(topic_name) = binding.topic_name.as_deref() {
                let capability = advertised.iter().find(|t| t.topic_name == topic_name);
                resolved.push(self.resolve_one(declaration, binding, capability, topic_name)?);
            } else if advertised.is_empty() {
                // Partial binding: only meaningful as an overlay on advertised topics
                debug!(
                    service_id = %declaration.service_id,
                    "Binding without topic name and no subscriber capability, skipping"
                );
            } else {
                // Every partial binding overlays every topic, so two topicless
                // tags register each advertised topic twice
                for topic in &advertised {
                    let overlaid =
                        self.resolve_one(declaration, binding, Some(topic), &topic.topic_name)?;
                    resolved.push(overlaid);
                }
            }
        }

        if resolved.is_empty() {
            debug!(
                service_id = %declaration.service_id,
                type_name = %type_name,
                "Processor contributes no queue binding"
            );
        }

        Ok(resolved)
    }

    fn resolve_one(
        &self,
        declaration: &ProcessorDeclaration,
        binding: &DeclaredBinding,
        capability: Option<&SubscribedTopic>,
        topic_name: &str,
    ) -> Result<ResolvedBinding> {
        let processor_name = binding
            .processor_name
            .as_deref()
            .or_else(|| capability.and_then(|c| c.processor_name.as_deref()))
            .unwrap_or(&declaration.service_id);

        let queue_name = binding
            .queue_name
            .as_deref()
            .or_else(|| capability.and_then(|c| c.queue_name.as_deref()))
            .unwrap_or(self.default_queue_name);

        let resolved = ResolvedBinding::new(queue_name, processor_name, topic_name)?;

        debug!(
            service_id = %declaration.service_id,
            topic = %resolved.topic_name(),
            queue = %resolved.queue_name(),
            processor = %resolved.processor_identifier(),
            "Resolved processor binding"
        );

        Ok(resolved)
    }
}

/// Capability metadata is only consulted when explicit bindings leave a gap
fn needs_capability(declaration: &ProcessorDeclaration) -> bool {
    declaration.bindings.is_empty()
        || declaration
            .bindings
            .iter()
            .any(|b| b.topic_name.is_none() || b.queue_name.is_none() || b.processor_name.is_none())
}
