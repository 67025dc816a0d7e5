// Build Queue Meta Registry Pass - runs once at configuration time

use super::binding_resolver::BindingResolver;
use super::constants::{DEFAULT_QUEUE_NAME_PARAMETER, PROCESSOR_TAG, QUEUE_META_REGISTRY_SERVICE};
use super::registry_builder::RegistryBuilder;
use crate::domain::QueueMetaRegistry;
use crate::error::{AppError, Result};
use crate::port::{HostContainer, TypeCatalog};
use std::sync::Arc;
use tracing::info;

/// Host names the pass reads from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassConfig {
    pub processor_tag: String,
    pub default_queue_parameter: String,
    pub registry_service_id: String,
}

impl Default for PassConfig {
    fn default() -> Self {
        Self {
            processor_tag: PROCESSOR_TAG.to_string(),
            default_queue_parameter: DEFAULT_QUEUE_NAME_PARAMETER.to_string(),
            registry_service_id: QUEUE_META_REGISTRY_SERVICE.to_string(),
        }
    }
}

/// Lifecycle of a pass instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassState {
    NotRun,
    Completed,
    Skipped,
    Failed,
}

/// Result of a successful pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassOutcome {
    /// Registry built and handed to the sink
    Completed { registry: Arc<QueueMetaRegistry> },
    /// No registry sink configured; nothing was read or written
    Skipped,
}

impl PassOutcome {
    pub fn registry(&self) -> Option<&Arc<QueueMetaRegistry>> {
        match self {
            PassOutcome::Completed { registry } => Some(registry),
            PassOutcome::Skipped => None,
        }
    }
}

/// Builds the queue-to-processors routing table from tagged processors
/// and publishes it to the host's registry sink.
///
/// Synchronous and single-shot: any fatal error aborts the whole pass and
/// the sink is left untouched.
#[derive(Debug)]
pub struct BuildQueueMetaRegistryPass {
    config: PassConfig,
    state: PassState,
}

impl Default for BuildQueueMetaRegistryPass {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildQueueMetaRegistryPass {
    pub fn new() -> Self {
        Self::with_config(PassConfig::default())
    }

    pub fn with_config(config: PassConfig) -> Self {
        Self {
            config,
            state: PassState::NotRun,
        }
    }

    pub fn state(&self) -> PassState {
        self.state
    }

    pub fn config(&self) -> &PassConfig {
        &self.config
    }

    pub fn process<H: HostContainer>(&mut self, host: &mut H) -> Result<PassOutcome> {
        if self.state != PassState::NotRun {
            return Err(AppError::InvalidState(format!(
                "registry build pass already ran ({:?})",
                self.state
            )));
        }

        let outcome = self.run(host);
        self.state = match &outcome {
            Ok(PassOutcome::Completed { .. }) => PassState::Completed,
            Ok(PassOutcome::Skipped) => PassState::Skipped,
            Err(_) => PassState::Failed,
        };
        outcome
    }

    fn run<H: HostContainer>(&self, host: &mut H) -> Result<PassOutcome> {
        if !host.has_registry_sink(&self.config.registry_service_id) {
            return Ok(PassOutcome::Skipped);
        }

        // Checked before any declaration is resolved: a missing default queue
        // is reported even when a tagged type is also unloadable
        let default_queue_name = host
            .parameter(&self.config.default_queue_parameter)
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| {
                AppError::Config(format!(
                    "parameter \"{}\" must be set to a non-empty queue name",
                    self.config.default_queue_parameter
                ))
            })?;

        let declarations = host.tagged_declarations(&self.config.processor_tag)?;

        let bindings = {
            let catalog: &dyn TypeCatalog = &*host;
            BindingResolver::new(catalog, &default_queue_name).resolve_all(&declarations)?
        };

        let mut builder = RegistryBuilder::new();
        builder.extend(&bindings);
        let registry = Arc::new(builder.build());

        let sink = host
            .registry_sink(&self.config.registry_service_id)
            .ok_or_else(|| {
                AppError::InvalidState(format!(
                    "registry sink \"{}\" disappeared during the pass",
                    self.config.registry_service_id
                ))
            })?;
        sink.publish(Arc::clone(&registry));

        info!(
            processors = declarations.len(),
            bindings = bindings.len(),
            queues = registry.len(),
            "Queue meta registry built"
        );

        Ok(PassOutcome::Completed { registry })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DeclaredBinding, ProcessorDeclaration, SubscribedTopic};
    use crate::port::registry_sink::MockRegistrySink;
    use crate::port::{DeclarationSource, ParameterBag, RegistrySink, SinkSlot};
    use std::collections::HashMap;

    /// Minimal in-test host
    #[derive(Default)]
    struct TestHost {
        declarations: Vec<ProcessorDeclaration>,
        parameters: HashMap<String, String>,
        types: HashMap<String, Option<Vec<SubscribedTopic>>>,
        sink: Option<MockRegistrySink>,
        declarations_read: std::cell::Cell<bool>,
    }

    impl TestHost {
        fn with_default_queue() -> Self {
            let mut host = Self::default();
            host.parameters.insert(
                DEFAULT_QUEUE_NAME_PARAMETER.to_string(),
                "aDefaultQueueName".to_string(),
            );
            host
        }

        fn declare(&mut self, declaration: ProcessorDeclaration) {
            self.types
                .entry(declaration.implementing_type.clone())
                .or_insert(None);
            self.declarations.push(declaration);
        }
    }

    impl DeclarationSource for TestHost {
        fn tagged_declarations(&self, tag: &str) -> Result<Vec<ProcessorDeclaration>> {
            assert_eq!(tag, PROCESSOR_TAG);
            self.declarations_read.set(true);
            Ok(self.declarations.clone())
        }
    }

    impl ParameterBag for TestHost {
        fn parameter(&self, name: &str) -> Option<String> {
            self.parameters.get(name).cloned()
        }
    }

    impl SinkSlot for TestHost {
        fn has_registry_sink(&self, service_id: &str) -> bool {
            service_id == QUEUE_META_REGISTRY_SERVICE && self.sink.is_some()
        }

        fn registry_sink(&mut self, service_id: &str) -> Option<&mut dyn RegistrySink> {
            if service_id != QUEUE_META_REGISTRY_SERVICE {
                return None;
            }
            self.sink.as_mut().map(|sink| sink as &mut dyn RegistrySink)
        }
    }

    impl TypeCatalog for TestHost {
        fn contains(&self, type_name: &str) -> bool {
            self.types.contains_key(type_name)
        }

        fn subscriptions(&self, type_name: &str) -> Option<Vec<SubscribedTopic>> {
            self.types.get(type_name).cloned().flatten()
        }
    }

    #[test]
    fn test_could_be_constructed_without_arguments() {
        let pass = BuildQueueMetaRegistryPass::new();
        assert_eq!(pass.state(), PassState::NotRun);
        assert_eq!(pass.config(), &PassConfig::default());
    }

    #[test]
    fn test_skips_when_registry_sink_is_absent() {
        let mut host = TestHost::default();
        host.declarations.push(
            ProcessorDeclaration::new("processor", "notExistingClass")
                .with_binding(DeclaredBinding::new().with_processor("processor")),
        );

        let mut pass = BuildQueueMetaRegistryPass::new();
        let outcome = pass.process(&mut host).unwrap();

        assert_eq!(outcome, PassOutcome::Skipped);
        assert_eq!(pass.state(), PassState::Skipped);
        assert!(host.sink.is_none());
        assert!(!host.declarations_read.get());
    }

    #[test]
    fn test_missing_type_fails_and_sink_is_untouched() {
        let mut host = TestHost::with_default_queue();
        host.declarations.push(
            ProcessorDeclaration::new("processor", "notExistingClass")
                .with_binding(DeclaredBinding::new().with_processor("processor")),
        );
        let mut sink = MockRegistrySink::new();
        sink.expect_publish().never();
        host.sink = Some(sink);

        let mut pass = BuildQueueMetaRegistryPass::new();
        let err = pass.process(&mut host).unwrap_err();

        assert_eq!(
            err.to_string(),
            "The class \"notExistingClass\" could not be found."
        );
        assert_eq!(pass.state(), PassState::Failed);
    }

    #[test]
    fn test_missing_default_queue_parameter_is_config_error() {
        let mut host = TestHost::default();
        let mut sink = MockRegistrySink::new();
        sink.expect_publish().never();
        host.sink = Some(sink);

        let err = BuildQueueMetaRegistryPass::new()
            .process(&mut host)
            .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains(DEFAULT_QUEUE_NAME_PARAMETER));
    }

    #[test]
    fn test_missing_default_queue_reported_before_unknown_type() {
        let mut host = TestHost::default();
        host.declarations
            .push(ProcessorDeclaration::new("processor", "notExistingClass"));
        let mut sink = MockRegistrySink::new();
        sink.expect_publish().never();
        host.sink = Some(sink);

        let err = BuildQueueMetaRegistryPass::new()
            .process(&mut host)
            .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_publishes_registry_once() {
        let mut host = TestHost::with_default_queue();
        host.declare(
            ProcessorDeclaration::new("processor", "App\\Processor").with_binding(
                DeclaredBinding::new()
                    .with_processor("theProcessorName")
                    .with_topic("aTopicName"),
            ),
        );
        let mut sink = MockRegistrySink::new();
        sink.expect_publish()
            .withf(|registry| registry.processors("aDefaultQueueName") == ["theProcessorName"])
            .times(1)
            .return_const(());
        host.sink = Some(sink);

        let mut pass = BuildQueueMetaRegistryPass::new();
        let outcome = pass.process(&mut host).unwrap();

        let registry = outcome.registry().unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(pass.state(), PassState::Completed);
    }

    #[test]
    fn test_second_run_is_rejected() {
        let mut host = TestHost::default();
        let mut pass = BuildQueueMetaRegistryPass::new();

        pass.process(&mut host).unwrap();
        let err = pass.process(&mut host).unwrap_err();

        assert!(matches!(err, AppError::InvalidState(_)));
        assert_eq!(pass.state(), PassState::Skipped);
    }

    #[test]
    fn test_custom_names_are_honored() {
        let mut host = TestHost::with_default_queue();
        host.sink = Some(MockRegistrySink::new());

        let mut pass = BuildQueueMetaRegistryPass::with_config(PassConfig {
            registry_service_id: "custom.registry".to_string(),
            ..PassConfig::default()
        });

        assert_eq!(pass.process(&mut host).unwrap(), PassOutcome::Skipped);
    }
}
