//! Shared fixtures for the integration tests

use enqueue_routing_container::{ContainerBuilder, Definition, RegistryDefinition, TagAttributes};
use enqueue_routing_core::application::constants::{
    DEFAULT_QUEUE_NAME_PARAMETER, PROCESSOR_TAG, QUEUE_META_REGISTRY_SERVICE,
};
use enqueue_routing_core::domain::{ProcessorType, SubscribedTopic, TopicSubscriber};

pub const DEFAULT_QUEUE: &str = "aDefaultQueueName";

/// Processor type without the subscriber capability
pub struct PlainProcessor;

impl ProcessorType for PlainProcessor {
    const TYPE_NAME: &'static str = "Enqueue\\Tests\\PlainProcessor";
}

pub struct OnlyTopicNameTopicSubscriber;

impl ProcessorType for OnlyTopicNameTopicSubscriber {
    const TYPE_NAME: &'static str = "Enqueue\\Tests\\OnlyTopicNameTopicSubscriber";
}

impl TopicSubscriber for OnlyTopicNameTopicSubscriber {
    fn subscribed_topics() -> Vec<SubscribedTopic> {
        vec![SubscribedTopic::new("topic-subscriber-name")]
    }
}

pub struct ProcessorNameTopicSubscriber;

impl ProcessorType for ProcessorNameTopicSubscriber {
    const TYPE_NAME: &'static str = "Enqueue\\Tests\\ProcessorNameTopicSubscriber";
}

impl TopicSubscriber for ProcessorNameTopicSubscriber {
    fn subscribed_topics() -> Vec<SubscribedTopic> {
        vec![SubscribedTopic::new("topic-subscriber-name")
            .with_processor("subscriber-processor-name")]
    }
}

pub struct QueueNameTopicSubscriber;

impl ProcessorType for QueueNameTopicSubscriber {
    const TYPE_NAME: &'static str = "Enqueue\\Tests\\QueueNameTopicSubscriber";
}

impl TopicSubscriber for QueueNameTopicSubscriber {
    fn subscribed_topics() -> Vec<SubscribedTopic> {
        vec![SubscribedTopic::new("topic-subscriber-name").with_queue("subscriber-queue-name")]
    }
}

/// Container with the default queue parameter and every fixture type
pub fn create_container_builder() -> ContainerBuilder {
    let mut container = ContainerBuilder::new();
    container.set_parameter(DEFAULT_QUEUE_NAME_PARAMETER, DEFAULT_QUEUE);
    container
        .types_mut()
        .register::<PlainProcessor>()
        .register_subscriber::<OnlyTopicNameTopicSubscriber>()
        .register_subscriber::<ProcessorNameTopicSubscriber>()
        .register_subscriber::<QueueNameTopicSubscriber>();
    container
}

/// Same as `create_container_builder`, plus an empty registry sink
pub fn create_container_with_registry() -> ContainerBuilder {
    let mut container = create_container_builder();
    container.set_registry_definition(QUEUE_META_REGISTRY_SERVICE, RegistryDefinition::new());
    container
}

/// Definition of `class` tagged as a processor with `attributes`
pub fn processor_definition(class: &str, attributes: serde_json::Value) -> Definition {
    let attributes: TagAttributes = attributes.as_object().cloned().unwrap_or_default();
    let mut definition = Definition::new(class);
    definition.add_tag_with(PROCESSOR_TAG, attributes);
    definition
}

/// Second constructor argument of the registry sink
pub fn published_queues(container: &ContainerBuilder) -> Option<serde_json::Value> {
    container
        .registry_definition(QUEUE_META_REGISTRY_SERVICE)
        .and_then(|registry| registry.argument(1).cloned())
}
