// Well-known host names (no magic strings in the pass)

/// Tag marking a service definition as a message processor
pub const PROCESSOR_TAG: &str = "enqueue.client.processor";

/// Parameter holding the global default queue name
pub const DEFAULT_QUEUE_NAME_PARAMETER: &str = "enqueue.client.default_queue_name";

/// Service slot expected to hold the registry sink
pub const QUEUE_META_REGISTRY_SERVICE: &str = "enqueue.client.meta.queue_meta_registry";

/// Attribute keys recognized on a processor tag
pub const ATTR_TOPIC_NAME: &str = "topicName";
pub const ATTR_QUEUE_NAME: &str = "queueName";
pub const ATTR_PROCESSOR_NAME: &str = "processorName";
