// Subscriber Capability - self-described topic subscriptions

use super::declaration::non_empty;
use serde::{Deserialize, Serialize};

/// One topic advertised by a subscriber-capable processor type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribedTopic {
    pub topic_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processor_name: Option<String>,
}

impl SubscribedTopic {
    pub fn new(topic_name: impl Into<String>) -> Self {
        Self {
            topic_name: topic_name.into(),
            queue_name: None,
            processor_name: None,
        }
    }

    pub fn with_queue(mut self, queue_name: impl Into<String>) -> Self {
        self.queue_name = non_empty(queue_name.into());
        self
    }

    pub fn with_processor(mut self, processor_name: impl Into<String>) -> Self {
        self.processor_name = non_empty(processor_name.into());
        self
    }

    /// Drop blank overrides, as for declared bindings
    pub fn normalized(self) -> Self {
        Self {
            topic_name: self.topic_name,
            queue_name: self.queue_name.and_then(non_empty),
            processor_name: self.processor_name.and_then(non_empty),
        }
    }
}


/// Names a processor implementation the host can load.
pub trait ProcessorType {
    const TYPE_NAME: &'static str;
}

/// Subscriber capability.
///
/// Implemented by processor types that advertise their own topic bindings.
/// The method takes no receiver: inspection happens on the type, the
/// processor is never instantiated.
pub trait TopicSubscriber: ProcessorType {
    fn subscribed_topics() -> Vec<SubscribedTopic>;
}
