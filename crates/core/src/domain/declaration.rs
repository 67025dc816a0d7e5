// Processor Declaration Domain Model

use serde::{Deserialize, Serialize};

/// Service identifier within the host container
pub type ServiceId = String;

/// Explicit binding metadata attached to a processor declaration.
///
/// Every field is optional. Empty strings are normalized to `None` so that
/// a blank attribute never shadows a capability or global default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclaredBinding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processor_name: Option<String>,
}

impl DeclaredBinding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_topic(mut self, topic_name: impl Into<String>) -> Self {
        self.topic_name = non_empty(topic_name.into());
        self
    }

    pub fn with_queue(mut self, queue_name: impl Into<String>) -> Self {
        self.queue_name = non_empty(queue_name.into());
        self
    }

    pub fn with_processor(mut self, processor_name: impl Into<String>) -> Self {
        self.processor_name = non_empty(processor_name.into());
        self
    }

    /// Drop blank values left over from loosely-typed sources.
    pub fn normalized(self) -> Self {
        Self {
            topic_name: self.topic_name.and_then(non_empty),
            queue_name: self.queue_name.and_then(non_empty),
            processor_name: self.processor_name.and_then(non_empty),
        }
    }
}

/// One registered processing unit, as enumerated by the host container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessorDeclaration {
    pub service_id: ServiceId,
    pub implementing_type: String,
    #[serde(default)]
    pub bindings: Vec<DeclaredBinding>,
}

impl ProcessorDeclaration {
    pub fn new(service_id: impl Into<String>, implementing_type: impl Into<String>) -> Self {
        Self {
            service_id: service_id.into(),
            implementing_type: implementing_type.into(),
            bindings: Vec::new(),
        }
    }

    pub fn with_binding(mut self, binding: DeclaredBinding) -> Self {
        self.bindings.push(binding.normalized());
        self
    }
}

pub(crate) fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
