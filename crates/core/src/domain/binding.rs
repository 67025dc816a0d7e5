// Resolved Binding - one effective (queue, processor) pair

use super::error::{DomainError, Result};
use serde::{Deserialize, Serialize};

/// Output of the binding resolver.
///
/// Queue name and processor identifier are never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedBinding {
    queue_name: String,
    processor_identifier: String,
    /// Topic the binding was resolved from (diagnostics only)
    topic_name: String,
}

impl ResolvedBinding {
    pub fn new(
        queue_name: impl Into<String>,
        processor_identifier: impl Into<String>,
        topic_name: impl Into<String>,
    ) -> Result<Self> {
        let queue_name = queue_name.into();
        let processor_identifier = processor_identifier.into();

        if queue_name.trim().is_empty() {
            return Err(DomainError::EmptyName {
                field: "queue name",
            });
        }
        if processor_identifier.trim().is_empty() {
            return Err(DomainError::EmptyName {
                field: "processor identifier",
            });
        }

        Ok(Self {
            queue_name,
            processor_identifier,
            topic_name: topic_name.into(),
        })
    }

    pub fn queue_name(&self) -> &str {
        &self.queue_name
    }

    pub fn processor_identifier(&self) -> &str {
        &self.processor_identifier
    }

    pub fn topic_name(&self) -> &str {
        &self.topic_name
    }
}
