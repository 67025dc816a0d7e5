// Queue Meta Registry - the published routing table

use super::binding::ResolvedBinding;
use super::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Queue identifier
pub type QueueName = String;

/// Processors bound to a single queue, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueMeta {
    pub processors: Vec<String>,
}

/// Immutable mapping from queue name to the processors invoked for it.
///
/// Built once by the registry build pass and handed out behind an `Arc`.
/// Duplicate processor identifiers are kept: multiplicity is part of the
/// routing table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueueMetaRegistry {
    queues: BTreeMap<QueueName, QueueMeta>,
}

impl QueueMetaRegistry {
    pub(crate) fn append(&mut self, binding: &ResolvedBinding) {
        self.queues
            .entry(binding.queue_name().to_string())
            .or_default()
            .processors
            .push(binding.processor_identifier().to_string());
    }

    /// Processors bound to `queue_name`; empty when the queue is unknown
    pub fn processors(&self, queue_name: &str) -> &[String] {
        self.queues
            .get(queue_name)
            .map(|meta| meta.processors.as_slice())
            .unwrap_or(&[])
    }

    pub fn queue_names(&self) -> impl Iterator<Item = &str> {
        self.queues.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueueMeta)> {
        self.queues.iter().map(|(name, meta)| (name.as_str(), meta))
    }

    /// Number of queues
    pub fn len(&self) -> usize {
        self.queues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queues.is_empty()
    }

    /// Total number of (queue, processor) entries, duplicates included
    pub fn binding_count(&self) -> usize {
        self.queues.values().map(|meta| meta.processors.len()).sum()
    }

    /// Restrict the registry to the given client queue names.
    ///
    /// An empty selection keeps every queue.
    pub fn select<S: AsRef<str>>(&self, queue_names: &[S]) -> Result<QueueMetaRegistry> {
        if queue_names.is_empty() {
            return Ok(self.clone());
        }

        let mut queues = BTreeMap::new();
        for name in queue_names {
            let name = name.as_ref();
            let meta = self
                .queues
                .get(name)
                .ok_or_else(|| DomainError::QueueNotFound(name.to_string()))?;
            queues.insert(name.to_string(), meta.clone());
        }

        Ok(QueueMetaRegistry { queues })
    }

    /// Shape handed to the registry sink: `{queue: {"processors": [..]}}`
    pub fn to_sink_argument(&self) -> serde_json::Value {
        let map = self
            .queues
            .iter()
            .map(|(name, meta)| {
                (
                    name.clone(),
                    serde_json::json!({ "processors": meta.processors }),
                )
            })
            .collect::<serde_json::Map<_, _>>();

        serde_json::Value::Object(map)
    }
}
