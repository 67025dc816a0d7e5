// Capability Inspector - reads subscriber metadata off a processor type

use crate::domain::{DomainError, SubscribedTopic};
use crate::error::Result;
use crate::port::TypeCatalog;

/// Extracts the topics a processor type advertises about itself
pub struct CapabilityInspector<'a> {
    catalog: &'a dyn TypeCatalog,
}

impl<'a> CapabilityInspector<'a> {
    pub fn new(catalog: &'a dyn TypeCatalog) -> Self {
        Self { catalog }
    }

    /// Advertised topics, or an empty list for types without the capability.
    ///
    /// Whether the type is loadable is the caller's concern. An advertised
    /// entry without a topic name is a configuration error of the type.
    pub fn subscribed_topics(&self, type_name: &str) -> Result<Vec<SubscribedTopic>> {
        let topics = self.catalog.subscriptions(type_name).unwrap_or_default();

        if topics.iter().any(|t| t.topic_name.trim().is_empty()) {
            return Err(DomainError::InvalidSubscription {
                type_name: type_name.to_string(),
            }
            .into());
        }

        Ok(topics.into_iter().map(SubscribedTopic::normalized).collect())
    }
}
