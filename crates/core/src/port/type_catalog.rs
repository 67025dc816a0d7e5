// Type Catalog Port - type loading and capability metadata

use crate::domain::SubscribedTopic;

/// Static, type-level knowledge about processor implementations.
///
/// Implementations must answer from metadata alone; a processor is never
/// instantiated to inspect it.
#[cfg_attr(test, mockall::automock)]
pub trait TypeCatalog {
    /// Whether the implementing type can be loaded
    fn contains(&self, type_name: &str) -> bool;

    /// Topics advertised by the type.
    ///
    /// `None` when the type is unknown or lacks the subscriber capability.
    fn subscriptions(&self, type_name: &str) -> Option<Vec<SubscribedTopic>>;
}
