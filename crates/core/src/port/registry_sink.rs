// Registry Sink Port

use crate::domain::QueueMetaRegistry;
use std::sync::Arc;

/// Receiver of the published queue-meta registry
#[cfg_attr(test, mockall::automock)]
pub trait RegistrySink {
    /// Store the routing table. Called at most once per build pass.
    fn publish(&mut self, registry: Arc<QueueMetaRegistry>);
}
