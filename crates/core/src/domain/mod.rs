// Domain Layer - Declarations, bindings and the queue-meta registry

pub mod binding;
pub mod declaration;
pub mod error;
pub mod registry;
pub mod subscription;

// Re-exports
pub use binding::ResolvedBinding;
pub use declaration::{DeclaredBinding, ProcessorDeclaration, ServiceId};
pub use error::DomainError;
pub use registry::{QueueMeta, QueueMetaRegistry, QueueName};
pub use subscription::{ProcessorType, SubscribedTopic, TopicSubscriber};
