// Application Layer - The queue-meta registry build pass

pub mod binding_resolver;
pub mod build_pass;
pub mod capability_inspector;
pub mod constants;
pub mod registry_builder;

// Re-exports
pub use binding_resolver::BindingResolver;
pub use build_pass::{BuildQueueMetaRegistryPass, PassConfig, PassOutcome, PassState};
pub use capability_inspector::CapabilityInspector;
pub use registry_builder::RegistryBuilder;
