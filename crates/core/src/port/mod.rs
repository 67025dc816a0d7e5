// Port Layer - Interfaces the host container implements

pub mod declaration_source;
pub mod registry_sink;
pub mod type_catalog;

// Re-exports
pub use declaration_source::{DeclarationSource, HostContainer, ParameterBag, SinkSlot};
pub use registry_sink::RegistrySink;
pub use type_catalog::TypeCatalog;
