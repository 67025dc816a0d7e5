// Host Container Ports - declarations, parameters and the sink slot

use super::{RegistrySink, TypeCatalog};
use crate::domain::ProcessorDeclaration;
use crate::error::Result;

/// Enumerates processor declarations carrying a tag
pub trait DeclarationSource {
    /// Declarations in host definition order.
    ///
    /// Attribute bags are validated into typed bindings here, so a
    /// malformed bag fails before resolution starts.
    fn tagged_declarations(&self, tag: &str) -> Result<Vec<ProcessorDeclaration>>;
}

/// Named configuration parameters
pub trait ParameterBag {
    fn parameter(&self, name: &str) -> Option<String>;
}

/// Named service slot holding the registry sink
pub trait SinkSlot {
    fn has_registry_sink(&self, service_id: &str) -> bool;

    fn registry_sink(&mut self, service_id: &str) -> Option<&mut dyn RegistrySink>;
}

/// Everything the registry build pass needs from its host
pub trait HostContainer: DeclarationSource + ParameterBag + SinkSlot + TypeCatalog {}

impl<T> HostContainer for T where T: DeclarationSource + ParameterBag + SinkSlot + TypeCatalog {}
