//! Traits which, typically, may be imported without concern: `use argmark::prelude::*`.
use crate::model::DescriptorId;

/// Behaviour for anything that refers back to a registered descriptor.
// Needs to be imported in order to write functions generic over `FlagHandle` and `ValueHandle`.
pub trait Handle {
    /// The identity of the descriptor this handle was issued for.
    fn id(&self) -> DescriptorId;
}
