use std::marker::PhantomData;

use crate::prelude::Handle;

/// The identity of a registered descriptor.
///
/// Identities are unique across registries: two structurally identical descriptors registered separately never share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DescriptorId {
    registry: usize,
    index: usize,
}

impl DescriptorId {
    pub(crate) fn new(registry: usize, index: usize) -> Self {
        Self { registry, index }
    }

    pub(crate) fn registry(&self) -> usize {
        self.registry
    }

    /// The registration position of the descriptor within its registry.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl std::fmt::Display for DescriptorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}.{}", self.registry, self.index)
    }
}

/// The handle to a registered [`Flag`](crate::Flag).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlagHandle(DescriptorId);

impl FlagHandle {
    pub(crate) fn new(id: DescriptorId) -> Self {
        Self(id)
    }
}

impl Handle for FlagHandle {
    fn id(&self) -> DescriptorId {
        self.0
    }
}

/// The handle to a registered [`ValueFlag`](crate::ValueFlag), typed by its value `T`.
pub struct ValueHandle<T> {
    id: DescriptorId,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> ValueHandle<T> {
    pub(crate) fn new(id: DescriptorId) -> Self {
        Self {
            id,
            _phantom: PhantomData,
        }
    }
}

impl<T> Handle for ValueHandle<T> {
    fn id(&self) -> DescriptorId {
        self.id
    }
}

// Implemented by hand: deriving would needlessly require `T: Clone` (etc).
impl<T> Clone for ValueHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ValueHandle<T> {}

impl<T> PartialEq for ValueHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for ValueHandle<T> {}

impl<T> std::fmt::Debug for ValueHandle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ValueHandle<{t}>({id})",
            t = std::any::type_name::<T>(),
            id = self.id
        )
    }
}
