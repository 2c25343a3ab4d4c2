use core::fmt::Debug;

/// A pointer to a node of the positional list; i.e., the position of the node's slot
/// in the underlying pinned storage.
///
/// Slots never move once pushed, so a node pointer stays attached to the same slot
/// for the lifetime of the list.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodePtr {
    slot: usize,
}

impl Debug for NodePtr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodePtr").field("slot", &self.slot).finish()
    }
}

impl NodePtr {
    /// Creates a new node pointer to the given `slot` of the storage.
    #[inline(always)]
    pub(crate) const fn new(slot: usize) -> Self {
        Self { slot }
    }

    /// Returns the position of the node in the underlying storage.
    #[inline(always)]
    pub(crate) const fn slot(&self) -> usize {
        self.slot
    }
}
