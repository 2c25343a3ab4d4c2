use super::NodePtr;
use crate::memory::Generation;
use core::{
    fmt::Debug,
    marker::PhantomData,
    sync::atomic::{AtomicUsize, Ordering},
};

static NEXT_LIST_ID: AtomicUsize = AtomicUsize::new(0);

/// Identity of a positional list, unique within the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct ListId(usize);

impl ListId {
    pub(crate) fn new_unique() -> Self {
        Self(NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A position providing safe and constant time access to an element of a [`PositionalList`].
///
/// A position is a light-weight handle; it does not own, or borrow, the element or the list.
/// It remains valid as long as its element is in the list, regardless of the insertions and
/// removals happening elsewhere in the list.
///
/// A position is valid iff it satisfies the following two conditions:
///
/// * It is created by the list it is used with.
/// * Its element has not been removed from that list.
///
/// Two positions are equal iff they refer to the same node of the same list;
/// equal elements at different nodes do not make positions equal.
///
/// [`PositionalList`]: crate::PositionalList
pub struct Position<T> {
    list: ListId,
    ptr: NodePtr,
    generation: Generation,
    phantom: PhantomData<fn() -> T>,
}

impl<T> core::hash::Hash for Position<T> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.list.hash(state);
        self.ptr.hash(state);
        self.generation.hash(state);
    }
}

// Only the handle is copied, so "T" does not need to be copy itself.
impl<T> Copy for Position<T> {}

impl<T> Clone for Position<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Debug for Position<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Position")
            .field("list", &self.list)
            .field("ptr", &self.ptr)
            .field("generation", &self.generation)
            .finish()
    }
}

impl<T> PartialEq for Position<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr && self.list == other.list && self.generation == other.generation
    }
}

impl<T> Eq for Position<T> {}

impl<T> Position<T> {
    #[inline(always)]
    pub(crate) fn new(list: ListId, ptr: NodePtr, generation: Generation) -> Self {
        Self {
            list,
            ptr,
            generation,
            phantom: PhantomData,
        }
    }

    #[inline(always)]
    pub(crate) fn list(&self) -> ListId {
        self.list
    }

    #[inline(always)]
    pub(crate) fn node_ptr(&self) -> NodePtr {
        self.ptr
    }

    #[inline(always)]
    pub(crate) fn generation(&self) -> Generation {
        self.generation
    }
}
