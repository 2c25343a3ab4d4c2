use crate::{memory::Generation, references::NodePtr};
use core::fmt::Debug;

/// Node of the positional list.
///
/// A node is in one of three states:
/// * sentinel: holds no element; the header only links to its `next`, the trailer only links to its `prev`,
/// * active: holds an element and links to both neighbors,
/// * closed: holds no element and no links; its slot waits to be reopened.
pub(crate) struct Node<T> {
    data: Option<T>,
    prev: Option<NodePtr>,
    next: Option<NodePtr>,
    generation: Generation,
}

impl<T> Node<T> {
    /// Creates a sentinel node with the given links.
    pub(crate) fn new_sentinel(prev: Option<NodePtr>, next: Option<NodePtr>) -> Self {
        Self {
            data: None,
            prev,
            next,
            generation: Generation::default(),
        }
    }

    /// Creates a new active node with the given `data`, and `prev` and `next` references.
    pub(crate) fn new_active(data: T, prev: NodePtr, next: NodePtr) -> Self {
        Self {
            data: Some(data),
            prev: Some(prev),
            next: Some(next),
            generation: Generation::default(),
        }
    }

    // ref

    /// Returns a reference to the data of the node; None if the node is a sentinel or closed.
    #[inline(always)]
    pub(crate) fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    #[inline(always)]
    pub(crate) fn prev(&self) -> Option<NodePtr> {
        self.prev
    }

    #[inline(always)]
    pub(crate) fn next(&self) -> Option<NodePtr> {
        self.next
    }

    #[inline(always)]
    pub(crate) fn generation(&self) -> Generation {
        self.generation
    }

    /// Returns true if the node has been closed; i.e., both of its links are cleared.
    ///
    /// Sentinels are never closed: the header keeps its `next` and the trailer keeps its `prev`.
    #[inline(always)]
    pub(crate) fn is_closed(&self) -> bool {
        self.next.is_none() && self.prev.is_none()
    }

    // mut

    /// Returns a mutable reference to the underlying data.
    #[inline(always)]
    pub(crate) fn data_mut(&mut self) -> Option<&mut T> {
        self.data.as_mut()
    }

    #[inline(always)]
    pub(crate) fn set_prev(&mut self, prev: NodePtr) {
        self.prev = Some(prev);
    }

    #[inline(always)]
    pub(crate) fn set_next(&mut self, next: NodePtr) {
        self.next = Some(next);
    }

    /// Closes the node and returns its data, and clears its connections.
    ///
    /// # Panics
    ///
    /// Panics if the node was already closed or is a sentinel.
    pub(crate) fn close(&mut self) -> T {
        self.prev = None;
        self.next = None;
        self.data.take().expect("must be an open node")
    }

    /// Reopens a closed node with the given `data` and links, and advances its generation.
    pub(crate) fn reopen(&mut self, data: T, prev: NodePtr, next: NodePtr) {
        debug_assert!(self.is_closed() && self.data.is_none());
        self.data = Some(data);
        self.prev = Some(prev);
        self.next = Some(next);
        self.generation = self.generation.successor();
    }

    /// Swaps the data of the node with the `new_value` and returns the old value.
    ///
    /// # Panics
    ///
    /// Panics if the node was already closed or is a sentinel.
    pub(crate) fn swap_data(&mut self, new_value: T) -> T {
        debug_assert!(!self.is_closed());
        self.data.replace(new_value).expect("must be active")
    }
}

impl<T: Debug> Debug for Node<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Node")
            .field("data", &self.data)
            .field("prev", &self.prev)
            .field("next", &self.next)
            .field("generation", &self.generation)
            .finish()
    }
}
