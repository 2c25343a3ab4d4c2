use crate::{
    memory::{MemoryPolicy, MemoryReclaimAlways, Utilization},
    node::Node,
    references::NodePtr,
};
use alloc::vec::Vec;
use core::{fmt::Debug, marker::PhantomData};
use orx_pinned_vec::PinnedVec;
use orx_split_vec::SplitVec;

const HEADER: NodePtr = NodePtr::new(0);
const TRAILER: NodePtr = NodePtr::new(1);

/// Doubly linked chain of nodes bounded by the header and trailer sentinels.
///
/// Nodes are stored in a pinned vector; a pushed node never moves, which keeps every
/// `NodePtr` attached to its slot while the chain grows.
pub(crate) struct LinkedStorage<T, M = MemoryReclaimAlways>
where
    M: MemoryPolicy,
{
    nodes: SplitVec<Node<T>>,
    closed: Vec<NodePtr>,
    len: usize,
    policy: PhantomData<M>,
}

impl<T, M> LinkedStorage<T, M>
where
    M: MemoryPolicy,
{
    /// Creates a new empty chain where the header is immediately followed by the trailer.
    pub(crate) fn new() -> Self {
        let mut nodes = SplitVec::new();
        nodes.push(Node::new_sentinel(None, Some(TRAILER)));
        nodes.push(Node::new_sentinel(Some(HEADER), None));
        Self {
            nodes,
            closed: Vec::new(),
            len: 0,
            policy: PhantomData,
        }
    }

    // get

    #[inline(always)]
    pub(crate) fn header(&self) -> NodePtr {
        HEADER
    }

    #[inline(always)]
    pub(crate) fn trailer(&self) -> NodePtr {
        TRAILER
    }

    #[inline(always)]
    pub(crate) fn is_sentinel(&self, ptr: NodePtr) -> bool {
        ptr == HEADER || ptr == TRAILER
    }

    /// Returns the number of active nodes; sentinels excluded.
    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn utilization(&self) -> Utilization {
        Utilization {
            capacity: self.nodes.capacity(),
            num_active_nodes: self.len,
            num_closed_nodes: self.closed.len(),
        }
    }

    /// Returns a reference to the node with the given `ptr`.
    ///
    /// # Panics
    ///
    /// Panics if the `ptr` does not belong to this storage.
    #[inline(always)]
    pub(crate) fn node(&self, ptr: NodePtr) -> &Node<T> {
        &self.nodes[ptr.slot()]
    }

    /// Returns a reference to the node with the given `ptr`; None if the `ptr` is out of bounds.
    #[inline(always)]
    pub(crate) fn get_node(&self, ptr: NodePtr) -> Option<&Node<T>> {
        self.nodes.get(ptr.slot())
    }

    // mut

    /// Returns a mutable reference to the node with the given `ptr`.
    ///
    /// # Panics
    ///
    /// Panics if the `ptr` does not belong to this storage.
    #[inline(always)]
    pub(crate) fn node_mut(&mut self, ptr: NodePtr) -> &mut Node<T> {
        &mut self.nodes[ptr.slot()]
    }

    /// Opens a node holding `data`, links it between `predecessor` and `successor`,
    /// and returns its pointer.
    ///
    /// The two nodes must be adjacent with `predecessor` coming first; this is not validated.
    pub(crate) fn insert_between(
        &mut self,
        data: T,
        predecessor: NodePtr,
        successor: NodePtr,
    ) -> NodePtr {
        debug_assert_eq!(self.node(predecessor).next(), Some(successor));
        debug_assert_eq!(self.node(successor).prev(), Some(predecessor));

        let ptr = self.open(data, predecessor, successor);
        self.node_mut(predecessor).set_next(ptr);
        self.node_mut(successor).set_prev(ptr);
        self.len += 1;
        ptr
    }

    /// Unlinks the node at `ptr` from its neighbors, closes it and returns its data.
    ///
    /// # Panics
    ///
    /// Panics if the node is a sentinel or is already closed.
    pub(crate) fn delete_node(&mut self, ptr: NodePtr) -> T {
        debug_assert!(!self.is_sentinel(ptr));

        let [prev, next] = {
            let node = self.node(ptr);
            [node.prev(), node.next()]
        };
        let (prev, next) = prev.zip(next).expect("must be an active node");

        self.node_mut(prev).set_next(next);
        self.node_mut(next).set_prev(prev);

        self.len -= 1;
        self.closed.push(ptr);
        self.node_mut(ptr).close()
    }

    /// Moves the nodes into a storage governing its closed slots with the memory policy `M2`.
    pub(crate) fn into_memory_policy<M2: MemoryPolicy>(self) -> LinkedStorage<T, M2> {
        LinkedStorage {
            nodes: self.nodes,
            closed: self.closed,
            len: self.len,
            policy: PhantomData,
        }
    }

    fn open(&mut self, data: T, prev: NodePtr, next: NodePtr) -> NodePtr {
        let reopen = match !self.closed.is_empty() && M::reuse_closed(&self.utilization()) {
            true => self.closed.pop(),
            false => None,
        };

        match reopen {
            Some(ptr) => {
                self.node_mut(ptr).reopen(data, prev, next);
                ptr
            }
            None => {
                let ptr = NodePtr::new(self.nodes.len());
                self.nodes.push(Node::new_active(data, prev, next));
                ptr
            }
        }
    }
}

impl<T: Debug, M: MemoryPolicy> Debug for LinkedStorage<T, M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LinkedStorage")
            .field("len", &self.len)
            .field("storage_len", &self.nodes.len())
            .field("closed", &self.closed)
            .finish()
    }
}
