use crate::{
    iter::{Iter, NodePtrs, Positions},
    linked_storage::LinkedStorage,
    memory::{MemoryPolicy, MemoryReclaimAlways, Utilization},
    references::{ListId, NodePtr, Position, PositionError},
};
use tracing::debug;

/// A sequential container of elements allowing positional access.
///
/// Elements are stored in a doubly linked chain bounded by two sentinel nodes.
/// Every element is addressed by a [`Position`], a light-weight handle which stays valid
/// while other elements are inserted or removed anywhere in the list.
/// Each operation taking or returning a position runs in constant time.
///
/// The second generic parameter `M` defines the [`MemoryPolicy`]; i.e., whether slots of removed
/// elements are reused by later insertions. It defaults to [`MemoryReclaimAlways`].
///
/// # Examples
///
/// ```rust
/// use orx_positional_list::*;
///
/// let mut list = PositionalList::new();
///
/// let b = list.add_last('b');
/// let a = list.add_first('a');
/// let d = list.add_after(b, 'd').unwrap();
/// let c = list.add_before(d, 'c').unwrap();
///
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), ['a', 'b', 'c', 'd']);
///
/// assert_eq!(list.first(), Some(a));
/// assert_eq!(list.after(b), Ok(Some(c)));
/// assert_eq!(list.before(a), Ok(None));
///
/// assert_eq!(list.replace(c, 'x'), Ok('c'));
/// assert_eq!(list.delete(b), Ok('b'));
///
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), ['a', 'x', 'd']);
/// assert_eq!(list.element(c), Ok(&'x'));
/// assert_eq!(list.element(b), Err(PositionError::RemovedNode));
/// ```
pub struct PositionalList<T, M = MemoryReclaimAlways>
where
    M: MemoryPolicy,
{
    storage: LinkedStorage<T, M>,
    id: ListId,
}

impl<T, M> Default for PositionalList<T, M>
where
    M: MemoryPolicy,
{
    /// Creates a new empty list with the memory policy `M`.
    ///
    /// ```rust
    /// use orx_positional_list::*;
    ///
    /// let mut list: PositionalList<char, MemoryReclaimNever> = Default::default();
    /// list.add_last('a');
    /// assert_eq!(list.len(), 1);
    /// ```
    fn default() -> Self {
        Self {
            storage: LinkedStorage::new(),
            id: ListId::new_unique(),
        }
    }
}

impl<T> PositionalList<T> {
    /// Creates a new empty list with the default [`MemoryReclaimAlways`] policy.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T, M> PositionalList<T, M>
where
    M: MemoryPolicy,
{
    // get

    /// Returns the number of elements in the list.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns whether or not the list is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns current node utilization of the underlying storage.
    pub fn utilization(&self) -> Utilization {
        self.storage.utilization()
    }

    /// Returns the position of the first element; None if the list is empty.
    pub fn first(&self) -> Option<Position<T>> {
        self.storage
            .node(self.storage.header())
            .next()
            .and_then(|ptr| self.make_position(ptr))
    }

    /// Returns the position of the last element; None if the list is empty.
    pub fn last(&self) -> Option<Position<T>> {
        self.storage
            .node(self.storage.trailer())
            .prev()
            .and_then(|ptr| self.make_position(ptr))
    }

    /// Returns the position just before the given `position`; None if `position` is the first one.
    ///
    /// Returns an error if the `position` is not valid for this list.
    pub fn before(&self, position: Position<T>) -> Result<Option<Position<T>>, PositionError> {
        let ptr = self.validate(position)?;
        Ok(self
            .storage
            .node(ptr)
            .prev()
            .and_then(|prev| self.make_position(prev)))
    }

    /// Returns the position just after the given `position`; None if `position` is the last one.
    ///
    /// Returns an error if the `position` is not valid for this list.
    pub fn after(&self, position: Position<T>) -> Result<Option<Position<T>>, PositionError> {
        let ptr = self.validate(position)?;
        Ok(self
            .storage
            .node(ptr)
            .next()
            .and_then(|next| self.make_position(next)))
    }

    /// Returns a reference to the element at the given `position`.
    ///
    /// Returns an error if the `position` is not valid for this list.
    pub fn element(&self, position: Position<T>) -> Result<&T, PositionError> {
        let ptr = self.validate(position)?;
        self.storage
            .node(ptr)
            .data()
            .ok_or(PositionError::RemovedNode)
    }

    /// Returns a mutable reference to the element at the given `position`.
    ///
    /// Returns an error if the `position` is not valid for this list.
    pub fn element_mut(&mut self, position: Position<T>) -> Result<&mut T, PositionError> {
        let ptr = self.validate(position)?;
        self.storage
            .node_mut(ptr)
            .data_mut()
            .ok_or(PositionError::RemovedNode)
    }

    /// Returns true only if the `position` is valid for this list; i.e.,
    /// it is created by this list and its element is not removed.
    pub fn is_valid(&self, position: Position<T>) -> bool {
        self.invalidity_reason(position).is_none()
    }

    /// Returns the reason why the `position` is not valid for this list;
    /// None if the `position` is valid.
    pub fn invalidity_reason(&self, position: Position<T>) -> Option<PositionError> {
        match position.list() == self.id {
            false => Some(PositionError::OtherList),
            true => match self.storage.get_node(position.node_ptr()) {
                Some(node) if !node.is_closed() && node.generation() == position.generation() => {
                    None
                }
                _ => Some(PositionError::RemovedNode),
            },
        }
    }

    /// Returns an iterator over the elements of the list from the first to the last.
    ///
    /// The iterator is double ended; hence, `iter().rev()` walks from the last to the first.
    pub fn iter(&self) -> Iter<'_, T, M> {
        Iter::new(self.node_ptrs())
    }

    /// Returns an iterator over the positions of the elements of the list from the first to the last.
    pub fn positions(&self) -> Positions<'_, T, M> {
        Positions::new(self, self.node_ptrs())
    }

    // mut

    /// Inserts the `element` at the front of the list and returns its position.
    pub fn add_first(&mut self, element: T) -> Position<T> {
        let header = self.storage.header();
        let successor = self
            .storage
            .node(header)
            .next()
            .unwrap_or(self.storage.trailer());
        self.insert_between(element, header, successor)
    }

    /// Inserts the `element` at the back of the list and returns its position.
    pub fn add_last(&mut self, element: T) -> Position<T> {
        let trailer = self.storage.trailer();
        let predecessor = self
            .storage
            .node(trailer)
            .prev()
            .unwrap_or(self.storage.header());
        self.insert_between(element, predecessor, trailer)
    }

    /// Inserts the `element` just before the given `position` and returns the position of the new element.
    ///
    /// Returns an error if the `position` is not valid for this list; the list is not changed in this case.
    pub fn add_before(
        &mut self,
        position: Position<T>,
        element: T,
    ) -> Result<Position<T>, PositionError> {
        let successor = self.validate(position)?;
        let predecessor = self
            .storage
            .node(successor)
            .prev()
            .ok_or(PositionError::RemovedNode)?;
        Ok(self.insert_between(element, predecessor, successor))
    }

    /// Inserts the `element` just after the given `position` and returns the position of the new element.
    ///
    /// Returns an error if the `position` is not valid for this list; the list is not changed in this case.
    pub fn add_after(
        &mut self,
        position: Position<T>,
        element: T,
    ) -> Result<Position<T>, PositionError> {
        let predecessor = self.validate(position)?;
        let successor = self
            .storage
            .node(predecessor)
            .next()
            .ok_or(PositionError::RemovedNode)?;
        Ok(self.insert_between(element, predecessor, successor))
    }

    /// Removes and returns the element at the given `position`.
    ///
    /// The `position` is permanently invalid afterwards.
    ///
    /// Returns an error if the `position` is not valid for this list; the list is not changed in this case.
    pub fn delete(&mut self, position: Position<T>) -> Result<T, PositionError> {
        let ptr = self.validate(position)?;
        Ok(self.storage.delete_node(ptr))
    }

    /// Replaces the element at the given `position` with the new `element` and returns the old one.
    ///
    /// The node is not changed; therefore, the `position` remains valid.
    ///
    /// Returns an error if the `position` is not valid for this list; the list is not changed in this case.
    pub fn replace(&mut self, position: Position<T>, element: T) -> Result<T, PositionError> {
        let ptr = self.validate(position)?;
        Ok(self.storage.node_mut(ptr).swap_data(element))
    }

    /// Removes and returns the first element; None if the list is empty.
    pub fn pop_first(&mut self) -> Option<T> {
        self.first()
            .map(|position| self.storage.delete_node(position.node_ptr()))
    }

    /// Removes and returns the last element; None if the list is empty.
    pub fn pop_last(&mut self) -> Option<T> {
        self.last()
            .map(|position| self.storage.delete_node(position.node_ptr()))
    }

    /// Removes all elements of the list.
    ///
    /// All positions created so far become invalid.
    pub fn clear(&mut self) {
        while self.pop_first().is_some() {}
    }

    // helpers

    pub(crate) fn from_raw_parts(storage: LinkedStorage<T, M>, id: ListId) -> Self {
        Self { storage, id }
    }

    pub(crate) fn into_inner(self) -> (LinkedStorage<T, M>, ListId) {
        (self.storage, self.id)
    }

    /// Returns the node of the `position`, or the reason why it cannot be used with this list.
    fn validate(&self, position: Position<T>) -> Result<NodePtr, PositionError> {
        match self.invalidity_reason(position) {
            None => Ok(position.node_ptr()),
            Some(error) => {
                debug!(?position, %error, "rejected position");
                Err(error)
            }
        }
    }

    /// Returns the position of the node at `ptr`; None if it is one of the sentinels.
    fn make_position(&self, ptr: NodePtr) -> Option<Position<T>> {
        match self.storage.is_sentinel(ptr) {
            true => None,
            false => Some(self.position_of(ptr)),
        }
    }

    pub(crate) fn position_of(&self, ptr: NodePtr) -> Position<T> {
        Position::new(self.id, ptr, self.storage.node(ptr).generation())
    }

    fn insert_between(&mut self, element: T, predecessor: NodePtr, successor: NodePtr) -> Position<T> {
        let ptr = self.storage.insert_between(element, predecessor, successor);
        self.position_of(ptr)
    }

    fn node_ptrs(&self) -> NodePtrs<'_, T, M> {
        let front = self.storage.node(self.storage.header()).next();
        let back = self.storage.node(self.storage.trailer()).prev();
        match (front, back) {
            (Some(front), Some(back)) => NodePtrs::new(&self.storage, front, back, self.len()),
            _ => NodePtrs::empty(&self.storage),
        }
    }
}
