use crate::{
    PositionalList,
    linked_storage::LinkedStorage,
    memory::MemoryPolicy,
    references::{NodePtr, Position},
};
use core::iter::FusedIterator;

/// Walks the node pointers between the sentinels, from both ends, `len` steps in total.
pub(crate) struct NodePtrs<'a, T, M>
where
    M: MemoryPolicy,
{
    storage: &'a LinkedStorage<T, M>,
    front: NodePtr,
    back: NodePtr,
    len: usize,
}

impl<T, M: MemoryPolicy> Clone for NodePtrs<'_, T, M> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage,
            front: self.front,
            back: self.back,
            len: self.len,
        }
    }
}

impl<'a, T, M> NodePtrs<'a, T, M>
where
    M: MemoryPolicy,
{
    pub(crate) fn new(
        storage: &'a LinkedStorage<T, M>,
        front: NodePtr,
        back: NodePtr,
        len: usize,
    ) -> Self {
        Self {
            storage,
            front,
            back,
            len,
        }
    }

    pub(crate) fn empty(storage: &'a LinkedStorage<T, M>) -> Self {
        Self::new(storage, storage.trailer(), storage.header(), 0)
    }
}

impl<T, M> Iterator for NodePtrs<'_, T, M>
where
    M: MemoryPolicy,
{
    type Item = NodePtr;

    fn next(&mut self) -> Option<Self::Item> {
        match self.len {
            0 => None,
            _ => {
                let current = self.front;
                self.len -= 1;
                if let Some(next) = self.storage.node(current).next() {
                    self.front = next;
                }
                Some(current)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T, M> DoubleEndedIterator for NodePtrs<'_, T, M>
where
    M: MemoryPolicy,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        match self.len {
            0 => None,
            _ => {
                let current = self.back;
                self.len -= 1;
                if let Some(prev) = self.storage.node(current).prev() {
                    self.back = prev;
                }
                Some(current)
            }
        }
    }
}

// iter

/// Iterator over references to the elements of a [`PositionalList`] from the first to the last.
///
/// Created by [`PositionalList::iter`].
pub struct Iter<'a, T, M>
where
    M: MemoryPolicy,
{
    ptrs: NodePtrs<'a, T, M>,
}

impl<T, M: MemoryPolicy> Clone for Iter<'_, T, M> {
    fn clone(&self) -> Self {
        Self {
            ptrs: self.ptrs.clone(),
        }
    }
}

impl<'a, T, M> Iter<'a, T, M>
where
    M: MemoryPolicy,
{
    pub(crate) fn new(ptrs: NodePtrs<'a, T, M>) -> Self {
        Self { ptrs }
    }
}

impl<'a, T, M> Iterator for Iter<'a, T, M>
where
    M: MemoryPolicy,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let storage = self.ptrs.storage;
        self.ptrs.next().and_then(|ptr| storage.node(ptr).data())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ptrs.size_hint()
    }
}

impl<T, M> DoubleEndedIterator for Iter<'_, T, M>
where
    M: MemoryPolicy,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let storage = self.ptrs.storage;
        self.ptrs.next_back().and_then(|ptr| storage.node(ptr).data())
    }
}

impl<T, M: MemoryPolicy> ExactSizeIterator for Iter<'_, T, M> {}

impl<T, M: MemoryPolicy> FusedIterator for Iter<'_, T, M> {}

// positions

/// Iterator over the positions of the elements of a [`PositionalList`] from the first to the last.
///
/// Created by [`PositionalList::positions`].
pub struct Positions<'a, T, M>
where
    M: MemoryPolicy,
{
    list: &'a PositionalList<T, M>,
    ptrs: NodePtrs<'a, T, M>,
}

impl<'a, T, M> Positions<'a, T, M>
where
    M: MemoryPolicy,
{
    pub(crate) fn new(list: &'a PositionalList<T, M>, ptrs: NodePtrs<'a, T, M>) -> Self {
        Self { list, ptrs }
    }
}

impl<T, M> Iterator for Positions<'_, T, M>
where
    M: MemoryPolicy,
{
    type Item = Position<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.ptrs.next().map(|ptr| self.list.position_of(ptr))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ptrs.size_hint()
    }
}

impl<T, M> DoubleEndedIterator for Positions<'_, T, M>
where
    M: MemoryPolicy,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.ptrs.next_back().map(|ptr| self.list.position_of(ptr))
    }
}

impl<T, M: MemoryPolicy> ExactSizeIterator for Positions<'_, T, M> {}

impl<T, M: MemoryPolicy> FusedIterator for Positions<'_, T, M> {}

// into-iter

/// Owning iterator draining the elements of a [`PositionalList`] from the first to the last.
///
/// Created by the `into_iter` method of the list.
pub struct IntoIter<T, M>
where
    M: MemoryPolicy,
{
    list: PositionalList<T, M>,
}

impl<T, M> Iterator for IntoIter<T, M>
where
    M: MemoryPolicy,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T, M> DoubleEndedIterator for IntoIter<T, M>
where
    M: MemoryPolicy,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_last()
    }
}

impl<T, M: MemoryPolicy> ExactSizeIterator for IntoIter<T, M> {}

impl<T, M: MemoryPolicy> FusedIterator for IntoIter<T, M> {}

impl<T, M> IntoIterator for PositionalList<T, M>
where
    M: MemoryPolicy,
{
    type Item = T;

    type IntoIter = IntoIter<T, M>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T, M> IntoIterator for &'a PositionalList<T, M>
where
    M: MemoryPolicy,
{
    type Item = &'a T;

    type IntoIter = Iter<'a, T, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
