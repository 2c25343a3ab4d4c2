use crate::{PositionalList, memory::MemoryPolicy};

impl<T, M> PositionalList<T, M>
where
    M: MemoryPolicy,
{
    /// Converts the list into a list with the same elements but a different memory policy `M2`.
    ///
    /// The nodes are not touched; hence, all positions of this list remain valid for the converted list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_positional_list::*;
    ///
    /// let mut list = PositionalList::new();
    /// let a = list.add_last('a');
    /// let b = list.add_last('b');
    /// _ = list.delete(a);
    ///
    /// let mut list: PositionalList<_, MemoryReclaimNever> = list.into_memory_policy();
    /// assert_eq!(list.element(b), Ok(&'b'));
    ///
    /// let c = list.add_first('c');
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), ['c', 'b']);
    /// assert_eq!(list.utilization().num_closed_nodes, 1);
    /// assert_eq!(list.element(c), Ok(&'c'));
    /// ```
    pub fn into_memory_policy<M2>(self) -> PositionalList<T, M2>
    where
        M2: MemoryPolicy,
    {
        let (storage, id) = self.into_inner();
        PositionalList::from_raw_parts(storage.into_memory_policy(), id)
    }
}
