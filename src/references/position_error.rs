use core::fmt::Display;

/// Error cases of an invalid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionError {
    /// OtherList => Position is used on a list different than the list it is created by.
    /// Positions can only be used with the list they belong to.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_positional_list::*;
    ///
    /// let mut list1 = PositionalList::new();
    /// let a = list1.add_last('a');
    ///
    /// let list2 = PositionalList::<char>::new();
    ///
    /// assert_eq!(list1.invalidity_reason(a), None);
    /// assert_eq!(list2.invalidity_reason(a), Some(PositionError::OtherList));
    /// ```
    OtherList,
    /// RemovedNode => Referenced node is removed from the list.
    /// A position can only be used while the corresponding node still belongs to the list.
    /// This is the case after:
    /// * the element at the position is deleted, popped or merged into another list,
    /// * the list is cleared.
    ///
    /// Note that the slot of a removed node might later be reused by a new element;
    /// the old position still refers to the removed node and never to its successor in the slot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_positional_list::*;
    ///
    /// let mut list = PositionalList::new();
    /// let a = list.add_last('a');
    /// let b = list.add_last('b');
    ///
    /// assert_eq!(list.delete(b), Ok('b'));
    ///
    /// assert_eq!(list.invalidity_reason(a), None);
    /// assert_eq!(list.invalidity_reason(b), Some(PositionError::RemovedNode));
    /// assert_eq!(list.element(b), Err(PositionError::RemovedNode));
    /// ```
    RemovedNode,
}

impl Display for PositionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OtherList => f.write_str("position does not belong to this list"),
            Self::RemovedNode => f.write_str("position is no longer valid"),
        }
    }
}

impl core::error::Error for PositionError {}
