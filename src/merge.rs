use crate::{
    PositionalList,
    memory::MemoryPolicy,
    references::{Position, PositionError},
};
use tracing::trace;

impl<T, M> PositionalList<T, M>
where
    M: MemoryPolicy,
{
    /// Merges the ascending `other` list into this ascending list.
    ///
    /// Afterwards, this list contains its previous elements together with all elements of `other`
    /// in ascending order, and `other` is empty.
    /// Elements are relocated from `other` one at a time; none of them is cloned.
    ///
    /// When an element of `other` is equal to an element of this list, the element of this list
    /// stays ahead; hence, the relative order of equal elements is: this list's first, then `other`'s.
    /// Elements which are not comparable, such as `f64::NAN`, are treated as not less.
    ///
    /// Positions of this list's elements remain valid; positions of `other`'s elements become invalid.
    ///
    /// Time complexity is O(n + m) where n and m are the lengths of the two lists.
    ///
    /// # Panics
    ///
    /// Does not panic: the positions used during the merge are read from the lists right before
    /// they are used, and hence, are always valid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_positional_list::*;
    ///
    /// let mut a: PositionalList<_> = [1, 3, 3, 5].into_iter().collect();
    /// let mut b: PositionalList<_> = [2, 3, 4].into_iter().collect();
    ///
    /// a.merge(&mut b);
    ///
    /// assert_eq!(a.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 3, 3, 4, 5]);
    /// assert!(b.is_empty());
    /// ```
    pub fn merge<M2>(&mut self, other: &mut PositionalList<T, M2>)
    where
        T: PartialOrd,
        M2: MemoryPolicy,
    {
        let num_other = other.len();
        let relocated = self
            .merge_from(other)
            .expect("positions read from a list are valid for that list");

        debug_assert_eq!(relocated, num_other);
        debug_assert!(other.is_empty());
        trace!(relocated, len = self.len(), "merged sorted lists");
    }

    /// Two-pointer merge walking positions: `i` walks this list, `j` is always the front of `other`.
    ///
    /// Returns the number of relocated elements.
    fn merge_from<M2>(&mut self, other: &mut PositionalList<T, M2>) -> Result<usize, PositionError>
    where
        T: PartialOrd,
        M2: MemoryPolicy,
    {
        let mut relocated = 0;
        let mut i: Option<Position<T>> = self.first();
        let mut j: Option<Position<T>> = other.first();

        while let Some(pj) = j {
            match i {
                Some(pi) => match other.element(pj)? < self.element(pi)? {
                    true => {
                        let element = other.delete(pj)?;
                        self.add_before(pi, element)?;
                        relocated += 1;
                        j = other.first();
                    }
                    false => i = self.after(pi)?,
                },
                None => {
                    let element = other.delete(pj)?;
                    self.add_last(element);
                    relocated += 1;
                    j = other.first();
                }
            }
        }

        Ok(relocated)
    }
}
