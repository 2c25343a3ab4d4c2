use crate::{PositionalList, memory::MemoryPolicy};

impl<T, M> FromIterator<T> for PositionalList<T, M>
where
    M: MemoryPolicy,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::default();
        list.extend(iter);
        list
    }
}

impl<T, M> Extend<T> for PositionalList<T, M>
where
    M: MemoryPolicy,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add_last(element);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryReclaimNever;
    use alloc::{string::ToString, vec, vec::Vec};

    #[test]
    fn from_iter() {
        let vec = vec![0, 1, 2, 3, 4, 5];
        let iter = vec.into_iter().map(|x| x.to_string());
        let list: PositionalList<_, MemoryReclaimNever> = iter.collect();

        assert_eq!(6, list.len());
        assert_eq!(6, list.utilization().num_active_nodes);
        assert_eq!(0, list.utilization().num_closed_nodes);

        for (i, position) in list.positions().enumerate() {
            assert_eq!(list.element(position), Ok(&i.to_string()));
        }
    }

    #[test]
    fn extend() {
        let mut list: PositionalList<_> = [1, 2].into_iter().collect();
        list.extend([3, 4]);
        list.extend(Vec::new());

        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
    }
}
