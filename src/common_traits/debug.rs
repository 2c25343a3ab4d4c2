use crate::{PositionalList, memory::MemoryPolicy};
use core::fmt::Debug;

impl<T, M> Debug for PositionalList<T, M>
where
    T: Debug,
    M: MemoryPolicy,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{format, string::String};

    #[test]
    fn debug_list() {
        let mut list = PositionalList::new();
        let a = list.add_last(String::from("a"));
        list.add_last(String::from("b"));

        let debug_str = format!("{:?}", list);
        assert_eq!(debug_str, "[\"a\", \"b\"]");

        _ = list.delete(a);

        let debug_str = format!("{:?}", list);
        assert_eq!(debug_str, "[\"b\"]");

        list.clear();
        assert_eq!(format!("{:?}", list), "[]");
    }
}
