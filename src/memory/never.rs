use super::{MemoryPolicy, Utilization};

/// A do-nothing `MemoryPolicy` which never reopens the slots of closed nodes, leaving them as holes in the underlying storage.
///
/// Every node of the list's lifetime keeps its own slot; the storage grows with the number of insertions
/// rather than with the length of the list.
#[derive(Default, Clone, Copy, Debug)]
pub struct MemoryReclaimNever;

impl MemoryPolicy for MemoryReclaimNever {
    #[inline(always)]
    fn reuse_closed(_utilization: &Utilization) -> bool {
        false
    }
}
