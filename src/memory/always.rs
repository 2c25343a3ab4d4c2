use super::{MemoryPolicy, Utilization};

/// Memory policy which reopens the slot of a closed node on the very next insertion.
///
/// The storage never holds more slots than the peak length of the list, which makes this the
/// default policy of the [`PositionalList`].
///
/// [`PositionalList`]: crate::PositionalList
#[derive(Default, Clone, Copy, Debug)]
pub struct MemoryReclaimAlways;

impl MemoryPolicy for MemoryReclaimAlways {
    #[inline(always)]
    fn reuse_closed(_utilization: &Utilization) -> bool {
        true
    }
}
