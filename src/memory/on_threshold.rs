use super::{MemoryPolicy, Utilization};

/// Memory policy which reopens closed slots only when the node utilization falls below a certain threshold.
///
/// Specifically, closed slots are reused whenever the ratio of closed nodes to all used slots exceeds one over `2^D`.
/// * when `D = 0`: closed slots are never reused (equivalent to never).
/// * when `D = 1`: closed slots are reused when utilization is below 50.00%.
/// * when `D = 2`: closed slots are reused when utilization is below 75.00%.
/// * when `D = 3`: closed slots are reused when utilization is below 87.50%.
/// * when `D = 4`: closed slots are reused when utilization is below 93.75%.
#[derive(Default, Clone, Copy, Debug)]
pub struct MemoryReclaimOnThreshold<const D: usize>;

impl<const D: usize> MemoryPolicy for MemoryReclaimOnThreshold<D> {
    fn reuse_closed(utilization: &Utilization) -> bool {
        let used = utilization.num_active_nodes + utilization.num_closed_nodes;
        let allowed_vacant = used.checked_shr(D as u32).unwrap_or(0);
        utilization.num_closed_nodes > allowed_vacant
    }
}
