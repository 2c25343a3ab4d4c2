use super::Utilization;

/// Policy which determines whether the slot of a deleted, or closed, node is handed out again
/// to a later insertion.
///
/// Assume that **A** below stands for active nodes and **x** designates a closed node.
/// If the underlying storage has the following layout at a certain stage:
/// * `[ x, A, A, x, A ]`
///
/// an insertion either reopens one of the closed slots or pushes a new one:
/// * reuse: `[ A, A, A, x, A ]`
/// * no reuse: `[ x, A, A, x, A, A ]`
///
/// Nodes never move; therefore, no policy can invalidate a position whose node is still in the list.
/// A reopened slot is stamped with a new generation, so positions of its former occupant remain invalid.
///
/// Three implementors are provided:
/// * [`MemoryReclaimAlways`] reopens closed slots whenever there is one; this is the default.
/// * [`MemoryReclaimNever`] never reopens closed slots; the storage only grows.
/// * [`MemoryReclaimOnThreshold::<D>`] reopens closed slots only once they exceed a fraction of the used slots.
///
/// [`MemoryReclaimAlways`]: crate::MemoryReclaimAlways
/// [`MemoryReclaimNever`]: crate::MemoryReclaimNever
/// [`MemoryReclaimOnThreshold::<D>`]: crate::MemoryReclaimOnThreshold
pub trait MemoryPolicy: Clone + Default {
    /// Returns whether or not a closed slot should be reopened for the next insertion,
    /// given the current `utilization` of the storage.
    ///
    /// This method is only called when there exists at least one closed slot.
    fn reuse_closed(utilization: &Utilization) -> bool;
}
