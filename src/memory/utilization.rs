/// Node utilization of the underlying storage of the positional list.
///
/// The result contains the following bits of information:
/// * `capacity`: number of slots that is already allocated.
/// * `num_active_nodes`: number of active nodes holding an element.
/// * `num_closed_nodes`: number of nodes which had been opened and closed afterwards; however, not yet reopened.
///
/// The two sentinel nodes of the list are counted in neither `num_active_nodes` nor `num_closed_nodes`.
/// Therefore, `num_active_nodes + num_closed_nodes + 2` reflects the length of the underlying pinned vector,
/// which is less than or equal to the `capacity`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Utilization {
    /// Number of slots that is already allocated.
    pub capacity: usize,
    /// Number of active nodes holding an element.
    pub num_active_nodes: usize,
    /// Number of nodes which had been opened and closed afterwards; however, not yet reopened.
    pub num_closed_nodes: usize,
}
