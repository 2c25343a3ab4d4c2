mod always;
mod generation;
mod never;
mod on_threshold;
mod policy;
mod utilization;

pub use always::MemoryReclaimAlways;
pub(crate) use generation::Generation;
pub use never::MemoryReclaimNever;
pub use on_threshold::MemoryReclaimOnThreshold;
pub use policy::MemoryPolicy;
pub use utilization::Utilization;
