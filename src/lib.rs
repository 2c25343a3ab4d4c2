#![doc = include_str!("../README.md")]
#![warn(
    missing_docs,
    clippy::unwrap_in_result,
    clippy::unwrap_used,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::float_cmp,
    clippy::float_cmp_const,
    clippy::missing_panics_doc,
    clippy::todo
)]
#![no_std]
extern crate alloc;

mod common_traits;
mod iter;
mod linked_storage;
mod memory;
mod merge;
mod node;
mod positional_list;
mod references;

pub use iter::{IntoIter, Iter, Positions};
pub use memory::{
    MemoryPolicy, MemoryReclaimAlways, MemoryReclaimNever, MemoryReclaimOnThreshold, Utilization,
};
pub use positional_list::PositionalList;
pub use references::{Position, PositionError};
