mod node_ptr;
mod position;
mod position_error;

pub(crate) use node_ptr::NodePtr;
pub(crate) use position::ListId;
pub use position::Position;
pub use position_error::PositionError;
