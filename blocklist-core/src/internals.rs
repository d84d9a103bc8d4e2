//! The internals of blocklist-core.
//!
//! The internals provide all the heavy-lifting.

mod cursor;
mod list;
mod node;

pub use cursor::Cursor;
pub use list::OrderedList;
pub use node::{Node, NodeId};

pub(crate) use node::NodePtr;
