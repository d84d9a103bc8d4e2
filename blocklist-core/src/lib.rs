#![no_std]

#![deny(missing_docs)]

//! Building blocks for tracking the regions of an address space.
//!
//! blocklist-core provides an ordered, singly-linked list of block records, intended as the bookkeeping layer beneath
//! a first-fit or best-fit allocator. It contains:
//! -   A capability trait, `BlockRecord`, describing what the list requires of the records it stores.
//! -   A configuration trait, selecting how the list treats the boundaries of its index space.
//! -   The list itself, `OrderedList`, with O(1) access to both ends, and its forward-only `Cursor`.

extern crate alloc;

mod api;
mod internals;

pub use api::*;
pub use internals::{Cursor, Node, NodeId, OrderedList};
