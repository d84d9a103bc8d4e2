#![no_std]
#![deny(missing_docs)]

//! An ordered list of memory blocks.
//!
//! The type `BlockList` tracks the regions of a simulated address space, as `MemoryBlock` records, in the order
//! chosen by the caller; for example by base address, as a first-fit allocator would keep its free list.
//!
//! #   Warning
//!
//! The list performs no arithmetic on the blocks: it neither merges adjacent blocks, nor checks for overlaps. This is
//! left to the allocator policy built on top.

mod block;

pub use block::MemoryBlock;

pub use blocklist_core::{
    BlockRecord, CompatibleConfiguration, Configuration, Cursor, Error, Node, NodeId, OrderedList,
    StrictConfiguration,
};

/// A list of memory blocks, with the configuration of choice.
pub type BlockList<C = StrictConfiguration> = OrderedList<MemoryBlock, C>;
