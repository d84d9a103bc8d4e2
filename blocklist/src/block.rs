//! Memory Block

use core::fmt;

/// MemoryBlock
///
/// A contiguous region of the simulated address space, starting at `base_address` and spanning `length` units.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct MemoryBlock {
    base_address: usize,
    length: usize,
}

impl MemoryBlock {
    /// Creates an instance.
    pub const fn new(base_address: usize, length: usize) -> Self { Self { base_address, length } }

    /// Returns the address at which the block starts.
    pub const fn base_address(&self) -> usize { self.base_address }

    /// Returns the length of the block.
    pub const fn length(&self) -> usize { self.length }
}

impl fmt::Display for MemoryBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} , {})", self.base_address, self.length)
    }
}

// mod tests
