//! Errors reported by the list and its cursor.

use core::convert::TryFrom;

use thiserror::Error;

use crate::NodeId;

/// Error
///
/// The failures of the list operations.
///
/// None of them is transient: retrying the same operation on the same list yields the same error.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// The index lies outside of the range permitted by the operation.
    ///
    /// An `index` of -1 denotes a lookup-by-value which found no matching record.
    #[error("index {index} is out of range for a list of {size} blocks")]
    OutOfRange {
        /// The offending index.
        index: isize,
        /// The size of the list at the time of the operation.
        size: usize,
    },
    /// The operation required a node, and none was provided.
    #[error("no node to operate on")]
    NullReference,
    /// The node is not part of this list.
    #[error("node {0} is not part of this list")]
    ForeignNode(NodeId),
    /// The cursor was advanced past the last node.
    #[error("cursor advanced past the last node")]
    EndOfSequence,
    /// The size of the list and the length of its chain of nodes disagree.
    #[error("list holds {expected} blocks, yet its chain links {actual} nodes")]
    InternalInconsistency {
        /// The size recorded by the list.
        expected: usize,
        /// The number of nodes actually reachable from the head.
        actual: usize,
    },
    /// The tail of the list is not the last node of its chain.
    #[error("the tail of the list is not the last node of its chain")]
    MisplacedTail,
}

impl Error {
    /// Creates an `OutOfRange` error.
    pub(crate) fn out_of_range(index: usize, size: usize) -> Self {
        let index = isize::try_from(index).unwrap_or(isize::MAX);

        Error::OutOfRange { index, size }
    }

    /// Creates the `OutOfRange` error of a lookup-by-value which found nothing.
    pub(crate) fn not_found(size: usize) -> Self { Error::OutOfRange { index: -1, size } }
}

// mod tests
