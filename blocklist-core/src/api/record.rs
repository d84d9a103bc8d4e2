//! The requirements placed on the records stored in the list.

use core::fmt;

/// BlockRecord
///
/// A record describing one region of a tracked address space.
///
/// The list never interprets the content of a record: it only stores records, compares them by value, and renders
/// them. Hence the only requirements are value equality and a textual form.
///
/// The trait is implemented for any type meeting those requirements.
pub trait BlockRecord: PartialEq + fmt::Display {}

impl<T> BlockRecord for T
    where
        T: PartialEq + fmt::Display + ?Sized
{}

// mod tests
