//! A reference model of the list.

use std::{convert::TryFrom, marker::PhantomData};

use blocklist_core::{BlockRecord, Configuration, Error, OrderedList};

/// Model is a trivially correct, `Vec`-backed, rendition of `OrderedList`.
///
/// It mirrors the results, including the errors, of the operations of `OrderedList` under the same Configuration.
pub struct Model<B, C> {
    blocks: Vec<B>,
    _configuration: PhantomData<fn() -> C>,
}

impl<B, C> Model<B, C>
    where
        B: BlockRecord,
        C: Configuration,
{
    /// Creates an empty instance.
    pub fn new() -> Self { Self { blocks: vec!(), _configuration: PhantomData } }

    /// Returns the blocks, in order.
    pub fn blocks(&self) -> &[B] { &self.blocks }

    /// Returns the number of blocks.
    pub fn len(&self) -> usize { self.blocks.len() }

    /// Returns whether the model is empty.
    pub fn is_empty(&self) -> bool { self.blocks.is_empty() }

    /// Prepends a block.
    pub fn add_first(&mut self, block: B) { self.blocks.insert(0, block); }

    /// Appends a block.
    pub fn add_last(&mut self, block: B) { self.blocks.push(block); }

    /// Inserts a block at `index`.
    pub fn insert_at(&mut self, index: usize, block: B) -> Result<(), Error> {
        if index > self.len() {
            return if C::REJECT_OUT_OF_RANGE_INSERT { Err(self.out_of_range(index)) } else { Ok(()) };
        }

        self.blocks.insert(index, block);

        Ok(())
    }

    /// Returns the block at `index`.
    pub fn block_at(&self, index: usize) -> Result<&B, Error> {
        self.check_index(index)?;

        self.blocks.get(index).ok_or(Error::NullReference)
    }

    /// Returns the index of the first block equal to `block`, if any.
    pub fn index_of(&self, block: &B) -> Option<usize> { self.blocks.iter().position(|candidate| candidate == block) }

    /// Removes the first block.
    pub fn pop_first(&mut self) -> Option<B> {
        if self.is_empty() {
            None
        } else {
            Some(self.blocks.remove(0))
        }
    }

    /// Removes the block at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<B, Error> {
        self.check_index(index)?;

        if index == self.len() {
            return Err(Error::NullReference);
        }

        Ok(self.blocks.remove(index))
    }

    /// Removes the first block equal to `block`.
    pub fn remove_by_value(&mut self, block: &B) -> Result<B, Error> {
        let size = self.len();

        let index = self.index_of(block).ok_or(Error::OutOfRange { index: -1, size })?;

        self.remove_at(index)
    }

    /// Asserts that `list` holds the same blocks as the model.
    ///
    /// #   Panics
    ///
    /// -   If the blocks differ, or the list is internally inconsistent.
    pub fn assert_matches(&self, list: &OrderedList<B, C>)
        where
            B: std::fmt::Debug,
    {
        assert_eq!(Ok(()), list.check_consistency());
        assert_eq!(self.len(), list.len());
        assert_eq!(self.blocks.iter().collect::<Vec<_>>(), list.iter().collect::<Vec<_>>());
        assert_eq!(self.blocks.first(), list.first().map(|node| node.block()));
        assert_eq!(self.blocks.last(), list.last().map(|node| node.block()));
    }

    fn check_index(&self, index: usize) -> Result<(), Error> {
        let size = self.len();
        let within = index < size || (C::INCLUSIVE_UPPER_BOUND && index == size);

        if size == 0 || !within {
            return Err(self.out_of_range(index));
        }

        Ok(())
    }

    //  Indices beyond `isize::MAX` saturate, as they do in the list.
    fn out_of_range(&self, index: usize) -> Error {
        let index = isize::try_from(index).unwrap_or(isize::MAX);

        Error::OutOfRange { index, size: self.len() }
    }
}

impl<B, C> Default for Model<B, C>
    where
        B: BlockRecord,
        C: Configuration,
{
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {

use blocklist_core::{CompatibleConfiguration, StrictConfiguration};

use super::*;

#[test]
fn model_strict() {
    let mut model = Model::<u32, StrictConfiguration>::new();

    assert_eq!(Err(Error::OutOfRange { index: 1, size: 0 }), model.insert_at(1, 1));
    assert_eq!(Ok(()), model.insert_at(0, 1));
    model.add_first(0);
    model.add_last(2);

    assert_eq!(&[0, 1, 2], model.blocks());
    assert_eq!(Err(Error::OutOfRange { index: 3, size: 3 }), model.block_at(3));
    assert_eq!(Err(Error::OutOfRange { index: -1, size: 3 }), model.remove_by_value(&7));
    assert_eq!(Ok(1), model.remove_by_value(&1));
    assert_eq!(Some(0), model.pop_first());
}

#[test]
fn model_compatible() {
    let mut model = Model::<u32, CompatibleConfiguration>::default();

    assert_eq!(Ok(()), model.insert_at(1, 1));
    assert!(model.is_empty());

    model.add_last(1);

    assert_eq!(Err(Error::NullReference), model.block_at(1));
    assert_eq!(Err(Error::NullReference), model.remove_at(1));
    assert_eq!(Err(Error::OutOfRange { index: 2, size: 1 }), model.remove_at(2));
}

#[test]
fn model_huge_index() {
    let mut model = Model::<u32, StrictConfiguration>::new();
    let mut list = OrderedList::<u32, StrictConfiguration>::new();

    model.add_last(1);
    list.add_last(1);

    let expected = Error::OutOfRange { index: isize::MAX, size: 1 };

    assert_eq!(Err(expected), model.block_at(usize::MAX));
    assert_eq!(list.block_at(usize::MAX), model.block_at(usize::MAX));
    assert_eq!(list.insert_at(usize::MAX, 2), model.insert_at(usize::MAX, 2));
    assert_eq!(list.remove_at(usize::MAX), model.remove_at(usize::MAX));

    model.assert_matches(&list);
}

} // mod tests
