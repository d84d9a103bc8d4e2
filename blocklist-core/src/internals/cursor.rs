//! A forward-only Cursor over the nodes of a list.

use core::iter::FusedIterator;

use crate::Error;

use super::Node;

/// Cursor
///
/// A stateful, single-pass cursor over the nodes of an `OrderedList`, starting at its head.
///
/// The Cursor borrows the list, hence the list cannot be mutated while a Cursor is alive. A Cursor cannot be rewound;
/// ask the list for a fresh one instead.
pub struct Cursor<'a, B> {
    current: Option<&'a Node<B>>,
    remaining: usize,
}

impl<'a, B> Cursor<'a, B> {
    /// Creates an instance positioned at `head`, with `remaining` nodes left to visit.
    pub(crate) fn new(head: Option<&'a Node<B>>, remaining: usize) -> Self { Self { current: head, remaining } }

    /// Returns whether a current node exists, that is whether `advance` will succeed.
    pub fn has_next(&self) -> bool { self.current.is_some() }

    /// Returns the current node, if any.
    pub fn current(&self) -> Option<&'a Node<B>> { self.current }

    /// Returns the block of the current node, and moves onto the next node.
    ///
    /// #   Errors
    ///
    /// Returns `EndOfSequence` if the cursor is already past the last node.
    pub fn advance(&mut self) -> Result<&'a B, Error> {
        let node = self.current.ok_or(Error::EndOfSequence)?;

        self.current = node.next();
        self.remaining = self.remaining.saturating_sub(1);

        Ok(node.block())
    }
}

impl<'a, B> Clone for Cursor<'a, B> {
    fn clone(&self) -> Self { Self { current: self.current, remaining: self.remaining } }
}

impl<'a, B> Iterator for Cursor<'a, B> {
    type Item = &'a B;

    fn next(&mut self) -> Option<Self::Item> { self.advance().ok() }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.current.is_none() {
            (0, Some(0))
        } else {
            (self.remaining, Some(self.remaining))
        }
    }
}

impl<'a, B> FusedIterator for Cursor<'a, B> {}

#[cfg(test)]
mod tests {

use alloc::vec::Vec;

use crate::{OrderedList, StrictConfiguration};

use super::*;
use super::super::test::list_of;

fn numbers(blocks: &[u32]) -> OrderedList<u32> { list_of::<u32, StrictConfiguration>(blocks) }

#[test]
fn cursor_empty() {
    let mut cursor = Cursor::<u32>::new(None, 0);

    assert!(!cursor.has_next());
    assert!(cursor.current().is_none());
    assert_eq!(Err(Error::EndOfSequence), cursor.advance());
    assert_eq!((0, Some(0)), cursor.size_hint());
}

#[test]
fn cursor_advance() {
    let list = numbers(&[1, 2, 3]);
    let mut cursor = Cursor::new(list.first(), list.len());

    assert_eq!(Some(&1), cursor.current().map(Node::block));

    assert_eq!(Ok(&1), cursor.advance());
    assert_eq!(Ok(&2), cursor.advance());

    assert!(cursor.has_next());
    assert_eq!(Some(&3), cursor.current().map(Node::block));

    assert_eq!(Ok(&3), cursor.advance());

    assert!(!cursor.has_next());
    assert_eq!(Err(Error::EndOfSequence), cursor.advance());
    assert_eq!(Err(Error::EndOfSequence), cursor.advance());
}

#[test]
fn cursor_iterator() {
    let list = numbers(&[4, 5, 6]);
    let cursor = Cursor::new(list.first(), list.len());

    assert_eq!((3, Some(3)), cursor.size_hint());

    let fork = cursor.clone();

    assert_eq!(alloc::vec![&4, &5, &6], cursor.collect::<Vec<_>>());
    assert_eq!(15, fork.copied().sum::<u32>());
}

} // mod tests
