//! An ordered, singly-linked, list of block records.

use core::{
    fmt,
    iter::{self, FromIterator},
    marker::PhantomData,
    ptr::{self, NonNull},
};

use alloc::boxed::Box;

use log::{debug, error, trace};

use crate::{BlockRecord, Configuration, Error, StrictConfiguration};

use super::{Cursor, Node, NodeId, NodePtr};

/// OrderedList
///
/// A singly-linked list of block records, with O(1) access to both ends.
///
/// The list owns every node of its chain, from head to tail. Nodes are allocated individually and never move until
/// removed, hence both the links between nodes and the tail are plain pointers.
///
/// The boundary policies of the indexed operations are selected by the `Configuration`, see `StrictConfiguration`
/// (the default) and `CompatibleConfiguration`.
pub struct OrderedList<B, C = StrictConfiguration> {
    head: NodePtr<Node<B>>,
    tail: NodePtr<Node<B>>,
    size: usize,
    _owned: PhantomData<Box<Node<B>>>,
    _configuration: PhantomData<fn() -> C>,
}

impl<B> OrderedList<B, StrictConfiguration> {
    /// Creates an empty list, with the strict configuration.
    pub const fn new() -> Self { Self::with_configuration() }
}

impl<B, C> OrderedList<B, C> {
    /// Creates an empty list, with the configuration of choice.
    pub const fn with_configuration() -> Self {
        Self { head: NodePtr::null(), tail: NodePtr::null(), size: 0, _owned: PhantomData, _configuration: PhantomData }
    }

    /// Returns the number of blocks in the list.
    pub fn len(&self) -> usize { self.size }

    /// Returns whether the list is empty.
    pub fn is_empty(&self) -> bool { self.size == 0 }

    /// Returns the first node of the list, if any.
    pub fn first(&self) -> Option<&Node<B>> {
        //  Safety:
        //  -   `head` is a live node owned by `self`, which is borrowed for the lifetime of the result.
        self.head.get().map(|head| unsafe { &*head.as_ptr() })
    }

    /// Returns the last node of the list, if any.
    pub fn last(&self) -> Option<&Node<B>> {
        //  Safety:
        //  -   `tail` is a live node owned by `self`, which is borrowed for the lifetime of the result.
        self.tail.get().map(|tail| unsafe { &*tail.as_ptr() })
    }

    /// Returns a cursor positioned at the head of the list.
    ///
    /// Each call returns an independent cursor.
    pub fn cursor(&self) -> Cursor<'_, B> { Cursor::new(self.first(), self.size) }

    /// Returns an iterator over the blocks of the list, from head to tail.
    pub fn iter(&self) -> Cursor<'_, B> { self.cursor() }

    /// Prepends a block to the list, it becomes the first block.
    ///
    /// Returns the identity of the newly created node.
    pub fn add_first(&mut self, block: B) -> NodeId {
        let (node, id) = Node::allocate(block);

        //  Safety:
        //  -   `node` is freshly allocated, nothing else refers to it.
        unsafe { (*node.as_ptr()).next.set(self.head.get()) };

        self.head.set(Some(node));

        if self.tail.is_null() {
            self.tail.set(Some(node));
        }

        self.size += 1;

        trace!("Added node {} first, list holds {} blocks", id, self.size);

        id
    }

    /// Appends a block to the list, it becomes the last block.
    ///
    /// Returns the identity of the newly created node.
    pub fn add_last(&mut self, block: B) -> NodeId {
        let (node, id) = Node::allocate(block);

        match self.tail.get() {
            //  Safety:
            //  -   `tail` is a live node owned by `self`, which is borrowed mutably.
            Some(tail) => unsafe {
                debug_assert!((*tail.as_ptr()).next.is_null());

                (*tail.as_ptr()).next.set(Some(node));
            },
            None => self.head.set(Some(node)),
        }

        self.tail.set(Some(node));

        self.size += 1;

        trace!("Added node {} last, list holds {} blocks", id, self.size);

        id
    }

    /// Removes the first block of the list, if any.
    pub fn pop_first(&mut self) -> Option<B> {
        let head = self.head.get()?;

        //  Safety:
        //  -   `head` is a live node owned by `self`, which is borrowed mutably.
        let (id, next) = unsafe { ((*head.as_ptr()).id(), (*head.as_ptr()).next.replace_with_null()) };

        self.head.set(next);

        if next.is_none() {
            self.tail.replace_with_null();
        }

        self.size -= 1;

        trace!("Removed node {} first, list holds {} blocks", id, self.size);

        //  Safety:
        //  -   `head` was allocated by this list, and is now unlinked from it.
        Some(unsafe { Node::deallocate(head) })
    }

    /// Removes all blocks from the list.
    pub fn clear(&mut self) {
        let mut next = self.head.replace_with_null();

        self.tail.replace_with_null();
        self.size = 0;

        //  Free the nodes one at a time, following the chain rather than `size`.
        while let Some(node) = next {
            //  Safety:
            //  -   `node` was allocated by this list, and is only reachable from its predecessor, already freed.
            unsafe {
                next = (*node.as_ptr()).next.replace_with_null();

                Node::deallocate(node);
            }
        }
    }

    /// Checks that the size, the chain of nodes, and the tail agree.
    ///
    /// #   Errors
    ///
    /// -   `InternalInconsistency` if the chain does not hold exactly `len()` nodes.
    /// -   `MisplacedTail` if the tail is not the last node of the chain.
    pub fn check_consistency(&self) -> Result<(), Error> {
        let actual = self.chain().count();

        if actual != self.size {
            return Err(Error::InternalInconsistency { expected: self.size, actual });
        }

        if self.chain().last().map(NonNull::from) != self.tail.get() {
            return Err(Error::MisplacedTail);
        }

        Ok(())
    }

    //  Returns an iterator over the nodes actually linked, irrespective of `size`.
    fn chain(&self) -> impl Iterator<Item = &Node<B>> + '_ { iter::successors(self.first(), |node| node.next()) }

    //  Returns a pointer to the node at `index`, walking the chain.
    //
    //  The pointer is derived from the links, not from a shared reference, hence may be written through.
    fn node_ptr_at(&mut self, index: usize) -> Option<NonNull<Node<B>>> {
        let mut current = self.head.get();

        for _ in 0..index {
            //  Safety:
            //  -   `current` is a live node owned by `self`, which is borrowed mutably.
            current = unsafe { (*current?.as_ptr()).next.get() };
        }

        current
    }

    fn inconsistency(&self) -> Error {
        let error = Error::InternalInconsistency { expected: self.size, actual: self.chain().count() };

        error!("{}", error);

        error
    }
}

impl<B, C> OrderedList<B, C>
    where
        C: Configuration
{
    /// Returns the node at `index`.
    ///
    /// #   Errors
    ///
    /// -   `OutOfRange` if the list is empty, or `index` is past the permitted upper bound.
    /// -   `NullReference` if `index == len()` and the configuration accepts it, as there is no node there.
    pub fn node_at(&self, index: usize) -> Result<&Node<B>, Error> {
        self.check_index(index)?;

        let mut cursor = self.cursor();

        for _ in 0..index {
            cursor.advance()?;
        }

        cursor.current().ok_or(Error::NullReference)
    }

    /// Returns the block at `index`.
    ///
    /// #   Errors
    ///
    /// Fails as `node_at` does.
    pub fn block_at(&self, index: usize) -> Result<&B, Error> { self.node_at(index).map(Node::block) }

    /// Inserts a block at `index`; the blocks at and after `index` are shifted by one.
    ///
    /// Inserting at either end is O(1), otherwise the insertion walks the list up to `index`.
    ///
    /// #   Errors
    ///
    /// Returns `OutOfRange` if `index > len()` and the configuration rejects such insertions; otherwise such an
    /// insertion is silently dropped.
    pub fn insert_at(&mut self, index: usize, block: B) -> Result<(), Error> {
        if index > self.size {
            if C::REJECT_OUT_OF_RANGE_INSERT {
                return Err(Error::out_of_range(index, self.size));
            }

            debug!("Dropped insertion at {} past the end of a list of {} blocks", index, self.size);

            return Ok(());
        }

        if index == 0 {
            self.add_first(block);
            return Ok(());
        }

        if index == self.size {
            self.add_last(block);
            return Ok(());
        }

        let previous = match self.node_ptr_at(index - 1) {
            Some(previous) => previous,
            None => return Err(self.inconsistency()),
        };

        let (node, id) = Node::allocate(block);

        //  Safety:
        //  -   `previous` is a live node owned by `self`, which is borrowed mutably.
        //  -   `node` is freshly allocated, nothing else refers to it.
        //  -   `index < size`, hence `previous` is not the tail and the tail is unaffected.
        unsafe {
            (*node.as_ptr()).next.set((*previous.as_ptr()).next.get());
            (*previous.as_ptr()).next.set(Some(node));
        }

        self.size += 1;

        trace!("Inserted node {} at {}, list holds {} blocks", id, index, self.size);

        Ok(())
    }

    /// Removes the node identified by `node` from the list, and returns its block.
    ///
    /// Removing the first node is O(1), otherwise the removal walks the list up to the node.
    ///
    /// #   Errors
    ///
    /// -   `NullReference` if `node` is None.
    /// -   `ForeignNode` if no node of this list bears this identity; the list is left untouched.
    pub fn remove_node(&mut self, node: Option<NodeId>) -> Result<B, Error> {
        let id = node.ok_or(Error::NullReference)?;

        if self.first().map(Node::id) == Some(id) {
            return self.pop_first().ok_or_else(|| foreign(id));
        }

        let mut previous = self.head.get().ok_or_else(|| foreign(id))?;

        //  Safety:
        //  -   `previous`, and all nodes linked from it, are live nodes owned by `self`, which is borrowed mutably.
        let removed = unsafe {
            loop {
                let next = (*previous.as_ptr()).next.get().ok_or_else(|| foreign(id))?;

                if (*next.as_ptr()).id() == id {
                    break next;
                }

                previous = next;
            }
        };

        //  Safety:
        //  -   `previous` and `removed` are live nodes owned by `self`, which is borrowed mutably.
        let successor = unsafe {
            let successor = (*removed.as_ptr()).next.replace_with_null();

            (*previous.as_ptr()).next.set(successor);

            successor
        };

        //  The tail was removed, its predecessor takes its place.
        if successor.is_none() {
            self.tail.set(Some(previous));
        }

        self.size -= 1;

        trace!("Removed node {}, list holds {} blocks", id, self.size);

        //  Safety:
        //  -   `removed` was allocated by this list, and is now unlinked from it.
        Ok(unsafe { Node::deallocate(removed) })
    }

    /// Removes the node at `index` from the list, and returns its block.
    ///
    /// #   Errors
    ///
    /// Fails as `node_at` does.
    pub fn remove_at(&mut self, index: usize) -> Result<B, Error> {
        let id = self.node_at(index)?.id();

        self.remove_node(Some(id))
    }

    //  Checks that `index` is within the bounds permitted to the indexed accessors.
    fn check_index(&self, index: usize) -> Result<(), Error> {
        let within = index < self.size || (C::INCLUSIVE_UPPER_BOUND && index == self.size);

        if self.size == 0 || !within {
            return Err(Error::out_of_range(index, self.size));
        }

        Ok(())
    }
}

impl<B, C> OrderedList<B, C>
    where
        B: BlockRecord,
        C: Configuration,
{
    /// Returns the index of the first block equal to `block`, if any.
    pub fn index_of(&self, block: &B) -> Option<usize> { self.iter().position(|candidate| candidate == block) }

    /// Returns whether a block equal to `block` is in the list.
    pub fn contains(&self, block: &B) -> bool { self.index_of(block).is_some() }

    /// Removes the first block equal to `block` from the list, and returns it.
    ///
    /// #   Errors
    ///
    /// Returns `OutOfRange`, with an index of -1, if no such block is in the list.
    pub fn remove_by_value(&mut self, block: &B) -> Result<B, Error> {
        let index = self.index_of(block).ok_or_else(|| Error::not_found(self.size))?;

        self.remove_at(index)
    }
}

impl<B, C> Default for OrderedList<B, C> {
    fn default() -> Self { Self::with_configuration() }
}

impl<B, C> Drop for OrderedList<B, C> {
    fn drop(&mut self) { self.clear(); }
}

impl<B, C> Extend<B> for OrderedList<B, C> {
    fn extend<I>(&mut self, blocks: I)
        where
            I: IntoIterator<Item = B>
    {
        for block in blocks {
            self.add_last(block);
        }
    }
}

impl<B, C> FromIterator<B> for OrderedList<B, C> {
    fn from_iter<I>(blocks: I) -> Self
        where
            I: IntoIterator<Item = B>
    {
        let mut list = Self::with_configuration();
        list.extend(blocks);
        list
    }
}

impl<'a, B, C> IntoIterator for &'a OrderedList<B, C> {
    type Item = &'a B;
    type IntoIter = Cursor<'a, B>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<B, C> fmt::Debug for OrderedList<B, C>
    where
        B: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.debug_list().entries(self.iter()).finish() }
}

/// Renders the blocks, from head to tail, separated by a single space.
///
/// Should the chain hold fewer nodes than the list claims, the rendering stops at the end of the chain and the
/// inconsistency is logged.
impl<B, C> fmt::Display for OrderedList<B, C>
    where
        B: fmt::Display
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cursor = self.cursor();

        for index in 0..self.size {
            match cursor.advance() {
                Ok(block) if index == 0 => write!(f, "{}", block)?,
                Ok(block) => write!(f, " {}", block)?,
                Err(_) => {
                    self.inconsistency();
                    return Ok(());
                },
            }
        }

        Ok(())
    }
}

impl<B, C> PartialEq for OrderedList<B, C>
    where
        B: PartialEq
{
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other) || (self.size == other.size && self.iter().eq(other.iter()))
    }
}

//  Safety:
//  -   The list exclusively owns all nodes it points to, hence sending the list sends its nodes along.
unsafe impl<B: Send, C> Send for OrderedList<B, C> {}

//  Safety:
//  -   The nodes are only ever mutated through `&mut self`, `&self` only hands out shared references to them.
unsafe impl<B: Sync, C> Sync for OrderedList<B, C> {}

//
//  Implementation
//

fn foreign(id: NodeId) -> Error {
    debug!("Node {} is not part of the list", id);

    Error::ForeignNode(id)
}

// mod tests
