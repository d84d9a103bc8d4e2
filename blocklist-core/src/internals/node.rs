//! A Node of the list, and the handles referring to it.

use core::{
    fmt,
    ptr::NonNull,
    sync::atomic::{AtomicUsize, Ordering},
};

use alloc::boxed::Box;

/// NodeId
///
/// The identity of a Node, unique across all lists of the process.
///
/// A NodeId is a plain value: it may outlive the Node it identifies, in which case it no longer matches any node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    //  Draws the next identity.
    //
    //  Only uniqueness matters, hence relaxed ordering suffices.
    fn next() -> Self { Self(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed)) }

    /// Returns the underlying value.
    pub fn value(&self) -> usize { self.0 }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "#{}", self.0) }
}

/// Node
///
/// A cell of the chain, holding one block record and a link to the next cell.
///
/// Nodes are allocated and freed by the list owning them, and never move in between: any pointer to a node remains
/// valid for as long as the node is part of its list.
pub struct Node<B> {
    block: B,
    id: NodeId,
    //  Link to the next cell, if any.
    pub(crate) next: NodePtr<Node<B>>,
}

impl<B> Node<B> {
    /// Allocates a detached node, returning a pointer to it and its identity.
    ///
    /// The node must eventually be freed with `deallocate`.
    pub(crate) fn allocate(block: B) -> (NonNull<Self>, NodeId) {
        let id = NodeId::next();
        let node = Box::new(Self { block, id, next: NodePtr::null() });

        (Box::leak(node).into(), id)
    }

    /// Frees a node, returning its block record.
    ///
    /// #   Safety
    ///
    /// -   Assumes that `node` was produced by `allocate`, and not freed since.
    /// -   Assumes that `node` is detached: no other node, nor list, refers to it any longer.
    pub(crate) unsafe fn deallocate(node: NonNull<Self>) -> B {
        //  Safety:
        //  -   `node` was produced by `Box::leak`, as per pre-conditions.
        let node = Box::from_raw(node.as_ptr());

        debug_assert!(node.next.is_null());

        node.block
    }

    /// Returns the block record held by this node.
    pub fn block(&self) -> &B { &self.block }

    /// Returns the identity of this node.
    pub fn id(&self) -> NodeId { self.id }

    /// Returns the next node in the chain, if any.
    pub fn next(&self) -> Option<&Node<B>> {
        //  Safety:
        //  -   The next node belongs to the same list as `self`, which is borrowed for at least as long.
        self.next.get().map(|next| unsafe { &*next.as_ptr() })
    }

    /// Returns whether this node terminates the chain.
    pub fn is_last(&self) -> bool { self.next.is_null() }
}

impl<B> fmt::Debug for Node<B>
    where
        B: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("block", &self.block)
            .field("is_last", &self.is_last())
            .finish()
    }
}

/// NodePtr
///
/// A simple wrapper over a potentially null pointer to a node.
pub(crate) struct NodePtr<T>(Option<NonNull<T>>);

impl<T> NodePtr<T> {
    /// Creates a null instance.
    pub(crate) const fn null() -> Self { Self(None) }

    /// Returns whether the pointer is null.
    pub(crate) fn is_null(&self) -> bool { self.0.is_none() }

    /// Returns the inner pointer, possibly null.
    pub(crate) fn get(&self) -> Option<NonNull<T>> { self.0 }

    /// Sets the inner pointer.
    pub(crate) fn set(&mut self, ptr: Option<NonNull<T>>) { self.0 = ptr; }

    /// Sets the inner pointer to null and return the previous value, possibly null.
    pub(crate) fn replace_with_null(&mut self) -> Option<NonNull<T>> { self.0.take() }
}

impl<T> Default for NodePtr<T> {
    fn default() -> Self { Self::null() }
}

//
//  Implementation
//

static NEXT_NODE_ID: AtomicUsize = AtomicUsize::new(0);

#[cfg(test)]
mod tests {

use alloc::string::ToString;

use super::*;

#[test]
fn node_allocate_deallocate() {
    let (node, id) = Node::allocate(7u32);

    {
        //  Safety:
        //  -   Bounded lifetime.
        let node = unsafe { node.as_ref() };

        assert_eq!(7, *node.block());
        assert_eq!(id, node.id());
        assert!(node.next().is_none());
        assert!(node.is_last());
    }

    //  Safety:
    //  -   Allocated above, and detached.
    assert_eq!(7, unsafe { Node::deallocate(node) });
}

#[test]
fn node_id_unique() {
    let ((a, a_id), (b, b_id)) = (Node::allocate(1u32), Node::allocate(1u32));

    assert_ne!(a_id, b_id);
    assert!(a_id < b_id);

    //  Safety:
    //  -   Allocated above, and detached.
    unsafe {
        Node::deallocate(a);
        Node::deallocate(b);
    }
}

#[test]
fn node_id_display() {
    let id = NodeId(42);

    assert_eq!(42, id.value());
    assert_eq!("#42", id.to_string());
}

#[test]
fn node_next() {
    let ((head, _), (tail, _)) = (Node::allocate(1u32), Node::allocate(2u32));

    //  Safety:
    //  -   Both nodes are live, and only accessed through their pointers.
    unsafe {
        (*head.as_ptr()).next.set(Some(tail));

        assert!(!head.as_ref().is_last());
        assert_eq!(Some(&2), head.as_ref().next().map(Node::block));

        (*head.as_ptr()).next.replace_with_null();

        assert!(head.as_ref().is_last());
        assert_eq!(1, Node::deallocate(head));
        assert_eq!(2, Node::deallocate(tail));
    }
}

#[test]
fn node_ptr_set_replace_with_null() {
    let (a, b) = (1u8, 2u8);
    let (a, b) = (Some(NonNull::from(&a)), Some(NonNull::from(&b)));

    let mut ptr = NodePtr::<u8>::default();
    assert!(ptr.is_null());
    assert_eq!(None, ptr.get());

    ptr.set(a);
    assert_eq!(a, ptr.get());

    ptr.set(b);
    assert_eq!(b, ptr.replace_with_null());

    assert!(ptr.is_null());
    assert_eq!(None, ptr.replace_with_null());
}

} // mod tests
