use std::marker::PhantomData;
use crate::prelude::*;

mod traits;
mod iter;
mod implementation;

/// Each node is owned by exactly one link: `head`, or its predecessor's
/// `next`. Nodes come from [`Node::alloc`] and go back through [`Node::free`].
type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    #[inline(always)]
    fn alloc(value: T, next: Link<T>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Node { value, next })))
    }

    /// Takes back ownership of a node from [`Node::alloc`]. No link may
    /// refer to it afterwards.
    #[inline(always)]
    unsafe fn free(node: NonNull<Self>) -> Box<Self> {
        Box::from_raw(node.as_ptr())
    }
}

/// A [`Sequence`](crate::Sequence) stored as a singly-linked chain of
/// individually allocated nodes.
///
/// Both ends are reachable in constant time, so [`append`], [`prepend`] and
/// [`last`] are O(1). Indexed access walks from the head and is O(index).
/// A reference to an element stays at the same address while other elements
/// are inserted or removed.
///
/// # Usage
///
/// ```rust
/// use seqs::{LinkedSequence, Sequence, SequenceError};
///
/// let mut seq = LinkedSequence::new();
/// for i in 1..4 {
///     seq.append(i);
/// }
/// *seq.get_mut(0).unwrap() = 10;
/// assert_eq!(seq.to_string(), "{10, 2, 3}");
///
/// assert_eq!(seq.remove(2), Ok(2));
/// assert_eq!(seq.remove(2), Err(SequenceError::ElementNotFound(2)));
/// assert_eq!(seq.last(), Ok(&3));
/// ```
///
/// [`append`]: crate::Sequence::append
/// [`prepend`]: crate::Sequence::prepend
/// [`last`]: crate::Sequence::last
pub struct LinkedSequence<T> {
    head: Link<T>,
    tail: Link<T>,
    cursor: Cell<Link<T>>,
    len: usize,
    _phantom: PhantomData<Box<Node<T>>>,
}
