use crate::{
    Sequence,
    SequenceError,
};
use super::{
    *,
    iter::Values,
};

impl<T> LinkedSequence<T> {
    /// Creates an empty sequence. Does not allocate.
    pub const fn new() -> Self {
        LinkedSequence {
            head: None,
            tail: None,
            cursor: Cell::new(None),
            len: 0,
            _phantom: PhantomData,
        }
    }

    #[inline(always)]
    pub(super) fn values(&self) -> Values<'_, T> {
        Values {
            next: self.head,
            _phantom: PhantomData,
        }
    }

    /// Walks to node `ix`, which must already be below `len`.
    fn node(&self, ix: usize) -> NonNull<Node<T>> {
        let mut node = if let Some(head) = self.head {
            head
        } else {
            // len > ix implies a head
            unreachable!("indexed an empty chain")
        };
        for _ in 0..ix {
            node = if let Some(next) = unsafe { node.as_ref() }.next {
                next
            } else {
                // len counts exactly the reachable nodes
                unreachable!("chain shorter than its length")
            };
        }
        node
    }

    /// Splices out node `ix`, which must already be below `len`, and
    /// releases it, keeping `head` and `tail` in step.
    fn unlink(&mut self, ix: usize) -> T {
        let node = if ix == 0 {
            let head = self.node(0);
            self.head = unsafe { head.as_ref() }.next;
            if self.head.is_none() {
                self.tail = None;
            }
            head
        } else {
            let prev = self.node(ix - 1);
            let node = self.node(ix);
            unsafe { (*prev.as_ptr()).next = node.as_ref().next };
            if self.tail == Some(node) {
                self.tail = Some(prev);
            }
            node
        };
        self.len -= 1;
        unsafe { Node::free(node) }.value
    }
}

impl<T> Sequence<T> for LinkedSequence<T> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.len
    }

    fn append(&mut self, value: T) {
        let node = Node::alloc(value, None);
        match self.tail {
            None => self.head = Some(node),
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
        }
        self.tail = Some(node);
        self.len += 1;
        self.cursor.set(None);
    }

    fn prepend(&mut self, value: T) {
        let node = Node::alloc(value, self.head);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
        self.cursor.set(None);
    }

    fn get(&self, index: usize) -> Result<&T, SequenceError<T>> {
        SequenceError::check_index(index, self.len)?;
        Ok(unsafe { &(*self.node(index).as_ptr()).value })
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T, SequenceError<T>> {
        SequenceError::check_index(index, self.len)?;
        Ok(unsafe { &mut (*self.node(index).as_ptr()).value })
    }

    fn reset_cursor(&self) -> Result<&T, SequenceError<T>> {
        let head = self.head.ok_or(SequenceError::EmptyContainer)?;
        self.cursor.set(Some(head));
        Ok(unsafe { &(*head.as_ptr()).value })
    }

    #[inline(always)]
    fn has_more(&self) -> bool {
        self.cursor.get().is_some()
    }

    fn advance(&self) -> Result<&T, SequenceError<T>> {
        let node = match self.cursor.get() {
            // The cursor is cleared or rewound by every operation that
            // unlinks a node, so it never dangles.
            Some(node) => unsafe { &*node.as_ptr() },
            None => return Err(SequenceError::exhausted(self.len)),
        };
        self.cursor.set(node.next);
        Ok(&node.value)
    }

    fn last(&self) -> Result<&T, SequenceError<T>> {
        self
            .tail
            .map(|tail| unsafe { &(*tail.as_ptr()).value })
            .ok_or(SequenceError::EmptyContainer)
    }

    fn remove(&mut self, value: T) -> Result<T, SequenceError<T>>
    where
        T: PartialEq,
    {
        let removed = self
            .position_of(value)
            .map(|ix| {
                log::trace!("unlinking node {} of {}", ix, self.len);
                self.unlink(ix)
            });
        self.cursor.set(self.head);
        removed
    }
}

// Everything here also runs clean under `cargo miri test`.
#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use super::*;

    fn chain(seq: &LinkedSequence<i32>) -> Vec<i32> {
        seq.values().copied().collect()
    }

    /// Walks the raw chain and checks the bookkeeping agrees with it.
    fn assert_links(seq: &LinkedSequence<i32>) {
        let mut count = 0;
        let mut last = None;
        let mut node = seq.head;
        while let Some(current) = node {
            count += 1;
            last = Some(current);
            node = unsafe { current.as_ref() }.next;
        }
        assert_eq!(count, seq.len);
        assert_eq!(last, seq.tail);
    }

    #[test]
    fn append_and_prepend_keep_links() {
        let mut seq = LinkedSequence::new();
        assert_links(&seq);
        seq.prepend(2);
        assert_links(&seq);
        seq.append(3);
        seq.prepend(1);
        assert_links(&seq);
        assert_eq!(chain(&seq), [1, 2, 3]);
        assert_eq!(seq.last(), Ok(&3));
    }

    #[test]
    fn tail_survives_later_insertions() {
        let mut seq = LinkedSequence::new();
        seq.append(1);
        seq.append(2);
        assert_eq!(seq.last(), Ok(&2));
        seq.prepend(0);
        seq.prepend(-1);
        seq.append(3);
        assert_eq!(seq.last(), Ok(&3));
        *seq.get_mut(4).unwrap() = 30;
        assert_eq!(seq.last(), Ok(&30));

        assert_eq!(seq.reset_cursor(), Ok(&-1));
        let mut seen = vec![];
        while seq.has_more() {
            seen.push(*seq.advance().unwrap());
        }
        assert_eq!(seen, [-1, 0, 1, 2, 30]);
        assert_links(&seq);
    }

    #[test]
    fn remove_head_middle_tail() {
        let mut seq: LinkedSequence<i32> = (1..=5).collect();
        assert_eq!(seq.remove(1), Ok(1));
        assert_links(&seq);
        assert_eq!(seq.remove(3), Ok(3));
        assert_links(&seq);
        assert_eq!(seq.remove(5), Ok(5));
        assert_links(&seq);
        assert_eq!(chain(&seq), [2, 4]);
        assert_eq!(seq.last(), Ok(&4));

        seq.append(6);
        assert_eq!(seq.last(), Ok(&6));
        assert_eq!(chain(&seq), [2, 4, 6]);
    }

    #[test]
    fn remove_until_empty() {
        let mut seq: LinkedSequence<i32> = (1..=2).collect();
        assert_eq!(seq.remove(2), Ok(2));
        assert_eq!(seq.remove(1), Ok(1));
        assert_links(&seq);
        assert!(seq.head.is_none());
        assert_eq!(seq.last(), Err(SequenceError::EmptyContainer));
        assert_eq!(seq.remove(1), Err(SequenceError::EmptyContainer));

        seq.prepend(9);
        assert_links(&seq);
        assert_eq!(seq.last(), Ok(&9));
    }

    #[test]
    fn remove_rewinds_cursor() {
        let mut seq: LinkedSequence<i32> = (1..=3).collect();
        assert_eq!(seq.remove(1), Ok(1));
        assert!(seq.has_more());
        assert_eq!(seq.advance(), Ok(&2));

        assert_eq!(seq.remove(7), Err(SequenceError::ElementNotFound(7)));
        assert_eq!(seq.advance(), Ok(&2));
        assert_eq!(chain(&seq), [2, 3]);
    }

    #[test]
    fn cursor_unset_until_reset() {
        let mut seq = LinkedSequence::new();
        assert!(!seq.has_more());
        assert_eq!(seq.advance(), Err(SequenceError::EmptyContainer));

        seq.append(1);
        assert!(!seq.has_more());
        assert_eq!(
            seq.advance(),
            Err(SequenceError::IndexOutOfBounds { index: 1, len: 1 }),
        );

        assert_eq!(seq.reset_cursor(), Ok(&1));
        assert_eq!(seq.advance(), Ok(&1));
        assert!(!seq.has_more());
    }

    #[test]
    fn insertion_unsets_cursor() {
        let mut seq: LinkedSequence<i32> = (1..=3).collect();
        seq.reset_cursor().unwrap();
        seq.advance().unwrap();
        seq.prepend(0);
        assert!(!seq.has_more());
        seq.reset_cursor().unwrap();
        seq.append(4);
        assert!(!seq.has_more());
    }

    #[test]
    fn element_address_is_stable() {
        let mut seq: LinkedSequence<i32> = (1..=3).collect();
        let before = seq.get(1).unwrap() as *const i32;
        seq.prepend(0);
        seq.append(4);
        seq.remove(3).unwrap();
        assert_eq!(seq.get(2).unwrap() as *const i32, before);
    }

    #[test]
    fn long_chain_drops() {
        let mut seq = LinkedSequence::new();
        for i in 0..100_000 {
            seq.prepend(i);
        }
        assert_eq!(seq.len(), 100_000);
        drop(seq);
    }
}
