use super::*;

/// Walks the chain by shared reference, independent of the cursor. Only
/// used to implement the standard traits.
pub(super) struct Values<'a, T> {
    pub(super) next: Link<T>,
    pub(super) _phantom: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            // Borrowed from the sequence for 'a, which keeps the chain alive
            let node = unsafe { &*node.as_ptr() };
            self.next = node.next;
            &node.value
        })
    }
}
