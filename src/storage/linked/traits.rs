use crate::{
    prelude::*,
    render,
    Sequence,
};
use super::{
    *,
    iter::Values,
};

unsafe impl<T: Send> Send for LinkedSequence<T> {}

impl<T> Drop for LinkedSequence<T> {
    fn drop(&mut self) {
        self.cursor.set(None);
        self.tail = None;
        // One node at a time, front to back.
        let mut next = self.head.take();
        while let Some(node) = next {
            next = unsafe { Node::free(node) }.next;
        }
    }
}

impl<T> Default for LinkedSequence<T> {
    #[inline(always)]
    fn default() -> Self {
        LinkedSequence::new()
    }
}

impl<TL: PartialEq<TR>, TR> PartialEq<LinkedSequence<TR>> for LinkedSequence<TL> {
    fn eq(&self, other: &LinkedSequence<TR>) -> bool {
        self.len == other.len
            && self.values().zip(other.values()).all(|(left, right)| left == right)
    }
}

impl<T: Eq> Eq for LinkedSequence<T> {}

impl<T: Hash> Hash for LinkedSequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for value in self.values() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for LinkedSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f
            .debug_struct("LinkedSequence")
            .field("values", &self.values())
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Debug> Debug for Values<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f
            .debug_list()
            .entries(Values {
                next: self.next,
                _phantom: PhantomData,
            })
            .finish()
    }
}

impl<T: Display> Display for LinkedSequence<T> {
    /// Renders through the cursor, leaving it exhausted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::<T, Self>(self, f)
    }
}

impl<T: Clone> Clone for LinkedSequence<T> {
    fn clone(&self) -> Self {
        self.values().cloned().collect()
    }
}

impl<T> Extend<T> for LinkedSequence<T> {
    fn extend<I: IntoIterator<Item=T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedSequence<T> {
    fn from_iter<I: IntoIterator<Item=T>>(iter: I) -> Self {
        let mut seq = LinkedSequence::new();
        seq.extend(iter);
        seq
    }
}
