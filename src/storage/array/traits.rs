use std::ptr::drop_in_place;
use crate::{
    render,
    Sequence,
};
use super::*;

unsafe impl<T: Send> Send for ArraySequence<T> {}

impl<T> Drop for ArraySequence<T> {
    fn drop(&mut self) {
        // Live values only; the buffer releases its memory afterwards.
        unsafe { drop_in_place(self.as_mut_slice()) }
    }
}

impl<T> Default for ArraySequence<T> {
    #[inline(always)]
    fn default() -> Self {
        ArraySequence::new()
    }
}

impl<TL: PartialEq<TR>, TR> PartialEq<ArraySequence<TR>> for ArraySequence<TL> {
    #[inline(always)]
    fn eq(&self, other: &ArraySequence<TR>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for ArraySequence<T> {}

impl<T: Hash> Hash for ArraySequence<T> {
    #[inline(always)]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: Debug> Debug for ArraySequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f
            .debug_struct("ArraySequence")
            .field("values", &self.as_slice())
            .field("capacity", &self.capacity())
            .field("growth_unit", &self.unit)
            .finish()
    }
}

impl<T: Display> Display for ArraySequence<T> {
    /// Renders through the cursor, leaving it exhausted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::<T, Self>(self, f)
    }
}

impl<T: Clone> Clone for ArraySequence<T> {
    fn clone(&self) -> Self {
        let mut seq = ArraySequence::with_growth_unit(self.unit);
        seq.extend(self.as_slice().iter().cloned());
        seq
    }
}

impl<T> Extend<T> for ArraySequence<T> {
    fn extend<I: IntoIterator<Item=T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> FromIterator<T> for ArraySequence<T> {
    fn from_iter<I: IntoIterator<Item=T>>(iter: I) -> Self {
        let mut seq = ArraySequence::new();
        seq.extend(iter);
        seq
    }
}
