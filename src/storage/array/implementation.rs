use std::{
    mem,
    ptr,
    slice,
};
use crate::{
    util::{
        grown_capacity,
        CopyFn,
        CopyNonoverlappingFn,
        PtrCopy,
    },
    Sequence,
    SequenceError,
};
use super::*;

impl<T> ArraySequence<T> {
    /// Creates an empty sequence growing by [`DEFAULT_GROWTH_UNIT`].
    #[inline(always)]
    pub fn new() -> Self {
        Self::with_growth_unit(DEFAULT_GROWTH_UNIT)
    }

    /// Creates an empty sequence that grows `unit` slots at a time. Room for
    /// one unit is allocated immediately.
    pub fn with_growth_unit(unit: NonZeroUsize) -> Self {
        ArraySequence {
            buffer: RawBuffer::allocate(unit),
            filled: 0,
            cursor: Cell::new(None),
            unit,
        }
    }

    /// Returns the maximum number of values before a reallocation is needed.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Returns the number of slots added per growth step.
    #[inline(always)]
    pub fn growth_unit(&self) -> NonZeroUsize {
        self.unit
    }

    /// Will insure there is room for `additional` more values, growing by
    /// as few whole growth units as that takes.
    pub fn reserve(&mut self, additional: usize) {
        let capacity = self.capacity();
        let spare = capacity - self.filled;
        if spare >= additional {
            return;
        }
        self.regrow(
            grown_capacity(capacity, additional - spare, self.unit).expect("Overflow")
        );
    }

    fn regrow(&mut self, capacity: NonZeroUsize) {
        log::debug!(
            "growing array sequence from {} to {} slots ({} filled)",
            self.capacity(),
            capacity,
            self.filled,
        );
        let buffer = RawBuffer::allocate(capacity);
        unsafe {
            CopyNonoverlappingFn::copy(self.buffer.as_ptr(), buffer.as_ptr(), self.filled)
        };
        // The old buffer only owns memory now; its values live on in the new one.
        drop(mem::replace(&mut self.buffer, buffer));
    }

    /// Moves `length` values starting at slot `from` to start at slot `to`.
    /// Both ranges must lie within the capacity.
    #[inline(always)]
    fn shift_memory<F: PtrCopy>(&mut self, to: usize, from: usize, length: usize) {
        unsafe {
            F::copy(self.buffer.slot(from), self.buffer.slot(to), length)
        }
    }

    #[inline(always)]
    pub(super) fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.buffer.as_ptr(), self.filled) }
    }

    #[inline(always)]
    pub(super) fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.buffer.as_ptr(), self.filled) }
    }
}

impl<T> Sequence<T> for ArraySequence<T> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.filled
    }

    fn append(&mut self, value: T) {
        self.reserve(1);
        unsafe { ptr::write(self.buffer.slot(self.filled), value) };
        self.filled += 1;
        self.cursor.set(None);
    }

    fn prepend(&mut self, value: T) {
        self.reserve(1);
        // Overlapping move up one slot
        self.shift_memory::<CopyFn>(1, 0, self.filled);
        unsafe { ptr::write(self.buffer.slot(0), value) };
        self.filled += 1;
        self.cursor.set(None);
    }

    fn get(&self, index: usize) -> Result<&T, SequenceError<T>> {
        SequenceError::check_index(index, self.filled)?;
        Ok(&self.as_slice()[index])
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T, SequenceError<T>> {
        SequenceError::check_index(index, self.filled)?;
        Ok(&mut self.as_mut_slice()[index])
    }

    fn reset_cursor(&self) -> Result<&T, SequenceError<T>> {
        let first = self.as_slice().first().ok_or(SequenceError::EmptyContainer)?;
        self.cursor.set(Some(0));
        Ok(first)
    }

    #[inline(always)]
    fn has_more(&self) -> bool {
        matches!(self.cursor.get(), Some(next) if next < self.filled)
    }

    fn advance(&self) -> Result<&T, SequenceError<T>> {
        match self.cursor.get() {
            Some(next) if next < self.filled => {
                self.cursor.set(Some(next + 1));
                Ok(&self.as_slice()[next])
            },
            _ => Err(SequenceError::exhausted(self.filled)),
        }
    }

    fn last(&self) -> Result<&T, SequenceError<T>> {
        self.as_slice().last().ok_or(SequenceError::EmptyContainer)
    }

    fn remove(&mut self, value: T) -> Result<T, SequenceError<T>>
    where
        T: PartialEq,
    {
        let removed = self
            .position_of(value)
            .map(|ix| {
                log::trace!("removing slot {} of {}", ix, self.filled);
                let removed = unsafe { ptr::read(self.buffer.slot(ix)) };
                self.shift_memory::<CopyFn>(ix, ix + 1, self.filled - ix - 1);
                self.filled -= 1;
                removed
            });
        self.cursor.set(if self.filled == 0 { None } else { Some(0) });
        removed
    }
}
