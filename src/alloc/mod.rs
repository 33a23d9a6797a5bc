use std::{
    alloc::{
        alloc,
        dealloc,
        handle_alloc_error,
        Layout,
    },
    marker::PhantomData,
    mem,
    num::NonZeroUsize,
    ptr::NonNull,
};
use crate::util::can_try_alloc;

/// An uninitialized allocation for `capacity` values of `T`.
///
/// Only the memory is owned; whoever holds the buffer decides which slots
/// are live and is responsible for dropping them before the buffer goes.
pub(crate) struct RawBuffer<T> {
    ptr: NonNull<T>,
    capacity: NonZeroUsize,
    _phantom: PhantomData<T>,
}

impl<T> RawBuffer<T> {
    /// # Panics / Aborts
    ///
    /// Panics if the size in bytes overflows, aborts if allocation fails.
    pub(crate) fn allocate(capacity: NonZeroUsize) -> Self {
        let layout = Self::layout(capacity);
        let ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else if let Some(ptr) = NonNull::new(unsafe { alloc(layout) }) {
            ptr.cast()
        } else {
            handle_alloc_error(layout)
        };
        RawBuffer {
            ptr,
            capacity,
            _phantom: PhantomData,
        }
    }

    fn layout(capacity: NonZeroUsize) -> Layout {
        let layout = Layout::array::<T>(capacity.get()).expect("Overflow");
        if !can_try_alloc(layout.size()) {
            panic!("Overflow");
        }
        layout
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity.get()
    }

    #[inline(always)]
    pub(crate) fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Pointer to slot `ix`, which must be at most `capacity`.
    #[inline(always)]
    pub(crate) unsafe fn slot(&self, ix: usize) -> *mut T {
        debug_assert!(ix <= self.capacity.get());
        self.ptr.as_ptr().add(ix)
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if mem::size_of::<T>() == 0 {
            return;
        }
        unsafe {
            dealloc(self.ptr.as_ptr() as *mut u8, Self::layout(self.capacity))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reports_capacity() {
        let buffer = RawBuffer::<String>::allocate(NonZeroUsize::new(7).unwrap());
        assert_eq!(buffer.capacity(), 7);
        assert!(!buffer.as_ptr().is_null());
    }

    #[test]
    fn zero_sized_does_not_allocate() {
        let buffer = RawBuffer::<()>::allocate(NonZeroUsize::new(3).unwrap());
        assert_eq!(buffer.as_ptr(), NonNull::<()>::dangling().as_ptr());
    }

    #[test]
    #[should_panic]
    fn overflow() {
        RawBuffer::<u64>::allocate(NonZeroUsize::new(usize::MAX).unwrap());
    }
}
