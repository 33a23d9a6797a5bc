use std::num::NonZeroUsize;
use crate::{
    alloc::RawBuffer,
    prelude::*,
};

mod traits;
mod implementation;

/// Growth unit used by [`ArraySequence::new`].
pub const DEFAULT_GROWTH_UNIT: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(unit) => unit,
    None => panic!("growth unit must be non-zero"),
};

/// A [`Sequence`](crate::Sequence) stored contiguously in a single buffer.
///
/// The buffer starts with room for one growth unit of values. Whenever an
/// insertion needs more room than is left, the buffer is replaced by one that
/// is larger by the smallest whole number of growth units that fits, and the
/// values are moved across. Capacity never shrinks, not even on removal.
///
/// Indexed access and [`append`] are O(1) (amortized for the latter);
/// [`prepend`] and [`remove`] shift the values after the affected slot.
///
/// # Panics / Aborts
///
/// Any operation that may increase the capacity will abort if there is a
/// failure to allocate, or panic if the [`usize`] math overflows beforehand.
///
/// # Usage
///
/// ```rust
/// use std::num::NonZeroUsize;
/// use seqs::{ArraySequence, Sequence};
///
/// let mut seq = ArraySequence::with_growth_unit(NonZeroUsize::new(4).unwrap());
/// assert_eq!(seq.capacity(), 4);
///
/// seq.extend(1..=5);
/// assert_eq!(seq.capacity(), 8);
///
/// seq.prepend(0);
/// assert_eq!(seq.to_string(), "{0, 1, 2, 3, 4, 5}");
///
/// seq.remove(3).unwrap();
/// assert_eq!(seq.len(), 5);
/// assert_eq!(seq.capacity(), 8);
/// ```
///
/// [`append`]: crate::Sequence::append
/// [`prepend`]: crate::Sequence::prepend
/// [`remove`]: crate::Sequence::remove
pub struct ArraySequence<T> {
    buffer: RawBuffer<T>,
    filled: usize,
    /// Index the next `advance` reads, or `None` when unset.
    cursor: Cell<Option<usize>>,
    unit: NonZeroUsize,
}
