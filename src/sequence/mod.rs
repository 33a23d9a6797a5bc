use crate::{
    prelude::*,
    SequenceError,
};

mod display;

pub use display::render;

/// An ordered, mutable sequence traversed through a single built-in cursor.
///
/// Implementations differ only in storage; every operation has the same
/// observable behavior on each of them.
///
/// # The cursor
///
/// There is exactly one cursor per sequence and no separate iterator object.
/// Starting a traversal with [`reset_cursor`] abandons any traversal already
/// in progress, so traversals cannot be nested. In addition:
///
/// - [`append`] and [`prepend`] unset the cursor.
/// - [`remove`] leaves the cursor reset to the first remaining element.
/// - [`position_of`] and [`render`] consume the cursor.
///
/// A sequence that has never been traversed has an unset cursor: [`has_more`]
/// is `false` and [`advance`] fails.
///
/// ```rust
/// use seqs::{LinkedSequence, Sequence};
///
/// let mut seq = LinkedSequence::new();
/// seq.append(2);
/// seq.prepend(1);
///
/// let mut seen = vec![];
/// seq.reset_cursor().unwrap();
/// while seq.has_more() {
///     seen.push(*seq.advance().unwrap());
/// }
/// assert_eq!(seen, [1, 2]);
/// ```
///
/// [`reset_cursor`]: Sequence::reset_cursor
/// [`append`]: Sequence::append
/// [`prepend`]: Sequence::prepend
/// [`remove`]: Sequence::remove
/// [`position_of`]: Sequence::position_of
/// [`has_more`]: Sequence::has_more
/// [`advance`]: Sequence::advance
pub trait Sequence<T> {
    /// Number of elements.
    fn len(&self) -> usize;

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts at the end.
    fn append(&mut self, value: T);

    /// Inserts at the start.
    fn prepend(&mut self, value: T);

    /// Reads the element at `index` without touching the cursor.
    ///
    /// Fails with [`EmptyContainer`] on an empty sequence, otherwise with
    /// [`IndexOutOfBounds`] when `index >= len`.
    ///
    /// [`EmptyContainer`]: SequenceError::EmptyContainer
    /// [`IndexOutOfBounds`]: SequenceError::IndexOutOfBounds
    fn get(&self, index: usize) -> Result<&T, SequenceError<T>>;

    /// Mutable counterpart to [`get`](Sequence::get), with the same checks.
    fn get_mut(&mut self, index: usize) -> Result<&mut T, SequenceError<T>>;

    /// Places the cursor on the first element and returns it. The element is
    /// not consumed; the next [`advance`](Sequence::advance) returns it again.
    fn reset_cursor(&self) -> Result<&T, SequenceError<T>>;

    /// Whether the cursor references an element.
    fn has_more(&self) -> bool;

    /// Returns the element under the cursor and moves the cursor on.
    ///
    /// Fails with [`EmptyContainer`] on an empty sequence, otherwise with
    /// [`IndexOutOfBounds`] when the cursor is unset or exhausted.
    ///
    /// [`EmptyContainer`]: SequenceError::EmptyContainer
    /// [`IndexOutOfBounds`]: SequenceError::IndexOutOfBounds
    fn advance(&self) -> Result<&T, SequenceError<T>>;

    /// The final element. Does not touch the cursor.
    fn last(&self) -> Result<&T, SequenceError<T>>;

    /// Removes and returns the first element equal to `value`.
    ///
    /// Fails with [`EmptyContainer`] on an empty sequence and with
    /// [`ElementNotFound`] (handing `value` back) when nothing matches, in
    /// which case the elements are left untouched. Either way the cursor is
    /// left on the first element, or unset if there is none.
    ///
    /// [`EmptyContainer`]: SequenceError::EmptyContainer
    /// [`ElementNotFound`]: SequenceError::ElementNotFound
    fn remove(&mut self, value: T) -> Result<T, SequenceError<T>>
    where
        T: PartialEq;

    /// Position of the first element equal to `value`, found by walking the
    /// cursor from the start.
    fn position_of(&self, value: T) -> Result<usize, SequenceError<T>>
    where
        T: PartialEq,
    {
        self.reset_cursor()?;
        let mut position = 0;
        while self.has_more() {
            if *self.advance()? == value {
                return Ok(position);
            }
            position += 1;
        }
        Err(SequenceError::ElementNotFound(value))
    }
}

impl<T: Display> Display for dyn Sequence<T> + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::<T, Self>(self, f)
    }
}
