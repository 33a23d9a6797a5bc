use thiserror::Error;

/// The ways a [`Sequence`](crate::Sequence) operation can fail.
///
/// None of these are fatal. They are ordinary outcomes of asking for
/// something that is not there, and are handed back to the caller untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceError<T> {
    /// A read, cursor, `last` or removal was attempted on a sequence with no
    /// elements.
    #[error("The given container is empty, be careful !")]
    EmptyContainer,
    /// An index at or beyond the length was used, or the cursor was advanced
    /// while unset or exhausted. Cursor failures report `index == len`.
    #[error("The given index ({index}) is out of the container's bounds (length {len}). \
        Check `has_more` before calling `advance`, or use an index below the length.")]
    IndexOutOfBounds {
        index: usize,
        len: usize,
    },
    /// No element compared equal to the searched value, which is handed back.
    #[error("The element you requested ({0}) wasn't found in the list.")]
    ElementNotFound(T),
}

impl<T> SequenceError<T> {
    /// Validates `index` against a sequence of length `len`. An empty
    /// sequence is reported as such regardless of the index.
    pub(crate) fn check_index(index: usize, len: usize) -> Result<(), Self> {
        if len == 0 {
            Err(SequenceError::EmptyContainer)
        } else if index >= len {
            Err(SequenceError::IndexOutOfBounds { index, len })
        } else {
            Ok(())
        }
    }

    /// The failure for advancing a cursor that references nothing.
    pub(crate) fn exhausted(len: usize) -> Self {
        if len == 0 {
            SequenceError::EmptyContainer
        } else {
            SequenceError::IndexOutOfBounds { index: len, len }
        }
    }

    /// Recovers the searched value from an [`ElementNotFound`] failure.
    ///
    /// [`ElementNotFound`]: SequenceError::ElementNotFound
    pub fn into_value(self) -> Option<T> {
        match self {
            SequenceError::ElementNotFound(value) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_wins_over_bounds() {
        assert_eq!(
            SequenceError::<()>::check_index(0, 0),
            Err(SequenceError::EmptyContainer),
        );
        assert_eq!(
            SequenceError::<()>::check_index(5, 0),
            Err(SequenceError::EmptyContainer),
        );
    }

    #[test]
    fn bounds() {
        assert_eq!(SequenceError::<()>::check_index(2, 3), Ok(()));
        assert_eq!(
            SequenceError::<()>::check_index(3, 3),
            Err(SequenceError::IndexOutOfBounds { index: 3, len: 3 }),
        );
    }

    #[test]
    fn not_found_message_names_value() {
        let error = SequenceError::ElementNotFound(12);
        assert_eq!(
            error.to_string(),
            "The element you requested (12) wasn't found in the list.",
        );
        assert_eq!(error.into_value(), Some(12));
    }

    #[test]
    fn exhausted_cursor() {
        assert_eq!(SequenceError::<u8>::exhausted(0), SequenceError::EmptyContainer);
        assert_eq!(
            SequenceError::<u8>::exhausted(4),
            SequenceError::IndexOutOfBounds { index: 4, len: 4 },
        );
    }
}
