//! This crate provides one ordered, mutable sequence contract with two
//! interchangeable storage strategies.
//!
//! # Overview
//!
//! [`Sequence`] is the contract: appending and prepending, indexed reads and
//! writes, removal by value, and traversal through a single cursor that
//! lives inside the container. It is implemented by
//!
//! - [`LinkedSequence`], a singly-linked chain of nodes with a tail pointer,
//! - [`ArraySequence`], a contiguous buffer that grows in fixed units.
//!
//! The storage is picked once, at construction. Code written against
//! `&dyn Sequence<T>` behaves the same with either one; [`render`] and
//! [`Sequence::position_of`] are written purely in terms of the cursor.
//!
//! Failures are reported as [`SequenceError`] values and never recovered
//! from internally.
//!
//! ```rust
//! use seqs::{ArraySequence, LinkedSequence, Sequence, SequenceError};
//!
//! let sequences: Vec<Box<dyn Sequence<i32>>> = vec![
//!     Box::new(LinkedSequence::<i32>::new()),
//!     Box::new(ArraySequence::<i32>::new()),
//! ];
//! for mut seq in sequences {
//!     seq.append(1);
//!     seq.append(2);
//!     seq.prepend(0);
//!     assert_eq!(seq.to_string(), "{0, 1, 2}");
//!     assert_eq!(seq.position_of(2), Ok(2));
//!     assert_eq!(seq.get(3), Err(SequenceError::IndexOutOfBounds { index: 3, len: 3 }));
//! }
//! ```

mod prelude;
mod alloc;
mod error;
mod sequence;
mod storage;
mod util;

pub use error::SequenceError;
pub use sequence::{
    render,
    Sequence,
};
pub use storage::{
    array::{
        ArraySequence,
        DEFAULT_GROWTH_UNIT,
    },
    linked::LinkedSequence,
};
