pub use std::{
    cell::Cell,
    fmt::{
        self,
        Debug,
        Display,
    },
    hash::{
        Hash,
        Hasher,
    },
    iter::FromIterator,
    ptr::NonNull,
};
