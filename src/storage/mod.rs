pub(crate) mod linked;
pub(crate) mod array;
