use std::{
    num::NonZeroUsize,
    ptr,
};

#[inline(always)]
pub fn can_try_alloc(alloc_size: usize) -> bool {
    alloc_size <= isize::MAX as usize
}

/// The capacity after making room for `shortfall` more slots than
/// `capacity` offers, growing in whole multiples of `unit`.
///
/// Returns `None` on overflow.
pub fn grown_capacity(
    capacity: usize,
    shortfall: usize,
    unit: NonZeroUsize,
) -> Option<NonZeroUsize> {
    let unit = unit.get();
    // ceil(shortfall / unit), without the overflow of `shortfall + unit - 1`
    let units = shortfall / unit + (shortfall % unit != 0) as usize;
    units
        .checked_mul(unit)
        .and_then(|extra| capacity.checked_add(extra))
        .and_then(NonZeroUsize::new)
}

pub trait PtrCopy {
    unsafe fn copy<T>(src: *const T, dst: *mut T, count: usize);
}

/// For moves within one buffer, where source and destination may overlap.
pub enum CopyFn {}
impl PtrCopy for CopyFn {
    #[inline(always)]
    unsafe fn copy<T>(src: *const T, dst: *mut T, count: usize) {
        ptr::copy(src, dst, count);
    }
}

/// For moves between two distinct buffers.
pub enum CopyNonoverlappingFn {}
impl PtrCopy for CopyNonoverlappingFn {
    #[inline(always)]
    unsafe fn copy<T>(src: *const T, dst: *mut T, count: usize) {
        ptr::copy_nonoverlapping(src, dst, count);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn unit(value: usize) -> NonZeroUsize {
        NonZeroUsize::new(value).unwrap()
    }

    #[test]
    fn grows_by_single_unit() {
        assert_eq!(grown_capacity(10, 1, unit(10)), NonZeroUsize::new(20));
        assert_eq!(grown_capacity(10, 10, unit(10)), NonZeroUsize::new(20));
    }

    #[test]
    fn grows_by_enough_units() {
        assert_eq!(grown_capacity(10, 11, unit(10)), NonZeroUsize::new(30));
        assert_eq!(grown_capacity(3, 7, unit(3)), NonZeroUsize::new(12));
        assert_eq!(grown_capacity(1, 1, unit(1)), NonZeroUsize::new(2));
    }

    #[test]
    fn overflow() {
        assert_eq!(grown_capacity(usize::MAX - 1, 1, unit(10)), None);
        assert_eq!(grown_capacity(0, usize::MAX, unit(2)), None);
    }

    #[test]
    fn alloc_limit() {
        assert!(can_try_alloc(isize::MAX as usize));
        assert!(!can_try_alloc(isize::MAX as usize + 1));
    }
}
