//! Helpers for fixed-size arrays, where the element count is known at compile time.
//!
//! These are the compile-time counterparts of the bounds carried at runtime by
//! [`Span`](crate::span::Span) and [`View`](crate::span::View), which are usually constructed from
//! an array via [`View::from_array`](crate::span::View::from_array).

use std::ops::Range;

mod tests;

/// Returns the number of elements in a fixed-size array.
///
/// # Examples
/// ```
/// # use span_utils::array;
/// let arr = [0_u8; 12];
/// assert_eq!(array::size(&arr), 12);
/// ```
pub const fn size<T, const N: usize>(_arr: &[T; N]) -> usize {
    N
}

/// Returns true if `index` refers to an element of `arr`, that is `0 <= index < N`. Any integer
/// type can be used, negative values and values which don't fit in a [`usize`] are out of range.
///
/// # Examples
/// ```
/// # use span_utils::array;
/// let arr = [1, 2, 3];
/// assert!(array::is_in_range_of(&arr, 2_i32));
/// assert!(!array::is_in_range_of(&arr, -1_i32));
/// assert!(!array::is_in_range_of(&arr, 3_u64));
/// ```
pub fn is_in_range_of<T, I, const N: usize>(_arr: &[T; N], index: I) -> bool
where
    I: TryInto<usize>,
{
    match index.try_into() {
        Ok(index) => index < N,
        Err(_) => false,
    }
}

/// Returns the range of valid indices for `arr`, for iterating by index rather than by element.
pub const fn indices<T, const N: usize>(_arr: &[T; N]) -> Range<usize> {
    0..N
}

/// Returns the index of the last element of `arr`, or [`None`] if it has no elements.
pub const fn last_index<T, const N: usize>(_arr: &[T; N]) -> Option<usize> {
    N.checked_sub(1)
}

/// Evaluates to the element count of a fixed-size array expression as a `usize` constant.
///
/// Slices and other unsized types are rejected at compile time, because the count is taken from
/// the array type itself rather than from a runtime length.
///
/// # Examples
/// ```
/// # use span_utils::array_size;
/// const TABLE: [u16; 4] = [1, 2, 4, 8];
/// const LEN: usize = array_size!(TABLE);
/// assert_eq!(LEN, 4);
/// ```
#[macro_export]
macro_rules! array_size {
    ($arr:expr) => {
        $crate::array::size(&$arr)
    };
}
