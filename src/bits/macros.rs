/// Builds a mask of type `T` with every listed bit position set.
///
/// # Panics
/// Panics if a position doesn't exist in `T`.
///
/// # Examples
/// ```
/// # use span_utils::bit_mask;
/// assert_eq!(bit_mask!(u8; 0, 1, 7), 0b1000_0011);
/// assert_eq!(bit_mask!(u32;), 0);
/// ```
#[macro_export]
macro_rules! bit_mask {
    ($ty:ty; $($pos:expr),* $(,)?) => {
        <$ty as $crate::bits::Bits>::mask_of(&[$($pos),*])
    };
}

/// Sets the listed bit positions of an integer in place.
///
/// # Examples
/// ```
/// # use span_utils::set_bits;
/// let mut value = 0_u32;
/// set_bits!(value; 4, 5);
/// assert_eq!(value, 0x30);
/// ```
#[macro_export]
macro_rules! set_bits {
    ($place:expr; $($pos:expr),* $(,)?) => {
        $crate::bits::Bits::set_bits(&mut $place, &[$($pos),*])
    };
}

/// Clears the listed bit positions of an integer in place.
///
/// # Examples
/// ```
/// # use span_utils::unset_bits;
/// let mut value = 0xFF_u8;
/// unset_bits!(value; 0, 7);
/// assert_eq!(value, 0x7E);
/// ```
#[macro_export]
macro_rules! unset_bits {
    ($place:expr; $($pos:expr),* $(,)?) => {
        $crate::bits::Bits::unset_bits(&mut $place, &[$($pos),*])
    };
}

/// Flips the listed bit positions of an integer in place.
#[macro_export]
macro_rules! toggle_bits {
    ($place:expr; $($pos:expr),* $(,)?) => {
        $crate::bits::Bits::toggle_bits(&mut $place, &[$($pos),*])
    };
}
