/// Position-based bit operations for a primitive integer.
///
/// # Examples
/// ```
/// # use span_utils::bits::Bits;
/// let mut flags = u16::mask_of(&[0, 3]);
/// assert_eq!(flags, 0b1001);
///
/// flags.set_bits(&[1]);
/// flags.unset_bits(&[0]);
/// assert_eq!(flags, 0b1010);
/// assert!(flags.are_bits_set(&[1, 3]));
/// ```
pub trait Bits: Copy {
    /// The number of bits in the type.
    const BITS: u32;

    /// The value with no bits set.
    const NONE: Self;

    /// Returns a value with only the bit at `pos` set.
    ///
    /// # Panics
    /// Panics if `pos >= Self::BITS`.
    fn bit(pos: u32) -> Self;

    /// Returns a value with every bit listed in `positions` set. Repeated positions are allowed.
    ///
    /// # Panics
    /// Panics if any position is `>= Self::BITS`.
    fn mask_of(positions: &[u32]) -> Self;

    /// Sets every bit listed in `positions`.
    ///
    /// # Panics
    /// Panics if any position is `>= Self::BITS`.
    fn set_bits(&mut self, positions: &[u32]);

    /// Clears every bit listed in `positions`.
    ///
    /// # Panics
    /// Panics if any position is `>= Self::BITS`.
    fn unset_bits(&mut self, positions: &[u32]);

    /// Flips every bit listed in `positions`. A position listed twice is flipped twice.
    ///
    /// # Panics
    /// Panics if any position is `>= Self::BITS`.
    fn toggle_bits(&mut self, positions: &[u32]);

    /// Returns true if the bit at `pos` is set.
    ///
    /// # Panics
    /// Panics if `pos >= Self::BITS`.
    fn is_bit_set(self, pos: u32) -> bool;

    /// Returns true if every bit listed in `positions` is set. True for an empty list.
    ///
    /// # Panics
    /// Panics if any position is `>= Self::BITS`.
    fn are_bits_set(self, positions: &[u32]) -> bool;

    /// Returns true if at least one bit listed in `positions` is set. False for an empty list.
    ///
    /// # Panics
    /// Panics if any position is `>= Self::BITS`.
    fn any_bit_set(self, positions: &[u32]) -> bool;
}

macro_rules! impl_bits {
    ($($ty:ty),*) => {
        $(
            impl Bits for $ty {
                const BITS: u32 = <$ty>::BITS;

                const NONE: Self = 0;

                #[inline]
                #[track_caller]
                fn bit(pos: u32) -> Self {
                    assert!(
                        pos < <$ty>::BITS,
                        "Bit position {} out of bounds for {} with {} bits!",
                        pos,
                        stringify!($ty),
                        <$ty>::BITS,
                    );
                    1 << pos
                }

                #[track_caller]
                fn mask_of(positions: &[u32]) -> Self {
                    positions.iter().fold(0, |mask, &pos| mask | Self::bit(pos))
                }

                #[track_caller]
                fn set_bits(&mut self, positions: &[u32]) {
                    *self |= Self::mask_of(positions);
                }

                #[track_caller]
                fn unset_bits(&mut self, positions: &[u32]) {
                    *self &= !Self::mask_of(positions);
                }

                #[track_caller]
                fn toggle_bits(&mut self, positions: &[u32]) {
                    for &pos in positions {
                        *self ^= Self::bit(pos);
                    }
                }

                #[inline]
                #[track_caller]
                fn is_bit_set(self, pos: u32) -> bool {
                    self & Self::bit(pos) != 0
                }

                #[track_caller]
                fn are_bits_set(self, positions: &[u32]) -> bool {
                    let mask = Self::mask_of(positions);
                    self & mask == mask
                }

                #[track_caller]
                fn any_bit_set(self, positions: &[u32]) -> bool {
                    self & Self::mask_of(positions) != 0
                }
            }
        )*
    };
}

impl_bits!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
