//! Bit manipulation for the primitive integer types, by bit position.
//!
//! [`Bits`] is implemented for every primitive integer and provides mask construction and in-place
//! set / unset / toggle operations from a list of positions. The [`bit_mask!`](crate::bit_mask),
//! [`set_bits!`](crate::set_bits), [`unset_bits!`](crate::unset_bits) and
//! [`toggle_bits!`](crate::toggle_bits) macros accept the positions as a variadic list instead.
//!
//! Positions are counted from the least significant bit. A position which doesn't exist in the
//! integer type is a programming error and causes a panic.

mod bits;
mod macros;
mod tests;

pub use bits::*;
