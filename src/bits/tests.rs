#![cfg(test)]

use super::*;
use crate::util::panic::assert_panics;

#[test]
fn test_masks() {
    assert_eq!(u8::bit(0), 1);
    assert_eq!(u8::bit(7), 0x80);
    assert_eq!(i8::bit(7), i8::MIN, "The sign bit should be addressable for signed types.");
    assert_eq!(u128::bit(127), 1 << 127);

    assert_eq!(u32::mask_of(&[]), u32::NONE, "An empty list should produce an empty mask.");
    assert_eq!(u32::mask_of(&[1, 3, 5]), 0b10_1010);
    assert_eq!(
        u32::mask_of(&[2, 2, 2]),
        0b100,
        "Repeated positions should only be set once."
    );
    assert_eq!(crate::bit_mask!(u16; 15, 0), 0x8001);
    assert_eq!(crate::bit_mask!(i64; 63), i64::MIN);
}

#[test]
fn test_in_place_ops() {
    let mut value = 0_u64;
    crate::set_bits!(value; 0, 8, 63);
    assert_eq!(value, 1 | (1 << 8) | (1 << 63));

    crate::unset_bits!(value; 8, 9);
    assert_eq!(value, 1 | (1 << 63), "Unsetting a clear bit should leave it clear.");

    crate::toggle_bits!(value; 0, 1);
    assert_eq!(value, 0b10 | (1 << 63));

    value.toggle_bits(&[4, 4]);
    assert_eq!(value, 0b10 | (1 << 63), "Toggling twice should restore the bit.");

    let mut arr = [0_u8; 2];
    crate::set_bits!(arr[1]; 2);
    assert_eq!(arr, [0, 4], "Macros should accept any mutable place.");
}

#[test]
fn test_queries() {
    let value = u16::mask_of(&[1, 4, 9]);
    assert!(value.is_bit_set(4));
    assert!(!value.is_bit_set(5));
    assert!(value.are_bits_set(&[1, 9]));
    assert!(!value.are_bits_set(&[1, 2]));
    assert!(value.are_bits_set(&[]), "Every bit of an empty list is set.");
    assert!(value.any_bit_set(&[0, 9]));
    assert!(!value.any_bit_set(&[0, 2]));
    assert!(!value.any_bit_set(&[]), "No bit of an empty list is set.");
}

#[test]
fn test_out_of_range_positions() {
    assert_panics!({ u8::bit(8) });
    assert_panics!({ u32::mask_of(&[0, 32]) });
    assert_panics!({
        let mut value = 0_i16;
        value.set_bits(&[16]);
    });
    assert_panics!({ 0_u64.is_bit_set(64) });
}
