#![cfg(test)]

use super::*;
use crate::array_size;

#[test]
fn test_size() {
    let empty: [u32; 0] = [];
    assert_eq!(size(&empty), 0, "An empty array should have size 0.");
    assert_eq!(size(&[0_u64; 7]), 7, "Size should match the declared element count.");
    assert_eq!(size(&["a", "b"]), 2);
    assert_eq!(array_size!([0_u8; 33]), 33, "The macro should agree with the function.");

    const TABLE: [char; 3] = ['x', 'y', 'z'];
    const LEN: usize = array_size!(TABLE);
    assert_eq!(LEN, 3, "array_size! should be usable in a const context.");
}

#[test]
fn test_is_in_range_of() {
    let arr = [10, 20, 30, 40];

    for i in 0..4_i64 {
        assert!(is_in_range_of(&arr, i), "Index {i} should be in range.");
    }
    assert!(!is_in_range_of(&arr, 4_usize), "The index one past the end shouldn't be in range.");
    assert!(!is_in_range_of(&arr, -1_i8), "Negative indices should never be in range.");
    assert!(!is_in_range_of(&arr, i128::MIN));
    assert!(!is_in_range_of(&arr, u128::MAX));

    let empty: [u8; 0] = [];
    assert!(!is_in_range_of(&empty, 0_u8), "Nothing is in range of an empty array.");
}

#[test]
fn test_indices() {
    let arr = ['a', 'b', 'c'];
    let mut visited = 0;
    for i in indices(&arr) {
        assert!(is_in_range_of(&arr, i));
        visited += 1;
    }
    assert_eq!(visited, size(&arr), "Every index should be visited exactly once.");

    assert_eq!(last_index(&arr), Some(2));
    assert_eq!(last_index(&[(); 0]), None);
}
