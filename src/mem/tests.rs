#![cfg(test)]

use super::*;
use crate::util::panic::assert_panics;

#[test]
fn test_validity() {
    let buf = [0_u8; 4];
    assert!(MemView::INVALID.is_invalid());
    assert!(MemView::default().is_invalid(), "The default MemView should be invalid.");

    let empty = MemView::from_bytes(&buf[..0]);
    assert!(empty.is_valid(), "An empty MemView should still be valid.");
    assert!(empty.is_empty());
    assert_ne!(empty, MemView::INVALID, "Empty and invalid MemViews should be distinct.");

    // SAFETY: A null pointer is never read from.
    let from_null = unsafe { MemView::from_raw_parts(std::ptr::null(), 10) };
    assert!(from_null.is_invalid(), "A null start address should produce an invalid MemView.");
    assert_eq!(from_null.len(), 0);

    let words = [0_u32; 3];
    assert_eq!(MemView::of(&words).len(), 12, "MemView::of should count bytes, not elements.");
}

#[test]
fn test_ordering() {
    let buf = [0_u8; 16];
    let low = MemView::from_bytes(&buf[0..4]);
    let high = MemView::from_bytes(&buf[8..12]);
    let low_long = MemView::from_bytes(&buf[0..8]);

    assert!(MemView::is_lower_or_equal(&low, &high));
    assert!(!MemView::is_lower_or_equal(&high, &low));
    assert!(MemView::is_lower_or_equal(&low, &low), "The order should be reflexive.");
    assert!(
        MemView::is_lower_or_equal(&low, &low_long),
        "Ties on the start address should be broken by length."
    );
    assert!(MemView::is_lower_or_equal(&MemView::INVALID, &low));

    assert_eq!(sort(MemView::is_lower_or_equal, high, low), (low, high));
    assert_eq!(sort(MemView::is_lower_or_equal, low, high), (low, high));
}

#[test]
fn test_overlap() {
    let buf = [0_u8; 12];
    let a = MemView::from_bytes(&buf[0..4]);
    let b = MemView::from_bytes(&buf[4..8]);
    let c = MemView::from_bytes(&buf[0..8]);
    let d = MemView::from_bytes(&buf[4..12]);
    let empty = MemView::from_bytes(&buf[2..2]);

    assert!(!a.is_overlapping(b), "Touching ranges shouldn't overlap.");
    assert!(!b.is_overlapping(a), "Overlap should be symmetric.");
    assert!(c.is_overlapping(d));
    assert!(d.is_overlapping(c), "Overlap should be symmetric.");
    assert!(a.is_overlapping(a), "A non-empty range should overlap itself.");
    assert!(!empty.is_overlapping(c), "An empty range shouldn't overlap anything.");
    assert!(!c.is_overlapping(empty));
    assert!(!empty.is_overlapping(empty));

    assert_eq!(
        a.try_is_overlapping(MemView::INVALID),
        Err(InvalidView),
        "Overlap checks with an invalid MemView should fail."
    );
    assert_panics!({ MemView::INVALID.is_overlapping(MemView::INVALID) });
}

#[test]
fn test_merge() {
    let buf = [0_u8; 12];
    let c = MemView::from_bytes(&buf[0..8]);
    let d = MemView::from_bytes(&buf[4..12]);
    let inner = MemView::from_bytes(&buf[2..6]);

    let merged = c.merge(d);
    assert_eq!(merged, MemView::from_bytes(&buf), "[0, 8) and [4, 12) should merge into [0, 12).");
    assert_eq!(d.merge(c), merged, "Merge should be symmetric.");
    assert_eq!(c.merge(inner), c, "Merging with a contained range should change nothing.");
    assert_eq!(merged.start(), buf.as_ptr());
    assert_eq!(merged.end(), buf.as_ptr().wrapping_add(12));

    // SAFETY: All bytes of buf are initialized.
    assert_eq!(unsafe { merged.as_bytes() }, Some(&buf[..]));

    let a = MemView::from_bytes(&buf[0..4]);
    let b = MemView::from_bytes(&buf[4..8]);
    assert_eq!(a.try_merge(b), Err(MergeError::NotOverlapping(NotOverlapping)));
    assert!(a.try_merge(MemView::INVALID).is_err_and(|e| e.is_invalid_view()));
    assert_panics!({
        let buf = [0_u8; 8];
        MemView::from_bytes(&buf[0..4]).merge(MemView::from_bytes(&buf[4..8])).len()
    });
}

#[test]
fn test_contains() {
    let buf = [0_u8; 8];
    let all = MemView::from_bytes(&buf);
    assert!(all.contains(MemView::from_bytes(&buf[2..6])));
    assert!(all.contains(all));
    assert!(all.contains(MemView::from_bytes(&buf[8..])), "The empty end range is contained.");
    assert!(!MemView::from_bytes(&buf[0..4]).contains(MemView::from_bytes(&buf[2..6])));
}

#[test]
fn test_debug() {
    assert_eq!(format!("{:?}", MemView::INVALID), "MemView(INVALID)");

    let buf = [0_u8; 4];
    let view = MemView::from_bytes(&buf);
    let start = buf.as_ptr() as usize;
    assert_eq!(format!("{view:?}"), format!("MemView({:#x}..{:#x})", start, start + 4));
}
