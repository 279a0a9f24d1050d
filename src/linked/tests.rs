#![cfg(test)]

use std::ptr;

use super::*;
use crate::{entry, link_offset};

struct Item {
    value: char,
    link: Link,
}

impl Item {
    fn new(value: char) -> Item {
        Item {
            value,
            link: Link::new(),
        }
    }
}

fn values(head: &Link) -> String {
    // SAFETY: Only used with chains of Items which outlive the call.
    unsafe { head.iter_entries(link_offset!(Item, link)) }
        .map(|item| item.value)
        .collect()
}

fn values_rev(head: &Link) -> String {
    // SAFETY: As above.
    unsafe { head.iter_entries(link_offset!(Item, link)) }
        .rev()
        .map(|item| item.value)
        .collect()
}

#[test]
fn test_init() {
    let link = Link::new();
    assert!(link.is_corrupted(), "A new Link should be corrupted until initialized.");
    assert!(!link.is_detached());

    link.init();
    assert!(!link.is_corrupted());
    assert!(link.is_detached(), "An initialized Link should point to itself.");
    assert!(link.is_empty());

    // SAFETY: link is detached, so it is the only member of its chain.
    unsafe {
        assert!(ptr::eq(link.next().unwrap(), &link));
        assert!(ptr::eq(link.prev().unwrap(), &link));
        assert_eq!(link.size(), 0);
        assert_eq!(link.iter().count(), 0);
        link.verify_links();
    }
}

#[test]
fn test_insert_after() {
    let [a, b, c, d] = ['A', 'B', 'C', 'D'].map(Item::new);
    a.link.init();

    // SAFETY: All items stay in place until the end of the test.
    unsafe {
        b.link.insert_after(&a.link);
        c.link.insert_after(&b.link);
        d.link.insert_after(&c.link);
        a.link.verify_links();

        assert_eq!(values(&a.link), "BCD");
        assert_eq!(values_rev(&a.link), "DCB");
        assert_eq!(a.link.size(), 3);
        assert!(!a.link.is_empty());

        // The chain is circular, so any member can be treated as a head.
        assert_eq!(b.link.size(), 3);
        let from_c: Vec<_> = c.link.iter().collect();
        assert!(ptr::eq(from_c[0], &d.link));
        assert!(ptr::eq(from_c[1], &a.link));
        assert!(ptr::eq(from_c[2], &b.link));
    }
}

#[test]
fn test_insert_before() {
    let head = Link::new();
    head.init();
    let items = ['x', 'y', 'z'].map(Item::new);

    // SAFETY: head and items stay in place until the end of the test.
    unsafe {
        for item in &items {
            item.link.init();
            item.link.insert_before(&head);
        }
        head.verify_links();
        assert_eq!(values(&head), "xyz", "Inserting before the head should append.");

        let w = Item::new('w');
        w.link.insert_after(&head);
        assert_eq!(values(&head), "wxyz", "Inserting after the head should prepend.");
        w.link.pop();
    }
}

#[test]
fn test_pop() {
    let [a, b, c, d] = ['A', 'B', 'C', 'D'].map(Item::new);
    a.link.init();

    // SAFETY: All items stay in place until the end of the test.
    unsafe {
        b.link.insert_after(&a.link);
        c.link.insert_after(&b.link);
        d.link.insert_after(&c.link);

        c.link.pop();
        assert!(c.link.is_detached(), "A popped Link should be detached.");
        assert_eq!(values(&a.link), "BD");
        assert_eq!(values_rev(&a.link), "DB");
        assert_eq!(a.link.size(), 2);
        a.link.verify_links();

        c.link.pop();
        assert!(c.link.is_detached(), "Popping a detached Link should do nothing.");
        assert_eq!(values(&a.link), "BD");

        // A popped Link can join a chain again.
        c.link.insert_after(&d.link);
        assert_eq!(values(&a.link), "BDC");

        b.link.pop();
        c.link.pop();
        d.link.pop();
        assert!(a.link.is_empty());
        a.link.verify_links();
    }
}

#[test]
fn test_pop_uninitialized() {
    let link = Link::new();
    // SAFETY: link has no neighbours to modify.
    unsafe { link.pop() };
    assert!(link.is_detached(), "Popping should initialize the Link.");
}

#[test]
fn test_find_if() {
    let head = Link::new();
    head.init();
    let items = ['a', 'b', 'c', 'b'].map(Item::new);
    let offset = link_offset!(Item, link);

    // SAFETY: head and items stay in place until the end of the test.
    unsafe {
        for item in &items {
            item.link.init();
            item.link.insert_before(&head);
        }

        let first_b = head.find_if(|link| offset.entry(link).value == 'b');
        assert!(ptr::eq(first_b, &items[1].link));

        let last_b = head.rfind_if(|link| offset.entry(link).value == 'b');
        assert!(ptr::eq(last_b, &items[3].link));

        let missing = head.find_if(|link| offset.entry(link).value == 'z');
        assert!(ptr::eq(missing, &head), "find_if should return the head when nothing matches.");
        let missing = head.rfind_if(|_| false);
        assert!(ptr::eq(missing, &head));

        let empty = Link::new();
        empty.init();
        assert!(ptr::eq(empty.find_if(|_| true), &empty));
    }
}

#[test]
fn test_iter_double_ended() {
    let head = Link::new();
    head.init();
    let items = ['1', '2', '3', '4', '5'].map(Item::new);
    let offset = link_offset!(Item, link);

    // SAFETY: head and items stay in place until the end of the test.
    unsafe {
        for item in &items {
            item.link.init();
            item.link.insert_before(&head);
        }

        let mut iter = head.iter_entries(offset);
        assert_eq!(iter.next().map(|i| i.value), Some('1'));
        assert_eq!(iter.next_back().map(|i| i.value), Some('5'));
        assert_eq!(iter.next().map(|i| i.value), Some('2'));
        assert_eq!(iter.next_back().map(|i| i.value), Some('4'));
        assert_eq!(iter.next().map(|i| i.value), Some('3'));
        assert!(iter.next().is_none(), "Both ends should meet in the middle.");
        assert!(iter.next_back().is_none());

        let iter = head.iter();
        let restarted = iter.clone();
        assert_eq!(iter.count(), 5);
        assert_eq!(restarted.count(), 5, "A cloned iterator should restart independently.");
        assert!(ptr::eq(head.iter().head(), &head));
    }
}

#[test]
fn test_pop_while_iterating() {
    let head = Link::new();
    head.init();
    let items = ['a', 'b', 'c', 'd'].map(Item::new);
    let offset = link_offset!(Item, link);

    // SAFETY: head and items stay in place until the end of the test.
    unsafe {
        for item in &items {
            item.link.init();
            item.link.insert_before(&head);
        }

        for item in head.iter_entries(offset) {
            if item.value != 'c' {
                item.link.pop();
            }
        }
        assert_eq!(values(&head), "c");

        for link in head.iter().rev() {
            link.pop();
        }
        assert!(head.is_empty());
    }
}

#[test]
fn test_link_offset() {
    struct Padded {
        _before: [u64; 3],
        link: Link,
        _after: u8,
    }

    let offset = link_offset!(Padded, link);
    assert_eq!(offset.offset(), std::mem::offset_of!(Padded, link));

    let padded = Padded {
        _before: [0; 3],
        link: Link::new(),
        _after: 0,
    };
    assert!(ptr::eq(offset.entry_ptr(&padded.link), &padded));
    // SAFETY: The link is a field of padded.
    assert!(ptr::eq(unsafe { offset.entry(&padded.link) }, &padded));
    // SAFETY: As above.
    assert!(ptr::eq(unsafe { entry!(&padded.link, Padded, link) }, &padded));
}

#[test]
#[should_panic]
fn test_link_offset_out_of_bounds() {
    let _ = LinkOffset::<u8>::new(0);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic]
fn test_insert_linked() {
    let [a, b, c] = ['A', 'B', 'C'].map(Item::new);
    a.link.init();
    c.link.init();

    // SAFETY: The insertion panics before modifying anything.
    unsafe {
        b.link.insert_after(&a.link);
        b.link.insert_after(&c.link);
    }
}

#[test]
#[should_panic]
fn test_verify_corrupted() {
    let link = Link::new();
    // SAFETY: verify_links doesn't follow absent links.
    unsafe { link.verify_links() };
}

#[test]
fn test_verify_links() {
    let [a, b, c] = ['A', 'B', 'C'].map(Item::new);
    a.link.init();

    // SAFETY: All items stay in place until the end of the test.
    unsafe {
        b.link.insert_after(&a.link);
        c.link.insert_after(&b.link);
        a.link.verify_links();
        c.link.verify_links();
    }
}

#[test]
#[should_panic]
fn test_verify_mismatched_links() {
    let [a, b, c] = ['A', 'B', 'C'].map(Item::new);
    a.link.init();

    // SAFETY: All items stay in place until the end of the test, the broken back link still
    // points to a valid Link.
    unsafe {
        b.link.insert_after(&a.link);
        c.link.insert_after(&b.link);
        c.link.prev.set(Some(a.link.as_non_null()));
        a.link.verify_links();
    }
}

#[test]
fn test_debug() {
    let link = Link::new();
    let debug = format!("{link:?}");
    assert!(debug.starts_with("Link"));
    assert!(debug.contains("0x0"), "Absent links should be shown as null.");
}
