use std::iter::FusedIterator;
use std::ptr;

use super::{Link, LinkOffset};

/// An iterator over the Links in a chain, excluding the head it was created from.
///
/// Both ends are read ahead of time, so the Link which was yielded last can be popped without
/// disturbing the iterator. Popping any other Link which hasn't been yielded yet is undefined
/// behaviour.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    pub(crate) head: &'a Link,
    pub(crate) front: &'a Link,
    pub(crate) back: &'a Link,
    pub(crate) done: bool,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(head: &'a Link) -> Iter<'a> {
        // SAFETY: The validity of every Link in the chain is guaranteed by the caller of
        // Link::iter.
        let (front, back) = unsafe { (head.next(), head.prev()) };
        let front = front.unwrap_or(head);
        let back = back.unwrap_or(head);
        Iter {
            head,
            front,
            back,
            done: ptr::eq(front, head) || ptr::eq(back, head),
        }
    }

    /// Returns the head this iterator was created from.
    pub fn head(&self) -> &'a Link {
        self.head
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Link;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let curr = self.front;
        if ptr::eq(curr, self.back) {
            self.done = true;
        } else {
            // SAFETY: curr is part of the chain, so the Link after it is valid.
            self.front = unsafe { curr.next() }.unwrap_or(self.head);
            self.done = ptr::eq(self.front, self.head);
        }
        Some(curr)
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let curr = self.back;
        if ptr::eq(curr, self.front) {
            self.done = true;
        } else {
            // SAFETY: curr is part of the chain, so the Link before it is valid.
            self.back = unsafe { curr.prev() }.unwrap_or(self.head);
            self.done = ptr::eq(self.back, self.head);
        }
        Some(curr)
    }
}

impl FusedIterator for Iter<'_> {}

/// An iterator over the records containing the Links of a chain, created by
/// [`Link::iter_entries`].
pub struct Entries<'a, P> {
    pub(crate) inner: Iter<'a>,
    pub(crate) offset: LinkOffset<P>,
}

impl<'a, P> Entries<'a, P> {
    pub(crate) fn new(inner: Iter<'a>, offset: LinkOffset<P>) -> Entries<'a, P> {
        Entries { inner, offset }
    }
}

impl<'a, P: 'a> Iterator for Entries<'a, P> {
    type Item = &'a P;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: The caller of Link::iter_entries guarantees that every Link is embedded in a P.
        self.inner.next().map(|link| unsafe { self.offset.entry(link) })
    }
}

impl<'a, P: 'a> DoubleEndedIterator for Entries<'a, P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        // SAFETY: As above.
        self.inner.next_back().map(|link| unsafe { self.offset.entry(link) })
    }
}

impl<'a, P: 'a> FusedIterator for Entries<'a, P> {}

impl<P> Clone for Entries<'_, P> {
    fn clone(&self) -> Self {
        Entries {
            inner: self.inner.clone(),
            offset: self.offset,
        }
    }
}
