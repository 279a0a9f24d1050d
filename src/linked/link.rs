use std::cell::Cell;
use std::fmt::{self, Debug, Formatter};
use std::ptr::{self, NonNull};

use super::{Entries, Iter, LinkOffset};

pub(crate) type LinkPtr = Option<NonNull<Link>>;

/// A node of an intrusive, circular, doubly-linked list, embedded in the record it links.
///
/// A Link is always in one of two states: detached, where it points to itself in both directions,
/// or linked, where it is part of a chain with at least one other Link. [`Link::init`] and
/// [`Link::pop`] leave a Link detached and inserting a detached Link links it.
///
/// [`Link::new`] creates a Link with no links at all, which must be initialized before use. Until
/// then, it reports itself as [corrupted](Link::is_corrupted).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of Links in the chain, excluding the head.
///
/// | Method | Complexity |
/// |-|-|
/// | `init` | `O(1)` |
/// | `insert_after/before` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `size` | `O(n)` |
/// | `find_if` | `O(n)` |
pub struct Link {
    pub(crate) next: Cell<LinkPtr>,
    pub(crate) prev: Cell<LinkPtr>,
}

impl Link {
    /// Creates a new Link with no links. [`Link::init`] needs to be called once the Link is at
    /// its final address.
    pub const fn new() -> Link {
        Link {
            next: Cell::new(None),
            prev: Cell::new(None),
        }
    }

    /// Detaches the Link by pointing it to itself in both directions. Any chain it was part of is
    /// left untouched, see [`Link::pop`] to leave a chain properly.
    pub fn init(&self) {
        let this = Some(self.as_non_null());
        self.next.set(this);
        self.prev.set(this);
    }

    /// Returns true if either direction has no link, which is the case for a Link which hasn't
    /// been initialized.
    ///
    /// This is a diagnostic only: links to memory which is no longer a Link aren't detected.
    pub fn is_corrupted(&self) -> bool {
        self.next.get().is_none() || self.prev.get().is_none()
    }

    /// Returns true if the Link points to itself in both directions.
    pub fn is_detached(&self) -> bool {
        let this = Some(self.as_non_null());
        self.next.get() == this && self.prev.get() == this
    }

    /// Returns true if the list headed by this Link has no members. Equivalent to
    /// [`Link::is_detached`].
    pub fn is_empty(&self) -> bool {
        self.is_detached()
    }

    /// Inserts this Link into the chain containing `anchor`, directly after it.
    ///
    /// Only this Link, `anchor` and the Link previously after `anchor` are modified.
    ///
    /// # Safety
    /// - This Link can't be linked already. Inserting a linked Link corrupts both chains.
    /// - `anchor` needs to be initialized and all Links in its chain must be valid.
    /// - Neither this Link nor `anchor` may be moved or dropped until they have been popped.
    pub unsafe fn insert_after(&self, anchor: &Link) {
        debug_assert!(
            self.is_detached() || self.is_corrupted(),
            "Can't insert a Link which is already linked!"
        );
        debug_assert!(!anchor.is_corrupted(), "Can't insert after a corrupted Link!");

        let this = self.as_non_null();
        let next = anchor.next.get().unwrap_or(anchor.as_non_null());

        self.prev.set(Some(anchor.as_non_null()));
        self.next.set(Some(next));
        // SAFETY: next is part of anchor's chain and therefore valid.
        unsafe { next.as_ref() }.prev.set(Some(this));
        anchor.next.set(Some(this));
    }

    /// Inserts this Link into the chain containing `anchor`, directly before it. Inserting before
    /// a head appends to the end of its list.
    ///
    /// # Safety
    /// See [`Link::insert_after`].
    pub unsafe fn insert_before(&self, anchor: &Link) {
        let prev = anchor.prev.get().unwrap_or(anchor.as_non_null());
        // SAFETY: prev is part of anchor's chain and therefore valid, the remaining requirements
        // are passed on to the caller.
        unsafe { self.insert_after(prev.as_ref()) }
    }

    /// Removes this Link from its chain, connecting its neighbours to each other, and detaches it.
    /// Popping a detached Link does nothing apart from re-initializing it.
    ///
    /// # Safety
    /// Every Link in this Link's chain needs to be valid.
    pub unsafe fn pop(&self) {
        if let (Some(next), Some(prev)) = (self.next.get(), self.prev.get()) {
            // SAFETY: Both neighbours are part of this chain and therefore valid. For a detached
            // Link they are this Link itself.
            unsafe {
                prev.as_ref().next.set(Some(next));
                next.as_ref().prev.set(Some(prev));
            }
        }
        self.init();
    }

    /// Returns the Link after this one, or [`None`] if there is no link.
    ///
    /// # Safety
    /// The next Link needs to be valid for `'a`.
    pub unsafe fn next<'a>(&self) -> Option<&'a Link> {
        // SAFETY: The validity of the next Link is guaranteed by the caller.
        self.next.get().map(|next| unsafe { next.as_ref() })
    }

    /// Returns the Link before this one, or [`None`] if there is no link.
    ///
    /// # Safety
    /// The previous Link needs to be valid for `'a`.
    pub unsafe fn prev<'a>(&self) -> Option<&'a Link> {
        // SAFETY: The validity of the previous Link is guaranteed by the caller.
        self.prev.get().map(|prev| unsafe { prev.as_ref() })
    }

    /// Returns an iterator over every other Link in the chain, using this Link as the head. The
    /// head itself is never yielded. Call `rev` on the result to iterate backwards.
    ///
    /// The iterator reads ahead, so the most recently yielded Link may be popped during iteration.
    ///
    /// # Safety
    /// Every Link in the chain needs to be valid for the lifetime of the iterator.
    pub unsafe fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Returns an iterator over the records containing every other Link in the chain, using this
    /// Link as the head.
    ///
    /// # Safety
    /// As with [`Link::iter`], and every Link in the chain other than the head needs to be
    /// embedded in a `P` at the position described by `offset`.
    pub unsafe fn iter_entries<P>(&self, offset: LinkOffset<P>) -> Entries<'_, P> {
        Entries::new(Iter::new(self), offset)
    }

    /// Returns the first Link after this head for which `pred` returns true, or the head itself if
    /// there is none.
    ///
    /// # Safety
    /// Every Link in the chain needs to be valid.
    pub unsafe fn find_if(&self, pred: impl FnMut(&&Link) -> bool) -> &Link {
        // SAFETY: Passed on to the caller.
        unsafe { self.iter() }.find(pred).unwrap_or(self)
    }

    /// Returns the first Link before this head for which `pred` returns true, searching backwards,
    /// or the head itself if there is none.
    ///
    /// # Safety
    /// Every Link in the chain needs to be valid.
    pub unsafe fn rfind_if(&self, pred: impl FnMut(&&Link) -> bool) -> &Link {
        // SAFETY: Passed on to the caller.
        unsafe { self.iter() }.rev().find(pred).unwrap_or(self)
    }

    /// Returns the number of Links in the chain, excluding this head.
    ///
    /// # Safety
    /// Every Link in the chain needs to be valid.
    pub unsafe fn size(&self) -> usize {
        // SAFETY: Passed on to the caller.
        unsafe { self.iter() }.count()
    }

    /// Walks the whole chain from this Link, checking that every Link is linked back to by both of
    /// its neighbours.
    ///
    /// # Panics
    /// Panics if a corrupted Link is found or if the links in both directions don't agree.
    ///
    /// # Safety
    /// Every Link in the chain needs to be valid.
    pub unsafe fn verify_links(&self) {
        assert!(!self.is_corrupted(), "Head Link is corrupted!");

        let mut curr = self;
        loop {
            // SAFETY: curr is part of the chain, so its neighbours are valid.
            let (next, prev) = unsafe { (curr.next(), curr.prev()) };
            let (Some(next), Some(prev)) = (next, prev) else {
                panic!("Found a corrupted Link at {:p}!", curr);
            };
            let back_link = |link: LinkPtr| link.map_or(ptr::null(), |p| p.as_ptr().cast_const());
            assert!(
                ptr::eq(back_link(next.prev.get()), curr),
                "Link at {:p} isn't linked back to by its next Link!",
                curr
            );
            assert!(
                ptr::eq(back_link(prev.next.get()), curr),
                "Link at {:p} isn't linked back to by its previous Link!",
                curr
            );

            curr = next;
            if ptr::eq(curr, self) {
                break;
            }
        }
    }

    pub(crate) fn as_non_null(&self) -> NonNull<Link> {
        NonNull::from(self)
    }
}

impl Default for Link {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Link {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let ptr_or_null = |link: LinkPtr| link.map_or(ptr::null_mut(), NonNull::as_ptr);
        f.debug_struct("Link")
            .field("addr", &(self as *const Link))
            .field("next", &ptr_or_null(self.next.get()))
            .field("prev", &ptr_or_null(self.prev.get()))
            .finish()
    }
}
