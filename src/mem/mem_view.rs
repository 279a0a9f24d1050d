use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;
use std::slice;

use super::{InvalidView, MergeError, NotOverlapping};
use crate::util::result::ResultExtension;
use crate::util::validity::Validity::{self, *};

/// A read-only, non-owning view over a contiguous range of bytes, described only by its start
/// address and length.
///
/// MemView is the untyped form of [`View`](crate::span::View) and exists to answer questions about
/// the position of ranges relative to each other, namely whether they overlap and what range
/// covers both of them. Any view can be converted with
/// [`View::as_mem_view`](crate::span::View::as_mem_view).
///
/// A MemView is either valid, referring to a (possibly empty) range, or [`MemView::INVALID`],
/// which refers to nothing. Overlap and merge treat an invalid operand as a programming error.
///
/// # Examples
/// ```
/// # use span_utils::mem::MemView;
/// let buf = [0_u8; 12];
/// let a = MemView::from_bytes(&buf[0..8]);
/// let b = MemView::from_bytes(&buf[4..12]);
/// assert!(a.is_overlapping(b));
/// assert_eq!(a.merge(b), MemView::from_bytes(&buf));
///
/// let c = MemView::from_bytes(&buf[8..12]);
/// assert!(!a.is_overlapping(c));
/// ```
#[derive(Clone, Copy)]
pub struct MemView<'a> {
    pub(crate) state: Validity<Region>,
    pub(crate) _phantom: PhantomData<&'a [u8]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Region {
    pub ptr: NonNull<u8>,
    pub len: usize,
}

impl Region {
    pub fn start(self) -> usize {
        self.ptr.addr().get()
    }

    pub fn end(self) -> usize {
        self.start() + self.len
    }

    pub fn is_lower_or_equal(a: &Region, b: &Region) -> bool {
        (a.start(), a.len) <= (b.start(), b.len)
    }
}

impl<'a> MemView<'a> {
    /// The MemView which refers to no memory at all. Distinct from an empty MemView.
    pub const INVALID: MemView<'a> = MemView {
        state: Invalid,
        _phantom: PhantomData,
    };

    /// Creates a MemView covering the provided bytes.
    pub fn from_bytes(bytes: &'a [u8]) -> MemView<'a> {
        MemView::of(bytes)
    }

    /// Creates a MemView covering the memory occupied by all elements of `slice`.
    pub fn of<T>(slice: &'a [T]) -> MemView<'a> {
        MemView {
            state: Valid(Region {
                ptr: NonNull::from(slice).cast(),
                len: mem::size_of_val(slice),
            }),
            _phantom: PhantomData,
        }
    }

    /// Creates a MemView from a raw start address and a length in bytes. A null `ptr` produces
    /// [`MemView::INVALID`].
    ///
    /// # Safety
    /// If `ptr` is non-null, the `len` bytes starting at `ptr` need to belong to a single
    /// allocation which outlives `'a`, and `ptr + len` must not overflow.
    pub unsafe fn from_raw_parts(ptr: *const u8, len: usize) -> MemView<'a> {
        match NonNull::new(ptr.cast_mut()) {
            Some(ptr) => MemView {
                state: Valid(Region { ptr, len }),
                _phantom: PhantomData,
            },
            None => MemView::INVALID,
        }
    }

    /// Returns true if this MemView refers to memory, even if that range is empty.
    pub const fn is_valid(&self) -> bool {
        self.state.is_valid()
    }

    /// Returns true if this is [`MemView::INVALID`].
    pub const fn is_invalid(&self) -> bool {
        self.state.is_invalid()
    }

    /// Returns the number of bytes covered. An invalid MemView covers 0 bytes.
    pub const fn len(&self) -> usize {
        match self.state {
            Invalid => 0,
            Valid(Region { len, .. }) => len,
        }
    }

    /// Returns true if the MemView covers no bytes, which includes invalid MemViews.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the address of the first byte.
    ///
    /// # Panics
    /// Panics if the MemView is invalid.
    pub fn start(&self) -> *const u8 {
        self.region().throw().ptr.as_ptr().cast_const()
    }

    /// Returns the address one past the last byte. The result must never be dereferenced.
    ///
    /// # Panics
    /// Panics if the MemView is invalid.
    pub fn end(&self) -> *const u8 {
        let region = self.region().throw();
        region.ptr.as_ptr().cast_const().wrapping_add(region.len)
    }

    /// Returns the covered bytes as a slice, or [`None`] for an invalid MemView.
    ///
    /// # Safety
    /// Every covered byte needs to be initialized, which isn't the case when the MemView was taken
    /// from a slice of a type with padding.
    pub unsafe fn as_bytes(&self) -> Option<&'a [u8]> {
        match self.state {
            Invalid => None,
            // SAFETY: Valid MemViews only cover memory borrowed for 'a and the caller guarantees
            // that it is initialized.
            Valid(Region { ptr, len }) => Some(unsafe { slice::from_raw_parts(ptr.as_ptr(), len) }),
        }
    }

    /// A total order over MemViews: invalid views come first, then views are ordered by start
    /// address, and views with the same start address are ordered by length.
    ///
    /// Intended as the comparator for [`sort`].
    pub fn is_lower_or_equal(a: &MemView<'_>, b: &MemView<'_>) -> bool {
        a.order_key() <= b.order_key()
    }

    /// Returns true if the two MemViews share at least one byte. Ranges which only touch, where one
    /// ends exactly where the other begins, don't overlap. An empty MemView never overlaps
    /// anything.
    ///
    /// # Panics
    /// Panics if either MemView is invalid.
    pub fn is_overlapping(self, other: MemView<'_>) -> bool {
        self.try_is_overlapping(other).throw()
    }

    /// Checked version of [`MemView::is_overlapping`], returning an [`Err`] if either MemView is
    /// invalid.
    pub fn try_is_overlapping(self, other: MemView<'_>) -> Result<bool, InvalidView> {
        let (a, b) = (self.region()?, other.region()?);
        if a.len == 0 || b.len == 0 {
            return Ok(false);
        }

        let (lower, upper) = sort(Region::is_lower_or_equal, a, b);
        Ok(lower.end() > upper.start())
    }

    /// Merges two overlapping MemViews, producing a MemView from the lowest start address to the
    /// highest end address of the two.
    ///
    /// # Panics
    /// Panics if either MemView is invalid or if they don't overlap.
    pub fn merge(self, other: MemView<'a>) -> MemView<'a> {
        self.try_merge(other).throw()
    }

    /// Checked version of [`MemView::merge`].
    pub fn try_merge(self, other: MemView<'a>) -> Result<MemView<'a>, MergeError> {
        if !self.try_is_overlapping(other)? {
            Err(NotOverlapping)?
        }

        let (lower, upper) = sort(MemView::is_lower_or_equal, self, other);
        let (lower, upper) = (lower.region()?, upper.region()?);

        Ok(MemView {
            state: Valid(Region {
                ptr: lower.ptr,
                len: lower.end().max(upper.end()) - lower.start(),
            }),
            _phantom: PhantomData,
        })
    }

    /// Returns true if every byte of `inner` is also covered by this MemView. An empty `inner`
    /// is contained if its address lies within this MemView or directly after it.
    ///
    /// # Panics
    /// Panics if either MemView is invalid.
    pub fn contains(self, inner: MemView<'_>) -> bool {
        let (outer, inner) = (self.region().throw(), inner.region().throw());
        outer.start() <= inner.start() && inner.end() <= outer.end()
    }

    pub(crate) fn region(&self) -> Result<Region, InvalidView> {
        self.state.ok_or(InvalidView)
    }

    fn order_key(&self) -> (bool, usize, usize) {
        match self.state {
            Invalid => (false, 0, 0),
            Valid(region) => (true, region.start(), region.len),
        }
    }
}

/// Returns `a` and `b` ordered so that `cmp(first, second)` holds, keeping the argument order when
/// `cmp(a, b)` is already true.
///
/// # Examples
/// ```
/// # use span_utils::mem;
/// assert_eq!(mem::sort(|a, b| a <= b, 5, 3), (3, 5));
/// assert_eq!(mem::sort(|a, b| a <= b, 3, 5), (3, 5));
/// ```
pub fn sort<T>(cmp: impl FnOnce(&T, &T) -> bool, a: T, b: T) -> (T, T) {
    if cmp(&a, &b) {
        (a, b)
    } else {
        (b, a)
    }
}

impl PartialEq for MemView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.order_key() == other.order_key()
    }
}

impl Eq for MemView<'_> {}

impl Hash for MemView<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.order_key().hash(state);
    }
}

impl Default for MemView<'_> {
    fn default() -> Self {
        MemView::INVALID
    }
}

impl<'a> From<&'a [u8]> for MemView<'a> {
    fn from(value: &'a [u8]) -> Self {
        MemView::from_bytes(value)
    }
}

impl Debug for MemView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.state {
            Invalid => write!(f, "MemView(INVALID)"),
            Valid(region) => write!(f, "MemView({:#x}..{:#x})", region.start(), region.end()),
        }
    }
}
