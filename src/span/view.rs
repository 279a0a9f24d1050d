use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Index, Range};
use std::ptr;
use std::slice::{self, Iter};

use super::{Edge, IndexOutOfBounds, InvalidSpan, SpanError, check_count};
use crate::mem::MemView;
use crate::util::result::ResultExtension;
use crate::util::validity::Validity::{self, *};

/// A read-only, non-owning view over a contiguous sequence of `T`. See the
/// [module documentation](super) for an overview.
///
/// Views are [`Copy`], so sub-ranging a view leaves the original untouched. All views derived from
/// another alias the same memory, nothing is ever copied.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements in the View.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `get` | `O(1)` |
/// | `first/last` | `O(1)` |
/// | `shrink` | `O(1)` |
/// | `begin/end` | `O(1)` |
/// | `eq` | `O(n)` |
/// | `find` | `O(n)` |
///
/// # Examples
/// ```
/// # use span_utils::span::{Edge, View};
/// let arr = [1, 2, 3, 4, 5];
/// let view = View::from_array(&arr);
///
/// assert_eq!(view.first(2), [1, 2]);
/// assert_eq!(view.last(2), [4, 5]);
/// assert_eq!(view.shrink(1, Edge::Front), [2, 3, 4, 5]);
/// assert_eq!(view.find(&3), Some(2));
/// ```
pub struct View<'a, T> {
    pub(crate) state: Validity<&'a [T]>,
}

impl<'a, T> View<'a, T> {
    /// The View which refers to no memory at all. Distinct from an empty View.
    pub const INVALID: View<'a, T> = View { state: Invalid };

    /// Creates a valid View over the provided slice.
    pub const fn new(slice: &'a [T]) -> View<'a, T> {
        View { state: Valid(slice) }
    }

    /// Creates a valid View over all elements of a fixed-size array.
    pub const fn from_array<const N: usize>(arr: &'a [T; N]) -> View<'a, T> {
        View::new(arr.as_slice())
    }

    /// Creates a View from a pointer to its first element and an element count. A null `ptr`
    /// produces [`View::INVALID`].
    ///
    /// # Safety
    /// If `ptr` is non-null, it needs to satisfy the requirements of [`slice::from_raw_parts`]
    /// for `len` elements and the lifetime `'a`.
    pub unsafe fn from_raw_parts(ptr: *const T, len: usize) -> View<'a, T> {
        if ptr.is_null() {
            View::INVALID
        } else {
            // SAFETY: ptr is non-null and the caller upholds the remaining requirements.
            View::new(unsafe { slice::from_raw_parts(ptr, len) })
        }
    }

    /// Returns true if this View refers to memory, even if that range is empty.
    pub const fn is_valid(&self) -> bool {
        self.state.is_valid()
    }

    /// Returns true if this is [`View::INVALID`].
    pub const fn is_invalid(&self) -> bool {
        self.state.is_invalid()
    }

    /// Returns the number of elements in the View. An invalid View has no elements.
    pub const fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns true if the View has no elements, which includes invalid Views.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the elements of the View as a slice. An invalid View produces an empty slice, use
    /// [`View::try_as_slice`] to tell the two apart.
    pub const fn as_slice(&self) -> &'a [T] {
        match self.state {
            Invalid => &[],
            Valid(slice) => slice,
        }
    }

    /// Returns the elements of the View as a slice, or an [`Err`] if the View is invalid.
    pub const fn try_as_slice(&self) -> Result<&'a [T], InvalidSpan> {
        match self.state {
            Invalid => Err(InvalidSpan),
            Valid(slice) => Ok(slice),
        }
    }

    /// Returns the address of the first element, or null for an invalid View.
    pub fn begin(&self) -> *const T {
        match self.state {
            Invalid => ptr::null(),
            Valid(slice) => slice.as_ptr(),
        }
    }

    /// Returns the address one past the last element, or null for an invalid View. The result must
    /// never be dereferenced.
    pub fn end(&self) -> *const T {
        self.begin().wrapping_add(self.len())
    }

    /// Returns the address of the last element, the starting point for iterating in reverse. For
    /// an empty View this is the address before the first element and must not be dereferenced.
    pub fn rbegin(&self) -> *const T {
        self.end().wrapping_sub(1)
    }

    /// Returns the address one before the first element, the end point for iterating in reverse.
    /// The result must never be dereferenced.
    pub fn rend(&self) -> *const T {
        self.begin().wrapping_sub(1)
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the View.
    pub fn get(&self, index: usize) -> &'a T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&'a T, IndexOutOfBounds> {
        let slice = self.as_slice();
        slice.get(index).ok_or(IndexOutOfBounds { index, len: slice.len() })
    }

    /// Returns a View of the first `count` elements.
    ///
    /// # Panics
    /// Panics if the View is invalid or has less than `count` elements.
    pub fn first(self, count: usize) -> View<'a, T> {
        self.try_first(count).throw()
    }

    /// Checked version of [`View::first`].
    pub fn try_first(self, count: usize) -> Result<View<'a, T>, SpanError> {
        Ok(self.try_split_at(count)?.0)
    }

    /// Returns a View of the last `count` elements.
    ///
    /// # Panics
    /// Panics if the View is invalid or has less than `count` elements.
    pub fn last(self, count: usize) -> View<'a, T> {
        self.try_last(count).throw()
    }

    /// Checked version of [`View::last`].
    pub fn try_last(self, count: usize) -> Result<View<'a, T>, SpanError> {
        let slice = self.try_as_slice()?;
        check_count(count, slice.len())?;
        Ok(View::new(&slice[slice.len() - count..]))
    }

    /// Returns a View with `count` elements removed from the provided `edge`.
    ///
    /// # Panics
    /// Panics if the View is invalid or has less than `count` elements.
    pub fn shrink(self, count: usize, edge: Edge) -> View<'a, T> {
        self.try_shrink(count, edge).throw()
    }

    /// Checked version of [`View::shrink`].
    pub fn try_shrink(self, count: usize, edge: Edge) -> Result<View<'a, T>, SpanError> {
        match edge {
            Edge::Front => Ok(self.try_split_at(count)?.1),
            Edge::Back => {
                let len = self.try_as_slice()?.len();
                check_count(count, len)?;
                self.try_first(len - count)
            },
        }
    }

    /// Splits the View in two, the first containing `count` elements and the second containing the
    /// rest. Equivalent to `(view.first(count), view.shrink(count, Edge::Front))`.
    ///
    /// # Panics
    /// Panics if the View is invalid or has less than `count` elements.
    pub fn split_at(self, count: usize) -> (View<'a, T>, View<'a, T>) {
        self.try_split_at(count).throw()
    }

    /// Checked version of [`View::split_at`].
    pub fn try_split_at(self, count: usize) -> Result<(View<'a, T>, View<'a, T>), SpanError> {
        let slice = self.try_as_slice()?;
        check_count(count, slice.len())?;
        let (front, back) = slice.split_at(count);
        Ok((View::new(front), View::new(back)))
    }

    /// Returns a View extended by `count` elements past the provided `edge`.
    ///
    /// # Panics
    /// Panics if the View is invalid.
    ///
    /// # Safety
    /// The `count` elements directly before the first element (for [`Edge::Front`]) or after the
    /// last element (for [`Edge::Back`]) need to be initialized, belong to the same allocation as
    /// the View and be valid for reads for `'a`.
    ///
    /// The pointer used for the grown range is derived from the View's own reference, so its
    /// provenance has to cover the added elements. Views created by sub-ranging a larger one only
    /// meet this under the Tree Borrows aliasing model, Stacked Borrows restricts them to their
    /// sub-range.
    pub unsafe fn grow(self, count: usize, edge: Edge) -> View<'a, T> {
        let slice = self.try_as_slice().throw();
        let start = match edge {
            // SAFETY: The caller guarantees that the preceding elements are in the same allocation.
            Edge::Front => unsafe { slice.as_ptr().sub(count) },
            Edge::Back => slice.as_ptr(),
        };
        // SAFETY: The caller guarantees that all elements of the grown range are readable.
        View::new(unsafe { slice::from_raw_parts(start, slice.len() + count) })
    }

    /// Returns the index of the first element matching `pred`.
    pub fn find_if(&self, pred: impl FnMut(&T) -> bool) -> Option<usize> {
        self.iter().position(pred)
    }

    /// Returns the index of the last element matching `pred`.
    pub fn rfind_if(&self, pred: impl FnMut(&T) -> bool) -> Option<usize> {
        self.iter().rposition(pred)
    }

    /// Returns an iterator over the elements of the View, front to back. Call `rev` on the result
    /// to iterate back to front.
    pub fn iter(&self) -> Iter<'a, T> {
        self.as_slice().iter()
    }

    /// Returns the range of valid indices for this View.
    pub const fn indices(&self) -> Range<usize> {
        0..self.len()
    }

    /// Returns the untyped byte range covered by this View. An invalid View produces
    /// [`MemView::INVALID`].
    pub fn as_mem_view(&self) -> MemView<'a> {
        match self.state {
            Invalid => MemView::INVALID,
            Valid(slice) => MemView::of(slice),
        }
    }
}

impl<T: PartialEq> View<'_, T> {
    /// Returns the index of the first element equal to `item`.
    pub fn find(&self, item: &T) -> Option<usize> {
        self.find_if(|i| i == item)
    }

    /// Returns the index of the last element equal to `item`.
    pub fn rfind(&self, item: &T) -> Option<usize> {
        self.rfind_if(|i| i == item)
    }

    /// Returns true if the View contains an element equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.find(item).is_some()
    }
}

impl<T> Clone for View<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for View<'_, T> {}

impl<T> Default for View<'_, T> {
    fn default() -> Self {
        View::INVALID
    }
}

impl<T: PartialEq> PartialEq for View<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.state, other.state) {
            (Invalid, Invalid) => true,
            (Valid(a), Valid(b)) => a.len() == b.len() && a == b,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for View<'_, T> {}

impl<T: PartialEq> PartialEq<[T]> for View<'_, T> {
    fn eq(&self, other: &[T]) -> bool {
        *self == View::new(other)
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for View<'_, T> {
    fn eq(&self, other: &[T; N]) -> bool {
        *self == View::from_array(other)
    }
}

impl<T: Hash> Hash for View<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_valid().hash(state);
        self.as_slice().hash(state);
    }
}

impl<T> Index<usize> for View<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<'a, T> IntoIterator for View<'a, T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &View<'a, T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> From<&'a [T]> for View<'a, T> {
    fn from(value: &'a [T]) -> Self {
        View::new(value)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for View<'a, T> {
    fn from(value: &'a [T; N]) -> Self {
        View::from_array(value)
    }
}

impl<T: Debug> Debug for View<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.state {
            Invalid => write!(f, "View(INVALID)"),
            Valid(slice) => f.debug_list().entries(slice).finish(),
        }
    }
}
