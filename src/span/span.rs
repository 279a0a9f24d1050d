use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Index, IndexMut, Range};
use std::slice::{self, Iter, IterMut};

use super::{Edge, IndexOutOfBounds, InvalidSpan, SpanError, View, check_count};
use crate::mem::MemView;
use crate::util::result::ResultExtension;
use crate::util::validity::Validity::{self, *};

/// A mutable, non-owning window over a contiguous sequence of `T`. See the
/// [module documentation](super) for an overview.
///
/// A Span has exclusive access to its elements, so unlike a [`View`] it can't be copied. Methods
/// which take elements from either end consume the Span and return one aliasing the remaining
/// memory, [`Span::reborrow`] can be used to keep the original around.
///
/// Every read-only operation is provided through [`View`], either via [`Span::as_view`] or the
/// delegating methods here.
///
/// # Examples
/// ```
/// # use span_utils::span::{Edge, Span};
/// let mut arr = [1, 2, 3, 4, 5];
/// let mut span = Span::from_array(&mut arr);
///
/// span.reborrow().last(2).fill(0);
/// span.reborrow().shrink(3, Edge::Back)[0] = 9;
///
/// assert_eq!(span, [9, 2, 3, 0, 0]);
/// ```
pub struct Span<'a, T> {
    pub(crate) state: Validity<&'a mut [T]>,
}

impl<'a, T> Span<'a, T> {
    /// The Span which refers to no memory at all. Distinct from an empty Span.
    pub const INVALID: Span<'a, T> = Span { state: Invalid };

    /// Creates a valid Span over the provided slice.
    pub fn new(slice: &'a mut [T]) -> Span<'a, T> {
        Span { state: Valid(slice) }
    }

    /// Creates a valid Span over all elements of a fixed-size array.
    pub fn from_array<const N: usize>(arr: &'a mut [T; N]) -> Span<'a, T> {
        Span::new(arr.as_mut_slice())
    }

    /// Creates a Span from a pointer to its first element and an element count. A null `ptr`
    /// produces [`Span::INVALID`].
    ///
    /// # Safety
    /// If `ptr` is non-null, it needs to satisfy the requirements of [`slice::from_raw_parts_mut`]
    /// for `len` elements and the lifetime `'a`.
    pub unsafe fn from_raw_parts(ptr: *mut T, len: usize) -> Span<'a, T> {
        if ptr.is_null() {
            Span::INVALID
        } else {
            // SAFETY: ptr is non-null and the caller upholds the remaining requirements.
            Span::new(unsafe { slice::from_raw_parts_mut(ptr, len) })
        }
    }

    /// Returns true if this Span refers to memory, even if that range is empty.
    pub const fn is_valid(&self) -> bool {
        self.state.is_valid()
    }

    /// Returns true if this is [`Span::INVALID`].
    pub const fn is_invalid(&self) -> bool {
        self.state.is_invalid()
    }

    /// Returns the number of elements in the Span. An invalid Span has no elements.
    pub const fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns true if the Span has no elements, which includes invalid Spans.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the elements of the Span as a slice. An invalid Span produces an empty slice.
    pub const fn as_slice(&self) -> &[T] {
        match &self.state {
            Invalid => &[],
            Valid(slice) => &**slice,
        }
    }

    /// Returns the elements of the Span as a mutable slice. An invalid Span produces an empty
    /// slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match &mut self.state {
            Invalid => &mut [],
            Valid(slice) => slice,
        }
    }

    /// Converts the Span into a mutable slice for its whole lifetime. An invalid Span produces an
    /// empty slice.
    pub fn into_slice(self) -> &'a mut [T] {
        match self.state {
            Invalid => &mut [],
            Valid(slice) => slice,
        }
    }

    /// Converts the Span into a mutable slice, or an [`Err`] if the Span is invalid.
    pub fn try_into_slice(self) -> Result<&'a mut [T], InvalidSpan> {
        self.state.ok_or(InvalidSpan)
    }

    /// Returns a read-only View of the Span's elements.
    pub fn as_view(&self) -> View<'_, T> {
        match &self.state {
            Invalid => View::INVALID,
            Valid(slice) => View::new(slice),
        }
    }

    /// Converts the Span into a read-only View with the same lifetime.
    pub fn into_view(self) -> View<'a, T> {
        match self.state {
            Invalid => View::INVALID,
            Valid(slice) => View::new(slice),
        }
    }

    /// Returns a Span over the same elements, borrowing this one. Used to take sub-ranges without
    /// giving up the original Span.
    pub fn reborrow(&mut self) -> Span<'_, T> {
        match &mut self.state {
            Invalid => Span::INVALID,
            Valid(slice) => Span::new(slice),
        }
    }

    /// Returns the address of the first element, or null for an invalid Span.
    pub fn begin(&self) -> *mut T {
        self.as_view().begin().cast_mut()
    }

    /// Returns the address one past the last element, or null for an invalid Span. The result must
    /// never be dereferenced.
    pub fn end(&self) -> *mut T {
        self.as_view().end().cast_mut()
    }

    /// Returns the address of the last element, the starting point for iterating in reverse.
    pub fn rbegin(&self) -> *mut T {
        self.as_view().rbegin().cast_mut()
    }

    /// Returns the address one before the first element, the end point for iterating in reverse.
    /// The result must never be dereferenced.
    pub fn rend(&self) -> *mut T {
        self.as_view().rend().cast_mut()
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the Span.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let slice = self.as_slice();
        slice.get(index).ok_or(IndexOutOfBounds { index, len: slice.len() })
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the Span.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`]
    /// on a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let slice = self.as_mut_slice();
        let len = slice.len();
        slice.get_mut(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Returns a Span of the first `count` elements.
    ///
    /// # Panics
    /// Panics if the Span is invalid or has less than `count` elements.
    pub fn first(self, count: usize) -> Span<'a, T> {
        self.try_first(count).throw()
    }

    /// Checked version of [`Span::first`].
    pub fn try_first(self, count: usize) -> Result<Span<'a, T>, SpanError> {
        Ok(self.try_split_at(count)?.0)
    }

    /// Returns a Span of the last `count` elements.
    ///
    /// # Panics
    /// Panics if the Span is invalid or has less than `count` elements.
    pub fn last(self, count: usize) -> Span<'a, T> {
        self.try_last(count).throw()
    }

    /// Checked version of [`Span::last`].
    pub fn try_last(self, count: usize) -> Result<Span<'a, T>, SpanError> {
        let len = self.as_view().try_as_slice()?.len();
        check_count(count, len)?;
        Ok(self.try_split_at(len - count)?.1)
    }

    /// Returns a Span with `count` elements removed from the provided `edge`.
    ///
    /// # Panics
    /// Panics if the Span is invalid or has less than `count` elements.
    pub fn shrink(self, count: usize, edge: Edge) -> Span<'a, T> {
        self.try_shrink(count, edge).throw()
    }

    /// Checked version of [`Span::shrink`].
    pub fn try_shrink(self, count: usize, edge: Edge) -> Result<Span<'a, T>, SpanError> {
        match edge {
            Edge::Front => Ok(self.try_split_at(count)?.1),
            Edge::Back => {
                let len = self.as_view().try_as_slice()?.len();
                check_count(count, len)?;
                self.try_first(len - count)
            },
        }
    }

    /// Splits the Span in two, the first containing `count` elements and the second containing the
    /// rest.
    ///
    /// # Panics
    /// Panics if the Span is invalid or has less than `count` elements.
    pub fn split_at(self, count: usize) -> (Span<'a, T>, Span<'a, T>) {
        self.try_split_at(count).throw()
    }

    /// Checked version of [`Span::split_at`].
    pub fn try_split_at(self, count: usize) -> Result<(Span<'a, T>, Span<'a, T>), SpanError> {
        let slice = self.try_into_slice()?;
        check_count(count, slice.len())?;
        let (front, back) = slice.split_at_mut(count);
        Ok((Span::new(front), Span::new(back)))
    }

    /// Returns a Span extended by `count` elements past the provided `edge`.
    ///
    /// # Panics
    /// Panics if the Span is invalid.
    ///
    /// # Safety
    /// The `count` elements directly before the first element (for [`Edge::Front`]) or after the
    /// last element (for [`Edge::Back`]) need to be initialized, belong to the same allocation as
    /// the Span and be valid for reads and writes for `'a`, with no other live references to them.
    ///
    /// The pointer used for the grown range is derived from the Span's own reference, so its
    /// provenance has to cover the added elements. Spans created by sub-ranging a larger one only
    /// meet this under the Tree Borrows aliasing model, Stacked Borrows restricts them to their
    /// sub-range.
    pub unsafe fn grow(self, count: usize, edge: Edge) -> Span<'a, T> {
        let slice = self.try_into_slice().throw();
        let len = slice.len();
        let start = match edge {
            // SAFETY: The caller guarantees that the preceding elements are in the same allocation.
            Edge::Front => unsafe { slice.as_mut_ptr().sub(count) },
            Edge::Back => slice.as_mut_ptr(),
        };
        // SAFETY: The caller guarantees exclusive access to all elements of the grown range.
        Span::new(unsafe { slice::from_raw_parts_mut(start, len + count) })
    }

    /// Returns the index of the first element matching `pred`.
    pub fn find_if(&self, pred: impl FnMut(&T) -> bool) -> Option<usize> {
        self.as_view().find_if(pred)
    }

    /// Returns the index of the last element matching `pred`.
    pub fn rfind_if(&self, pred: impl FnMut(&T) -> bool) -> Option<usize> {
        self.as_view().rfind_if(pred)
    }

    /// Returns an iterator over the elements of the Span, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator over mutable references to the elements of the Span, front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the range of valid indices for this Span.
    pub fn indices(&self) -> Range<usize> {
        0..self.len()
    }

    /// Returns the untyped byte range covered by this Span.
    pub fn as_mem_view(&self) -> MemView<'_> {
        self.as_view().as_mem_view()
    }

    /// Replaces every element with a clone of `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.as_mut_slice().fill(value);
    }

    /// Copies all elements of `src` into this Span.
    ///
    /// # Panics
    /// Panics if `src` and the Span have different lengths.
    pub fn copy_from(&mut self, src: View<'_, T>)
    where
        T: Copy,
    {
        assert_eq!(
            self.len(),
            src.len(),
            "Can't copy a view with {} elements into a span with {} elements!",
            src.len(),
            self.len(),
        );
        self.as_mut_slice().copy_from_slice(src.as_slice());
    }

    /// Swaps this Span with [`Span::INVALID`], returning the original.
    pub fn take(&mut self) -> Span<'a, T> {
        mem::take(self)
    }
}

impl<T: PartialEq> Span<'_, T> {
    /// Returns the index of the first element equal to `item`.
    pub fn find(&self, item: &T) -> Option<usize> {
        self.as_view().find(item)
    }

    /// Returns the index of the last element equal to `item`.
    pub fn rfind(&self, item: &T) -> Option<usize> {
        self.as_view().rfind(item)
    }

    /// Returns true if the Span contains an element equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.as_view().contains(item)
    }
}

impl<T> Default for Span<'_, T> {
    fn default() -> Self {
        Span::INVALID
    }
}

impl<T: PartialEq> PartialEq for Span<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_view() == other.as_view()
    }
}

impl<T: Eq> Eq for Span<'_, T> {}

impl<'a, T: PartialEq> PartialEq<View<'a, T>> for Span<'_, T> {
    fn eq(&self, other: &View<'a, T>) -> bool {
        self.as_view() == *other
    }
}

impl<T: PartialEq> PartialEq<[T]> for Span<'_, T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_view() == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Span<'_, T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_view() == *other
    }
}

impl<T: Hash> Hash for Span<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_view().hash(state);
    }
}

impl<T> Index<usize> for Span<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for Span<'_, T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<'a, T> IntoIterator for Span<'a, T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_slice().iter_mut()
    }
}

impl<'a, T> IntoIterator for &'a Span<'_, T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Span<'_, T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<'a, T> From<&'a mut [T]> for Span<'a, T> {
    fn from(value: &'a mut [T]) -> Self {
        Span::new(value)
    }
}

impl<'a, T, const N: usize> From<&'a mut [T; N]> for Span<'a, T> {
    fn from(value: &'a mut [T; N]) -> Self {
        Span::from_array(value)
    }
}

impl<'a, T> From<Span<'a, T>> for View<'a, T> {
    fn from(value: Span<'a, T>) -> Self {
        value.into_view()
    }
}

impl<T: Debug> Debug for Span<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.state {
            Invalid => write!(f, "Span(INVALID)"),
            Valid(slice) => f.debug_list().entries(slice.iter()).finish(),
        }
    }
}
